// City model representing a travel destination with its hotels and attractions

use crate::models::{Popularity, Rating};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a hotel located in a city
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Hotel {
    /// Name of the hotel
    pub name: String,

    /// Guest rating, informational only
    pub rating: Rating,

    /// Price of one night
    pub price_per_night: u32,
}

impl Hotel {
    /// Creates a new hotel
    pub fn new<S: Into<String>>(name: S, rating: Rating, price_per_night: u32) -> Self {
        Self {
            name: name.into(),
            rating,
            price_per_night,
        }
    }
}

/// Represents an attraction located in a city
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attraction {
    /// Name of the attraction
    pub name: String,

    /// Visitor rating
    pub rating: Rating,

    /// Free-form category such as "Museum" or "Monument"
    pub kind: String,
}

impl Attraction {
    /// Creates a new attraction
    pub fn new<S: Into<String>, K: Into<String>>(name: S, rating: Rating, kind: K) -> Self {
        Self {
            name: name.into(),
            rating,
            kind: kind.into(),
        }
    }
}

/// Represents a travel destination.
///
/// The name is the identity key. `City::default()` (empty name, zero
/// popularity) doubles as the "nothing left" value returned by an empty
/// [`PopularityQueue`](crate::utils::popularity_queue::PopularityQueue).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct City {
    /// Unique name of the city
    pub name: String,

    /// Country the city belongs to
    pub country: String,

    /// Popularity score, higher is more popular
    pub popularity: Popularity,

    /// Hotels in this city
    pub hotels: Vec<Hotel>,

    /// Attractions in this city
    pub attractions: Vec<Attraction>,
}

impl City {
    /// Creates a new city without hotels or attractions
    pub fn new<S: Into<String>, C: Into<String>>(name: S, country: C, popularity: Popularity) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            popularity,
            hotels: Vec::new(),
            attractions: Vec::new(),
        }
    }

    /// Appends a hotel to the city
    pub fn add_hotel(&mut self, hotel: Hotel) {
        self.hotels.push(hotel);
    }

    /// Appends an attraction to the city
    pub fn add_attraction(&mut self, attraction: Attraction) {
        self.attractions.push(attraction);
    }

    /// Builder-style variant of [`City::add_hotel`]
    pub fn with_hotel(mut self, hotel: Hotel) -> Self {
        self.add_hotel(hotel);
        self
    }

    /// Builder-style variant of [`City::add_attraction`]
    pub fn with_attraction(mut self, attraction: Attraction) -> Self {
        self.add_attraction(attraction);
        self
    }

    /// True for the empty value handed out by an exhausted popularity queue
    pub fn is_placeholder(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {}, {} ===", self.name, self.country)?;
        writeln!(f, "Popularity Score: {}", self.popularity)?;

        writeln!(f, "Top Hotels:")?;
        for hotel in &self.hotels {
            writeln!(
                f,
                "  - {} (Rating: {}, ${}/night)",
                hotel.name, hotel.rating, hotel.price_per_night
            )?;
        }

        writeln!(f, "Top Attractions:")?;
        for attraction in &self.attractions {
            writeln!(
                f,
                "  - {} ({}, Rating: {})",
                attraction.name, attraction.kind, attraction.rating
            )?;
        }
        Ok(())
    }
}
