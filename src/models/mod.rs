// Models module - exports all model types

mod city;
mod route;
mod trip;

// Re-export model types
pub use self::city::{Attraction, City, Hotel};
pub use self::route::{ShortestPath, NOT_FOUND_DISTANCE};
pub use self::trip::{Trip, TripStatus};

// Common type aliases for improved code readability
pub type Distance = u64;
pub type Cost = u64;
pub type Popularity = f64;
pub type Rating = f64;
