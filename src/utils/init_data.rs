use tracing::info;

use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::models::{Attraction, City, Hotel, Trip, TripStatus};
use crate::planner::TravelPlanner;

/// (city, city, distance in km)
const SAMPLE_ROUTES: [(&str, &str, i64); 9] = [
    ("Paris", "London", 344),
    ("Paris", "Rome", 1105),
    ("London", "Rome", 1435),
    ("Paris", "New York", 5837),
    ("London", "New York", 5585),
    ("Rome", "New York", 6905),
    ("Tokyo", "New York", 10838),
    ("Paris", "Tokyo", 9714),
    ("London", "Tokyo", 9560),
];

/// The five sample destinations with their hotels and attractions
pub fn sample_cities() -> Vec<City> {
    vec![
        City::new("Paris", "France", 9.5)
            .with_hotel(Hotel::new("Hotel Ritz", 4.8, 500))
            .with_hotel(Hotel::new("Ibis Budget", 4.2, 80))
            .with_attraction(Attraction::new("Eiffel Tower", 4.9, "Monument"))
            .with_attraction(Attraction::new("Louvre Museum", 4.7, "Museum")),
        City::new("London", "UK", 9.2)
            .with_hotel(Hotel::new("The Savoy", 4.9, 600))
            .with_hotel(Hotel::new("Premier Inn", 4.3, 90))
            .with_attraction(Attraction::new("Big Ben", 4.6, "Monument"))
            .with_attraction(Attraction::new("British Museum", 4.8, "Museum")),
        City::new("Rome", "Italy", 8.8)
            .with_hotel(Hotel::new("Hotel Eden", 4.7, 400))
            .with_hotel(Hotel::new("B&B Rome", 4.1, 70))
            .with_attraction(Attraction::new("Colosseum", 4.9, "Historical"))
            .with_attraction(Attraction::new("Vatican City", 4.8, "Religious")),
        City::new("Tokyo", "Japan", 9.0)
            .with_hotel(Hotel::new("Park Hyatt", 4.8, 450))
            .with_hotel(Hotel::new("Capsule Hotel", 4.0, 40))
            .with_attraction(Attraction::new("Tokyo Tower", 4.5, "Monument"))
            .with_attraction(Attraction::new("Senso-ji Temple", 4.6, "Religious")),
        City::new("New York", "USA", 9.3)
            .with_hotel(Hotel::new("The Plaza", 4.6, 550))
            .with_hotel(Hotel::new("YMCA", 3.8, 100))
            .with_attraction(Attraction::new("Statue of Liberty", 4.7, "Monument"))
            .with_attraction(Attraction::new("Central Park", 4.8, "Park")),
    ]
}

/// Builds a planner preloaded with the sample cities, routes and trips
pub fn sample_planner(config: PlannerConfig) -> Result<TravelPlanner, PlannerError> {
    let mut planner = TravelPlanner::new(config);

    for city in sample_cities() {
        planner.add_city(city);
    }

    for (city_a, city_b, distance) in SAMPLE_ROUTES {
        planner.add_route(city_a, city_b, distance)?;
    }

    planner.record_completed(
        Trip::new("Paris", "London", 344, 200, "2024-01-15").with_status(TripStatus::Completed),
    );
    planner.record_completed(
        Trip::new("London", "Rome", 1435, 350, "2024-02-20").with_status(TripStatus::Completed),
    );

    planner.schedule(Trip::new("Rome", "Tokyo", 9714, 800, "2024-08-15"));
    planner.schedule(Trip::new("Tokyo", "New York", 10838, 1200, "2024-09-01"));

    info!(
        cities = planner.city_count(),
        routes = SAMPLE_ROUTES.len(),
        "loaded sample travel data"
    );

    Ok(planner)
}
