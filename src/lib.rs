// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod utils;

// Re-exports for convenience
pub use algorithms::SortOrder;
pub use config::PlannerConfig;
pub use error::{ConfigError, PlannerError, RouteError, TripError};
pub use models::{Attraction, City, Hotel, ShortestPath, Trip, TripStatus};
pub use planner::{CitySearch, PlannedTrip, TravelPlanner, TripSortKey};
pub use utils::city_index::CityIndex;
pub use utils::popularity_queue::PopularityQueue;
pub use utils::route_graph::RouteGraph;
