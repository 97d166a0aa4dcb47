use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use travel_planner::utils::init_data::sample_planner;
use travel_planner::{
    CitySearch, PlannerConfig, PlannerError, SortOrder, TravelPlanner, TripSortKey,
};

/// Environment variable naming an optional JSON config file
const CONFIG_ENV: &str = "TRAVEL_PLANNER_CONFIG";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => match PlannerConfig::from_path(&path) {
            Ok(config) => {
                info!(%path, "loaded config");
                config
            }
            Err(e) => {
                error!(%path, "failed to load config: {}", e);
                return ExitCode::FAILURE;
            }
        },
        Err(_) => PlannerConfig::default(),
    };

    let mut planner = match sample_planner(config) {
        Ok(planner) => planner,
        Err(e) => {
            error!("failed to load sample data: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run_session(&mut planner) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("session failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Scripted planning session over the sample data
fn run_session(planner: &mut TravelPlanner) -> Result<(), PlannerError> {
    println!("\n=== Available Routes ===");
    for (city, neighbors) in planner.routes() {
        let links: Vec<String> = neighbors
            .iter()
            .map(|(neighbor, distance)| format!("{}({}km)", neighbor, distance))
            .collect();
        println!("{} connects to: {}", city, links.join(" "));
    }

    println!("\n=== Plan New Trips ===");
    for (source, destination, date) in [
        ("Rome", "Tokyo", "2024-10-01"),
        ("London", "Paris", "2024-10-12"),
        ("Paris", "Atlantis", "2024-11-01"),
    ] {
        match planner.plan_trip(source, destination, date) {
            Ok(planned) => {
                println!("Path: {}", planned.route.describe());
                println!("  Total Distance: {} km", planned.trip.distance);
                println!("  Estimated Cost: ${}", planned.trip.cost);
            }
            Err(PlannerError::NoRoute { origin, destination }) => {
                println!("No route found between {} and {}", origin, destination);
            }
            Err(e) => return Err(e),
        }
    }

    println!("\n=== City Information Search ===");
    for name in ["Tokyo", "Berlin"] {
        match planner.search_city(name) {
            CitySearch::Found(city) => print!("{}", city),
            CitySearch::Missing(all) => {
                println!("City '{}' not found in database.", name);
                println!("Available cities:");
                for city in all {
                    println!("- {}, {}", city.name, city.country);
                }
            }
        }
    }

    println!("\n=== Top Destination Recommendations ===");
    for (i, city) in planner.default_recommendations().iter().enumerate() {
        println!("{}. {} (Popularity: {})", i + 1, city.name, city.popularity);
    }

    println!("\n=== Trips Sorted by Cost (Quick Sort) ===");
    for trip in planner.sorted_trips(TripSortKey::Cost, SortOrder::Ascending) {
        println!("{}", trip);
    }

    println!("\n=== Trips Sorted by Distance (Merge Sort) ===");
    for trip in planner.sorted_trips(TripSortKey::Distance, SortOrder::Ascending) {
        println!("{}", trip);
    }

    println!("\n=== Future Trips Management ===");
    if let Some(trip) = planner.complete_next_trip()? {
        println!("Completed trip: {}", trip);
    }
    if let Some(trip) = planner.cancel_next_trip()? {
        println!("Cancelled trip: {}", trip);
    }

    println!("\n=== Travel History ===");
    for trip in planner.history_recent_first() {
        println!("{}", trip);
    }

    let save_path = planner.config().save_path.clone();
    planner.save_to_path(&save_path)?;
    println!("\nData saved to {}", save_path.display());

    Ok(())
}
