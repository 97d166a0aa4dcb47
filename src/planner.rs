//! Travel planner facade.
//!
//! Composes the city index, popularity queue, route graph and trip sorter,
//! and keeps the trip collections a planning session works with:
//!
//! - history: completed trips, most recent last (a stack)
//! - upcoming: planned trips, next one first (a queue)
//! - planned: every trip planned in this session, the set that gets sorted
//! - cancelled: trips taken off the upcoming queue without being made

use std::collections::{BTreeMap, VecDeque};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::algorithms::trip_sorter::{sort_by_cost, sort_by_distance};
use crate::algorithms::SortOrder;
use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::models::{City, ShortestPath, Trip};
use crate::utils::city_index::CityIndex;
use crate::utils::popularity_queue::PopularityQueue;
use crate::utils::route_graph::{Neighbors, RouteGraph};

const HISTORY_HEADING: &str = "=== TRAVEL HISTORY ===";
const UPCOMING_HEADING: &str = "=== FUTURE TRIPS ===";

/// Field a trip listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripSortKey {
    /// Quicksort, not stable
    Cost,
    /// Merge sort, stable
    Distance,
}

/// A newly planned trip together with the route it follows
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedTrip {
    pub trip: Trip,
    pub route: ShortestPath,
}

/// Outcome of a city search
#[derive(Debug, PartialEq)]
pub enum CitySearch<'a> {
    Found(&'a City),
    /// Not indexed; carries every indexed city in name order
    Missing(Vec<City>),
}

#[derive(Debug, Default)]
pub struct TravelPlanner {
    config: PlannerConfig,
    routes: RouteGraph,
    cities: CityIndex,
    popular: PopularityQueue,
    history: Vec<Trip>,
    upcoming: VecDeque<Trip>,
    planned: Vec<Trip>,
    cancelled: Vec<Trip>,
}

impl TravelPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Registers a city for lookup and recommendations
    pub fn add_city(&mut self, city: City) {
        debug!(city = %city.name, popularity = city.popularity, "adding city");
        self.popular.insert(city.clone());
        self.cities.insert(city);
    }

    pub fn add_route(&mut self, city_a: &str, city_b: &str, distance: i64) -> Result<(), PlannerError> {
        self.routes.add_route(city_a, city_b, distance)?;
        Ok(())
    }

    /// Plans a trip along the shortest route and queues it as upcoming
    pub fn plan_trip(
        &mut self,
        source: &str,
        destination: &str,
        date: &str,
    ) -> Result<PlannedTrip, PlannerError> {
        let route = self.routes.shortest_path(source, destination);
        let Some(distance) = route.total_distance() else {
            info!(source, destination, "no route found");
            return Err(PlannerError::NoRoute {
                origin: source.to_string(),
                destination: destination.to_string(),
            });
        };

        let cost = self.config.estimate_cost(distance);
        let trip = Trip::new(source, destination, distance, cost, date);
        info!(
            source,
            destination,
            distance,
            cost,
            path = %route.describe(),
            "trip planned"
        );

        self.upcoming.push_back(trip.clone());
        self.planned.push(trip.clone());
        Ok(PlannedTrip { trip, route })
    }

    /// Seeds the history with a trip that already took place
    pub fn record_completed(&mut self, trip: Trip) {
        self.history.push(trip);
    }

    /// Appends a trip to the upcoming queue without routing it
    pub fn schedule(&mut self, trip: Trip) {
        self.upcoming.push_back(trip);
    }

    /// Completed trips, most recent first
    pub fn history_recent_first(&self) -> Vec<&Trip> {
        self.history.iter().rev().collect()
    }

    /// Upcoming trips, next one first
    pub fn upcoming(&self) -> &VecDeque<Trip> {
        &self.upcoming
    }

    pub fn planned_trips(&self) -> &[Trip] {
        &self.planned
    }

    pub fn cancelled_trips(&self) -> &[Trip] {
        &self.cancelled
    }

    /// Removes the most recent history entry
    pub fn undo_last_trip(&mut self) -> Option<Trip> {
        let trip = self.history.pop();
        if let Some(trip) = &trip {
            info!(%trip, "undid last trip");
        }
        trip
    }

    /// Cancels the next upcoming trip. `Ok(None)` when nothing is queued.
    pub fn cancel_next_trip(&mut self) -> Result<Option<Trip>, PlannerError> {
        let Some(mut trip) = self.upcoming.pop_front() else {
            return Ok(None);
        };
        if let Err(err) = trip.cancel() {
            self.upcoming.push_front(trip);
            return Err(err.into());
        }

        info!(%trip, "cancelled trip");
        self.cancelled.push(trip.clone());
        Ok(Some(trip))
    }

    /// Marks the next upcoming trip completed and moves it to the history.
    /// `Ok(None)` when nothing is queued.
    pub fn complete_next_trip(&mut self) -> Result<Option<Trip>, PlannerError> {
        let Some(mut trip) = self.upcoming.pop_front() else {
            return Ok(None);
        };
        if let Err(err) = trip.complete() {
            self.upcoming.push_front(trip);
            return Err(err.into());
        }

        info!(%trip, "completed trip");
        self.history.push(trip.clone());
        Ok(Some(trip))
    }

    /// Looks a city up by name, falling back to the full listing
    pub fn search_city(&self, name: &str) -> CitySearch<'_> {
        match self.cities.find(name) {
            Some(city) => CitySearch::Found(city),
            None => CitySearch::Missing(self.cities.all_sorted()),
        }
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Appends a hotel or attraction through the index
    pub fn city_mut(&mut self, name: &str) -> Option<&mut City> {
        self.cities.find_mut(name)
    }

    /// The `n` most popular destinations
    pub fn top_destinations(&self, n: usize) -> Vec<City> {
        self.popular.top_n(n)
    }

    /// Recommendations using the configured default count
    pub fn default_recommendations(&self) -> Vec<City> {
        self.top_destinations(self.config.default_top_n)
    }

    /// A sorted copy of the trips planned this session
    pub fn sorted_trips(&self, key: TripSortKey, order: SortOrder) -> Vec<Trip> {
        let mut trips = self.planned.clone();
        match key {
            TripSortKey::Cost => sort_by_cost(&mut trips, order),
            TripSortKey::Distance => sort_by_distance(&mut trips, order),
        }
        trips
    }

    pub fn routes(&self) -> &BTreeMap<String, Neighbors> {
        self.routes.all_edges()
    }

    pub fn shortest_path(&self, source: &str, destination: &str) -> ShortestPath {
        self.routes.shortest_path(source, destination)
    }

    /// Writes history (most recent first) and upcoming trips as
    /// comma-joined records under their headings.
    pub fn write_save_file<W: Write>(&self, mut writer: W) -> Result<(), PlannerError> {
        writeln!(writer, "{}", HISTORY_HEADING)?;
        for trip in self.history.iter().rev() {
            writeln!(writer, "{}", trip.to_record())?;
        }

        writeln!(writer)?;
        writeln!(writer, "{}", UPCOMING_HEADING)?;
        for trip in &self.upcoming {
            writeln!(writer, "{}", trip.to_record())?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Writes the save file to `path`, replacing any previous one
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), PlannerError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_save_file(BufWriter::new(file))?;
        info!(
            path = %path.display(),
            history = self.history.len(),
            upcoming = self.upcoming.len(),
            "saved travel data"
        );
        Ok(())
    }
}
