// Route result model for shortest path queries

use crate::models::Distance;
use serde::{Deserialize, Serialize};

/// Distance reported when no route exists
pub const NOT_FOUND_DISTANCE: i64 = -1;

/// Result of a shortest path query.
///
/// A missing route is reported as a value rather than an error:
/// `distance == -1` and an empty `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// Total length of the route, or -1 when no route exists
    pub distance: i64,

    /// City names from source to destination, inclusive
    pub path: Vec<String>,
}

impl ShortestPath {
    /// Creates a found route
    pub fn new(distance: Distance, path: Vec<String>) -> Self {
        Self {
            distance: i64::try_from(distance).unwrap_or(i64::MAX),
            path,
        }
    }

    /// The "no route" value
    pub fn not_found() -> Self {
        Self {
            distance: NOT_FOUND_DISTANCE,
            path: Vec::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.distance != NOT_FOUND_DISTANCE
    }

    /// Total distance when a route exists
    pub fn total_distance(&self) -> Option<Distance> {
        Distance::try_from(self.distance).ok()
    }

    /// Renders the path as `A -> B -> C`
    pub fn describe(&self) -> String {
        self.path.join(" -> ")
    }
}
