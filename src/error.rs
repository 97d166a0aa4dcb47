//! Error types.
//!
//! Lookups and routing report absence through values (`Option`, the
//! `ShortestPath` sentinel, the placeholder `City`), so these enums only cover
//! invalid input and I/O.

use crate::models::TripStatus;

/// Rejected route graph mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Dijkstra requires non-negative edge weights
    #[error("route {from} <-> {to} has negative distance {distance}")]
    NegativeDistance {
        from: String,
        to: String,
        distance: i64,
    },
}

/// Rejected trip status changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TripError {
    /// Only planned trips can change status
    #[error("cannot move trip from {from} to {to}")]
    InvalidTransition { from: TripStatus, to: TripStatus },
}

/// Errors raised by the travel planner facade.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("no route found between {origin} and {destination}")]
    NoRoute { origin: String, destination: String },

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Trip(#[from] TripError),

    #[error("failed to write save file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading a [`PlannerConfig`](crate::config::PlannerConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
