// Trip model representing a planned, completed or cancelled journey

use crate::error::TripError;
use crate::models::{Cost, Distance};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a trip. `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    #[default]
    Planned,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Planned => "planned",
            TripStatus::Completed => "completed",
            TripStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, TripStatus::Planned)
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a journey between two cities
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Trip {
    /// Departure city name (need not be indexed)
    pub source: String,

    /// Arrival city name (need not be indexed)
    pub destination: String,

    /// Route length in km
    pub distance: Distance,

    /// Trip cost in currency units
    pub cost: Cost,

    /// Travel date, kept as given
    pub date: String,

    /// Current lifecycle state
    pub status: TripStatus,
}

impl Trip {
    /// Creates a new trip in the `Planned` state
    pub fn new<S: Into<String>, D: Into<String>, T: Into<String>>(
        source: S,
        destination: D,
        distance: Distance,
        cost: Cost,
        date: T,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            distance,
            cost,
            date: date.into(),
            status: TripStatus::Planned,
        }
    }

    /// Creates a trip with an explicit status, used when seeding history
    pub fn with_status(mut self, status: TripStatus) -> Self {
        self.status = status;
        self
    }

    /// Moves a planned trip to `Completed`
    pub fn complete(&mut self) -> Result<(), TripError> {
        self.transition(TripStatus::Completed)
    }

    /// Moves a planned trip to `Cancelled`
    pub fn cancel(&mut self) -> Result<(), TripError> {
        self.transition(TripStatus::Cancelled)
    }

    fn transition(&mut self, to: TripStatus) -> Result<(), TripError> {
        if self.status != TripStatus::Planned {
            return Err(TripError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }

    /// Comma-joined record: `source,destination,distance,cost,date,status`
    pub fn to_record(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.source, self.destination, self.distance, self.cost, self.date, self.status
        )
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} (Distance: {}km, Cost: ${}, Date: {}, Status: {})",
            self.source, self.destination, self.distance, self.cost, self.date, self.status
        )
    }
}
