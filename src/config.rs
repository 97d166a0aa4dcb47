//! Planner configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration parameters for the travel planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Estimated cost charged per km when planning a trip.
    /// The estimate is truncated to whole currency units.
    pub cost_per_km: f64,

    /// Number of recommendations shown when the caller does not ask for a count.
    pub default_top_n: usize,

    /// Where the save file is written.
    pub save_path: PathBuf,
}

impl PlannerConfig {
    /// Parses a JSON document; missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: PlannerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cost_per_km.is_finite() || self.cost_per_km < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "cost_per_km must be a non-negative number, got {}",
                self.cost_per_km
            )));
        }
        Ok(())
    }

    /// Estimated cost of travelling `distance` km.
    pub fn estimate_cost(&self, distance: u64) -> u64 {
        // float-to-int `as` truncates and saturates
        (distance as f64 * self.cost_per_km) as u64
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            cost_per_km: 0.1,
            default_top_n: 3,
            save_path: PathBuf::from("travel_data.txt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.cost_per_km, 0.1);
        assert_eq!(config.default_top_n, 3);
        assert_eq!(config.save_path, PathBuf::from("travel_data.txt"));
    }

    #[test]
    fn test_estimate_cost_truncates() {
        let config = PlannerConfig::default();
        assert_eq!(config.estimate_cost(344), 34);
        assert_eq!(config.estimate_cost(10838), 1083);
        assert_eq!(config.estimate_cost(0), 0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PlannerConfig::from_json_str(r#"{ "cost_per_km": 0.25 }"#).unwrap();
        assert_eq!(config.cost_per_km, 0.25);
        assert_eq!(config.default_top_n, 3);
        assert_eq!(config.estimate_cost(1000), 250);
    }

    #[test]
    fn test_rejects_negative_cost() {
        let err = PlannerConfig::from_json_str(r#"{ "cost_per_km": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = PlannerConfig::from_json_str("{ cost_per_km: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "default_top_n": 5, "save_path": "trips.txt" }}"#).unwrap();

        let config = PlannerConfig::from_path(file.path()).unwrap();
        assert_eq!(config.default_top_n, 5);
        assert_eq!(config.save_path, PathBuf::from("trips.txt"));

        let missing = PlannerConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(missing, ConfigError::Io(_)));
    }
}
