//! Configuration types for the roster service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default so a partial file is valid.

use serde::{Deserialize, Serialize};

use crate::validation::ShiftRules;

/// Names assigned by the default seed roster.
pub const DEFAULT_SEED_NAMES: [&str; 9] = [
    "John", "Alice", "Michael", "Emma", "William", "Sophia", "David", "Olivia", "Daniel",
];

/// Shifts rotated through by the default seed roster.
pub const DEFAULT_SEED_SHIFTS: [&str; 3] = ["00:00 to 08:00", "08:00 to 16:00", "16:00 to 24:00"];

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener settings.
    pub server: ServerConfig,
    /// Shift validation rules.
    pub rules: ShiftRules,
    /// Which employees are validated on create and update.
    pub validation_scope: ValidationScope,
    /// Initial roster loaded at startup.
    pub seed: SeedConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// The set of employees passed to the validator on a write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationScope {
    /// Validate only the employee being written. The loader requires a slot
    /// capacity of at least 2, so a single record never fills a slot and only
    /// the start-hour rule applies.
    #[default]
    Candidate,
    /// Validate the stored roster together with the employee being written.
    Roster,
}

/// Seed roster settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Whether to seed the store at startup.
    pub enabled: bool,
    /// Employees to create, in order.
    pub names: Vec<String>,
    /// Shifts assigned round-robin to newly created employees.
    pub shifts: Vec<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            names: DEFAULT_SEED_NAMES.iter().map(|s| s.to_string()).collect(),
            shifts: DEFAULT_SEED_SHIFTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config: ServiceConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.validation_scope, ValidationScope::Candidate);
        assert!(!config.seed.enabled);
        assert_eq!(config.seed.names.len(), 9);
    }

    #[test]
    fn test_deserialize_full_config() {
        let yaml = r#"
server:
  host: 127.0.0.1
  port: 8080
rules:
  permitted_start_hours: [6, 14, 22]
  max_per_slot: 4
validation_scope: roster
seed:
  enabled: true
  names: [Ann, Ben]
  shifts: ["06:00 to 14:00"]
"#;
        let config: ServiceConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.rules.permitted_start_hours, vec![6, 14, 22]);
        assert_eq!(config.rules.max_per_slot, 4);
        assert_eq!(config.validation_scope, ValidationScope::Roster);
        assert!(config.seed.enabled);
        assert_eq!(config.seed.names, vec!["Ann", "Ben"]);
        assert_eq!(config.seed.shifts, vec!["06:00 to 14:00"]);
    }

    #[test]
    fn test_unknown_scope_is_rejected() {
        let result: Result<ServiceConfig, _> = serde_yaml::from_str("validation_scope: everyone");
        assert!(result.is_err());
    }
}
