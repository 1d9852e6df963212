//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{RosterError, RosterResult};

use super::types::ServiceConfig;

/// Loads and provides access to the service configuration.
///
/// # Example
///
/// ```no_run
/// use shift_roster::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/roster.yaml").unwrap();
/// println!("Listening on port {}", loader.config().server.port);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML
    /// - The shift rules can never accept a roster
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&path_str, &content)?;
        info!(path = %path_str, "Loaded configuration");
        Ok(Self { config })
    }

    /// Loads configuration from the file if it exists, otherwise falls back
    /// to the defaults. A file that exists but is invalid is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "Configuration file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ServiceConfig {
        self.config
    }

    fn parse(path: &str, content: &str) -> RosterResult<ServiceConfig> {
        let config: ServiceConfig =
            serde_yaml::from_str(content).map_err(|e| RosterError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        if config.rules.permitted_start_hours.is_empty() {
            return Err(RosterError::ConfigParseError {
                path: path.to_string(),
                message: "rules.permitted_start_hours must not be empty".to_string(),
            });
        }
        if let Some(hour) = config.rules.permitted_start_hours.iter().find(|h| **h > 23) {
            return Err(RosterError::ConfigParseError {
                path: path.to_string(),
                message: format!(
                    "rules.permitted_start_hours contains {}, not an hour of the day",
                    hour
                ),
            });
        }
        // A capacity of 1 would reject every employee, even one alone in a slot.
        if config.rules.max_per_slot < 2 {
            return Err(RosterError::ConfigParseError {
                path: path.to_string(),
                message: "rules.max_per_slot must be at least 2".to_string(),
            });
        }

        Ok(config)
    }
}
