//! Configuration loading and management for the roster service.
//!
//! This module loads the service configuration from a YAML file: listener
//! address, shift rules, validation scope, and the seed roster.
//!
//! # Example
//!
//! ```no_run
//! use shift_roster::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/roster.yaml").unwrap();
//! println!("Slot capacity: {}", config.config().rules.max_per_slot);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_SEED_NAMES, DEFAULT_SEED_SHIFTS, SeedConfig, ServerConfig, ServiceConfig,
    ValidationScope,
};
