//! Application state for the roster API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::service::RosterService;
use crate::store::EmployeeStore;

/// Shared application state.
///
/// Holds the roster service, which in turn owns the employee store. Cloning
/// the state shares the same store.
#[derive(Clone)]
pub struct AppState {
    roster: RosterService,
}

impl AppState {
    /// Creates a state with an empty store configured from `config`.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            roster: RosterService::new(
                Arc::new(EmployeeStore::new()),
                config.rules.clone(),
                config.validation_scope,
            ),
        }
    }

    /// Returns the roster service.
    pub fn roster(&self) -> &RosterService {
        &self.roster
    }
}
