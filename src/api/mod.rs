//! HTTP API module for the shift roster service.
//!
//! This module provides the REST endpoints for listing, creating, updating,
//! and deleting employees.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EmployeeRequest;
pub use response::{ApiError, ApiErrorResponse, HealthResponse, MessageResponse};
pub use state::AppState;
