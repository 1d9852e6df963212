//! Response types for the roster API.
//!
//! This module defines the success and error response bodies and maps
//! [`RosterError`] onto HTTP status codes.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RosterError;

/// Message returned when an employee is created.
pub const EMPLOYEE_ADDED: &str = "Employee added successfully";
/// Message returned when an employee is updated.
pub const EMPLOYEE_UPDATED: &str = "Employee updated successfully";
/// Message returned when an employee is deleted.
pub const EMPLOYEE_DELETED: &str = "Employee deleted successfully";
/// Message returned when an employee does not exist.
pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";
/// Message returned when a name is already taken.
pub const EMPLOYEE_EXISTS: &str = "Employee already exists in the system";

/// Confirmation body for write operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Identifier of the affected employee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

impl MessageResponse {
    /// Creates a confirmation for the given employee.
    pub fn new(message: impl Into<String>, id: Uuid) -> Self {
        Self {
            message: message.into(),
            id: Some(id),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RosterError> for ApiErrorResponse {
    fn from(error: RosterError) -> Self {
        match error {
            // Raised only at startup; no handler returns these.
            err @ (RosterError::ConfigNotFound { .. } | RosterError::ConfigParseError { .. }) => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "INTERNAL_ERROR",
                        "Internal server error",
                        err.to_string(),
                    ),
                }
            }
            RosterError::InvalidShiftFormat {
                employee,
                shift,
                reason,
            } => ApiErrorResponse::bad_request(ApiError::with_details(
                "INVALID_SHIFT_FORMAT",
                format!("Malformed shift '{}' for {}", shift, employee),
                format!("{}; expected \"HH:MM to HH:MM\"", reason),
            )),
            RosterError::ShiftRejected { message } => {
                ApiErrorResponse::bad_request(ApiError::validation_error(message))
            }
            RosterError::DuplicateName { name } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "DUPLICATE_NAME",
                    EMPLOYEE_EXISTS,
                    format!("An employee named '{}' is already stored", name),
                ),
            ),
            RosterError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "NOT_FOUND",
                    EMPLOYEE_NOT_FOUND,
                    format!("No employee has id '{}'", id),
                ),
            },
        }
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        let error = match rejection {
            JsonRejection::JsonDataError(err) => {
                let body_text = err.body_text();
                if body_text.contains("missing field") {
                    ApiError::validation_error(body_text)
                } else {
                    ApiError::malformed_json(body_text)
                }
            }
            JsonRejection::JsonSyntaxError(err) => {
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
            }
            _ => ApiError::malformed_json("Failed to parse request body"),
        };
        ApiErrorResponse::bad_request(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response: ApiErrorResponse = RosterError::EmployeeNotFound {
            id: "abc".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.message, "Employee not found");
    }

    #[test]
    fn test_shift_rejected_maps_to_400_with_verbatim_message() {
        let response: ApiErrorResponse = RosterError::ShiftRejected {
            message: "Invalid shift timing for Bob: 09:00 to 17:00".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
        assert_eq!(
            response.error.message,
            "Invalid shift timing for Bob: 09:00 to 17:00"
        );
    }

    #[test]
    fn test_duplicate_name_maps_to_400() {
        let response: ApiErrorResponse = RosterError::DuplicateName {
            name: "David".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "DUPLICATE_NAME");
        assert_eq!(response.error.message, "Employee already exists in the system");
    }

    #[test]
    fn test_invalid_shift_format_maps_to_400() {
        let response: ApiErrorResponse = RosterError::InvalidShiftFormat {
            employee: "Eve".to_string(),
            shift: "noon".to_string(),
            reason: "start time is missing ':' separator".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_SHIFT_FORMAT");
        assert!(response.error.message.contains("Eve"));
    }

    #[test]
    fn test_config_errors_map_to_internal_error() {
        let errors = [
            RosterError::ConfigNotFound {
                path: "/x".to_string(),
            },
            RosterError::ConfigParseError {
                path: "/x".to_string(),
                message: "bad indent".to_string(),
            },
        ];

        for err in errors {
            let response: ApiErrorResponse = err.into();
            assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(response.error.code, "INTERNAL_ERROR");
            assert!(response.error.details.unwrap().contains("/x"));
        }
    }

    #[test]
    fn test_message_response_serialization() {
        let id = Uuid::new_v4();
        let json = serde_json::to_value(MessageResponse::new(EMPLOYEE_ADDED, id)).unwrap();
        assert_eq!(json["message"], "Employee added successfully");
        assert_eq!(json["id"], id.to_string());
    }
}
