//! HTTP request handlers for the roster API.
//!
//! This module contains the handler functions for all API endpoints. Handlers
//! only translate between HTTP and [`RosterService`](crate::service::RosterService);
//! roster rules live in the service and the validator.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::Employee;

use super::request::EmployeeRequest;
use super::response::{
    ApiErrorResponse, EMPLOYEE_ADDED, EMPLOYEE_DELETED, EMPLOYEE_UPDATED, HealthResponse,
    MessageResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .with_state(state)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handler for GET /employees.
///
/// Returns every employee sorted by shift text.
async fn list_employees(State(state): State<AppState>) -> impl IntoResponse {
    let employees = state.roster().list().await;
    info!(count = employees.len(), "Listed employees");
    Json(employees)
}

/// Handler for GET /employees/{id}.
async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let employee = state.roster().get(&id).await.inspect_err(|err| {
        warn!(id = %id, error = %err, "Employee lookup failed");
    })?;
    Ok(Json(employee))
}

/// Handler for POST /employees.
///
/// Returns 201 on success; 400 for a duplicate name, a rejected or malformed
/// shift, or an unreadable body.
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create request");

    let employee = read_employee(payload, correlation_id)?;

    let record = state.roster().create(employee).await.inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Create rejected");
    })?;

    info!(correlation_id = %correlation_id, id = %record.id, "Create completed");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(EMPLOYEE_ADDED, record.id)),
    ))
}

/// Handler for PUT /employees/{id}.
///
/// Returns 200 on success, 404 when the employee does not exist, and 400 for
/// the same reasons as create.
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, id = %id, "Processing update request");

    let employee = read_employee(payload, correlation_id)?;

    let record = state.roster().update(&id, employee).await.inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Update rejected");
    })?;

    info!(correlation_id = %correlation_id, id = %record.id, "Update completed");
    Ok(Json(MessageResponse::new(EMPLOYEE_UPDATED, record.id)))
}

/// Handler for DELETE /employees/{id}.
async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let record = state.roster().delete(&id).await.inspect_err(|err| {
        warn!(id = %id, error = %err, "Delete failed");
    })?;
    Ok(Json(MessageResponse::new(EMPLOYEE_DELETED, record.id)))
}

fn read_employee(
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<Employee, ApiErrorResponse> {
    match payload {
        Ok(Json(request)) => Ok(request.into()),
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Rejected request body"
            );
            Err(rejection.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::response::ApiError;
    use crate::config::ServiceConfig;
    use crate::models::StoredEmployee;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::from_config(&ServiceConfig::default())
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_valid_employee_returns_201() {
        let state = create_test_state();
        let router = create_router(state.clone());

        let response = router
            .oneshot(json_request(
                "POST",
                "/employees",
                r#"{"name": "David", "shift": "00:00 to 08:00"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let message: MessageResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(message.message, "Employee added successfully");

        let stored: StoredEmployee = state.roster().store().find_by_name("David").await.unwrap();
        assert_eq!(Some(stored.id), message.id);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request("POST", "/employees", "{invalid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_shift_returns_validation_error() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request("POST", "/employees", r#"{"name": "David"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("missing field"));
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/employees")
                    .body(Body::from(r#"{"name": "David", "shift": "00:00 to 08:00"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }
}
