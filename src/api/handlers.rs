//! HTTP request handlers for the Salary Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::directory::EmployeeDirectory;
use crate::models::Workbook;

use super::request::{ProcessRequest, TotalDaysRequest};
use super::response::{
    ApiError, ApiErrorResponse, DirectoryRefreshed, TotalDays, TotalDaysUpdated,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary/process", post(process_handler))
        .route("/salary/process/raw", post(process_raw_handler))
        .route(
            "/salary/total-days",
            get(get_total_days_handler).post(set_total_days_handler),
        )
        .route("/salary/employees", get(list_employees_handler))
        .route("/salary/employees/refresh", post(refresh_employees_handler))
        .route("/salary/employees/:id", get(get_employee_handler))
        .route("/salary/results/:id", get(get_result_handler))
        .with_state(state)
}

/// Serializes `body` as a 200 JSON response.
fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON body rejection to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}

/// Handler for POST /salary/process.
///
/// Extracts attendance from the submitted workbook, computes salaries and
/// returns them. The results replace the cached results of the previous run.
async fn process_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance workbook");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Some(days) = request.total_days {
        state.processor().set_total_working_days(days);
    }

    run_processing(&state, &request.workbook, correlation_id)
}

/// Handler for POST /salary/process/raw.
///
/// Accepts a raw workbook document as the body. `application/yaml` and
/// `text/yaml` bodies are read as YAML, anything else as JSON. A body that
/// is not a workbook is rejected as malformed input.
async fn process_raw_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/json");
    info!(
        correlation_id = %correlation_id,
        content_type,
        bytes = body.len(),
        "Processing raw workbook body"
    );

    let parsed = if content_type.contains("yaml") {
        Workbook::from_yaml(&body)
    } else {
        Workbook::from_json(&body)
    };
    match parsed {
        Ok(workbook) => run_processing(&state, &workbook, correlation_id),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Raw workbook body rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Processes `workbook` and renders the results or the failure.
fn run_processing(state: &AppState, workbook: &Workbook, correlation_id: Uuid) -> Response {
    let start_time = Instant::now();
    match state.processor().process_workbook(workbook) {
        Ok(results) => {
            let total_payable: Decimal = results.iter().map(|r| r.final_payable_salary).sum();
            info!(
                correlation_id = %correlation_id,
                employees = results.len(),
                total_payable = %total_payable.round_dp(2),
                duration_us = start_time.elapsed().as_micros(),
                "Processing completed successfully"
            );
            json_ok(results)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Processing failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /salary/total-days.
async fn set_total_days_handler(
    State(state): State<AppState>,
    payload: Result<Json<TotalDaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    info!(correlation_id = %correlation_id, days = request.days, "Setting total working days");

    let stored = state.processor().set_total_working_days(request.days);
    json_ok(TotalDaysUpdated::new(stored))
}

/// Handler for GET /salary/total-days.
async fn get_total_days_handler(State(state): State<AppState>) -> Response {
    json_ok(TotalDays {
        total_working_days: state.processor().total_working_days(),
    })
}

/// Handler for GET /salary/employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let employees = state.processor().directory().list_employees();
    info!(employees = employees.len(), "Listing employee directory");
    json_ok(employees)
}

/// Handler for POST /salary/employees/refresh.
///
/// Re-reads `employees.yaml` and replaces the directory contents.
async fn refresh_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Refreshing employee directory");

    match state.processor().reload_directory() {
        Ok(count) => json_ok(DirectoryRefreshed::new(count)),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee directory refresh failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /salary/employees/:id.
///
/// Unknown identifiers return a placeholder record rather than an error.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    info!(employee_id = %employee_id, "Fetching employee");
    json_ok(state.processor().directory().get_employee(&employee_id))
}

/// Handler for GET /salary/results/:id.
async fn get_result_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.processor().cached_result(&employee_id) {
        Ok(result) => json_ok(result),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                error = %err,
                "Cached result lookup failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
