//! Response types for the Salary Engine API.
//!
//! This module defines the success bodies, the error response structures and
//! error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Response body for `POST /salary/total-days`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalDaysUpdated {
    /// The value actually stored after coercion.
    pub total_working_days: u32,
    /// Always `success`; out-of-range requests are coerced rather than rejected.
    pub status: String,
    /// Human-readable confirmation.
    pub message: String,
}

impl TotalDaysUpdated {
    /// Builds the confirmation for a stored value.
    pub fn new(total_working_days: u32) -> Self {
        Self {
            total_working_days,
            status: "success".to_string(),
            message: "Total working days updated successfully".to_string(),
        }
    }
}

/// Response body for `GET /salary/total-days`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TotalDays {
    /// The current working-day setting.
    pub total_working_days: u32,
}

/// Response body for `POST /salary/employees/refresh`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryRefreshed {
    /// Always `success`; failures are reported as [`ApiError`].
    pub status: String,
    /// Human-readable confirmation.
    pub message: String,
    /// Employees held by the directory after the refresh.
    pub employee_count: usize,
}

impl DirectoryRefreshed {
    /// Builds the confirmation for a refreshed directory.
    pub fn new(employee_count: usize) -> Self {
        Self {
            status: "success".to_string(),
            message: "Employee data refreshed from configuration".to_string(),
            employee_count,
        }
    }
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

    /// Creates a result not found error response.
    pub fn result_not_found(employee_id: &str) -> Self {
        Self::with_details(
            "RESULT_NOT_FOUND",
            format!("No salary result for employee '{}'", employee_id),
            "Process attendance data first; results are kept for the last run only",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::MalformedInput {
                source_name,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MALFORMED_INPUT",
                    format!("Attendance input '{}' could not be read", source_name),
                    message,
                ),
            },
            EngineError::ResultNotFound { employee_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::result_not_found(&employee_id),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
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
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_result_not_found_maps_to_404() {
        let engine_error = EngineError::ResultNotFound {
            employee_id: "12".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "RESULT_NOT_FOUND");
        assert!(api_error.error.message.contains("12"));
    }

    #[test]
    fn test_calculation_error_maps_to_500() {
        let engine_error = EngineError::CalculationError {
            message: "total working days must be positive".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CALCULATION_ERROR");
    }

    #[test]
    fn test_error_response_carries_status_and_json_body() {
        let api_error: ApiErrorResponse = EngineError::MalformedInput {
            source_name: "request body".to_string(),
            message: "invalid type".to_string(),
        }
        .into();
        let response = api_error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_directory_refreshed_serialization() {
        let json = serde_json::to_value(DirectoryRefreshed::new(4)).unwrap();
        assert_eq!(json["employee_count"], 4);
        assert_eq!(json["status"], "success");
    }

    #[test]
    fn test_total_days_updated_serialization() {
        let json = serde_json::to_value(TotalDaysUpdated::new(26)).unwrap();
        assert_eq!(json["total_working_days"], 26);
        assert_eq!(json["status"], "success");
    }
}
