//! HTTP API module for the Salary Engine.
//!
//! This module provides the REST API endpoints for processing attendance
//! exports, adjusting the working-day setting, browsing the employee
//! directory and reading back cached results.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ProcessRequest, TotalDaysRequest};
pub use response::{ApiError, ApiErrorResponse, DirectoryRefreshed, TotalDays, TotalDaysUpdated};
pub use state::AppState;
