//! Request types for the Salary Engine API.
//!
//! This module defines the JSON request structures for the `/salary` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::Workbook;

/// Request body for the `/salary/process` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// The attendance export to process.
    pub workbook: Workbook,
    /// Working days to apply before processing. Coerced like
    /// `/salary/total-days`; the current setting is used when absent.
    #[serde(default)]
    pub total_days: Option<i64>,
}

/// Request body for the `POST /salary/total-days` endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TotalDaysRequest {
    /// Requested working days in the billing period.
    pub days: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_request_total_days_is_optional() {
        let json = r#"{"workbook": {"sheets": []}}"#;
        let request: ProcessRequest = serde_json::from_str(json).unwrap();
        assert!(request.workbook.sheets.is_empty());
        assert_eq!(request.total_days, None);
    }

    #[test]
    fn test_process_request_with_cells() {
        let json = r#"{
            "workbook": {
                "sheets": [{
                    "name": "June",
                    "rows": [{"cells": [{"type": "text", "value": "Employee: 12 : Rahul"}]}]
                }]
            },
            "total_days": 26
        }"#;
        let request: ProcessRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.total_days, Some(26));
        assert_eq!(request.workbook.sheets[0].rows[0].text(), "Employee: 12 : Rahul");
    }

    #[test]
    fn test_total_days_request_accepts_negative_values() {
        let request: TotalDaysRequest = serde_json::from_str(r#"{"days": -4}"#).unwrap();
        assert_eq!(request.days, -4);
    }
}
