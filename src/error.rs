//! Error types for the Salary Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Row-level extraction misses are never errors; they are logged and skipped.
//! Only conditions the caller must act on surface here.

use thiserror::Error;

/// The main error type for the Salary Engine.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/employees.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/employees.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The attendance export could not be read as a workbook at all.
    #[error("Malformed attendance input '{source_name}': {message}")]
    MalformedInput {
        /// Where the input came from (file path or "request body").
        source_name: String,
        /// A description of why the input was rejected.
        message: String,
    },

    /// No cached salary result exists for the employee.
    #[error("No salary result for employee '{employee_id}'; process attendance data first")]
    ResultNotFound {
        /// The employee identifier that was looked up.
        employee_id: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_malformed_input_displays_source_and_message() {
        let error = EngineError::MalformedInput {
            source_name: "june.json".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed attendance input 'june.json': expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_result_not_found_displays_employee_id() {
        let error = EngineError::ResultNotFound {
            employee_id: "12".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No salary result for employee '12'; process attendance data first"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "expected hours is zero".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: expected hours is zero");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::ResultNotFound {
                employee_id: "7".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
