//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading salary
//! configuration from YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::directory::InMemoryDirectory;
use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeRecord;

use super::types::{EmployeesConfig, ProcessingSettings, SalaryConfig};

/// Loads and provides access to salary configuration.
///
/// # Directory Structure
///
/// ```text
/// config/salary/
/// ├── settings.yaml   # Working days and computation mode
/// └── employees.yaml  # Employee directory with monthly salaries
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/salary").unwrap();
/// println!("Working days: {}", loader.settings().total_working_days);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
    config: SalaryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing
    /// - Either file contains invalid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<ProcessingSettings>(&path.join("settings.yaml"))?;
        let employees = Self::load_employees(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            config: SalaryConfig::new(settings, employees),
        })
    }

    /// Reads only `employees.yaml` from the configuration directory.
    ///
    /// Used to refresh a running directory without touching the settings.
    pub fn load_employees<P: AsRef<Path>>(path: P) -> EngineResult<Vec<EmployeeRecord>> {
        let employees =
            Self::load_yaml::<EmployeesConfig>(&path.as_ref().join("employees.yaml"))?;
        Ok(employees.employees)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the directory the configuration was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the underlying salary configuration.
    pub fn config(&self) -> &SalaryConfig {
        &self.config
    }

    /// Returns the processing settings.
    pub fn settings(&self) -> &ProcessingSettings {
        self.config.settings()
    }

    /// Returns the configured employee records.
    pub fn employees(&self) -> &[EmployeeRecord] {
        self.config.employees()
    }

    /// Builds an in-memory directory from the configured employees.
    pub fn directory(&self) -> InMemoryDirectory {
        InMemoryDirectory::new(self.config.employees().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::ComputationMode;
    use crate::directory::EmployeeDirectory;
    use rust_decimal::Decimal;

    fn config_path() -> &'static str {
        "./config/salary"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.settings().total_working_days, 30);
        assert_eq!(loader.settings().mode, ComputationMode::Strict);
        assert!(!loader.employees().is_empty());
    }

    #[test]
    fn test_directory_contains_configured_employee() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let directory = loader.directory();

        let employee = directory.get_employee("12");
        assert_eq!(employee.name, "Rahul Sharma");
        assert_eq!(employee.monthly_salary, Decimal::from(60000));
    }

    #[test]
    fn test_load_employees_matches_full_load() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let employees = ConfigLoader::load_employees(loader.path()).unwrap();
        assert_eq!(employees, loader.employees());
    }

    #[test]
    fn test_load_employees_missing_file() {
        match ConfigLoader::load_employees("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("employees.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("settings.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
