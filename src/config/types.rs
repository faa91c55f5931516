//! Configuration types for salary processing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::calculation::ComputationMode;
use crate::models::EmployeeRecord;
use crate::processor::DEFAULT_TOTAL_WORKING_DAYS;

/// Processing settings from `settings.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProcessingSettings {
    /// Working days in the billing period. Out-of-range values are coerced
    /// to the default when applied.
    #[serde(default = "default_total_working_days")]
    pub total_working_days: i64,
    /// How attendance identifiers missing from the directory are handled.
    #[serde(default)]
    pub mode: ComputationMode,
}

fn default_total_working_days() -> i64 {
    i64::from(DEFAULT_TOTAL_WORKING_DAYS)
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        Self {
            total_working_days: default_total_working_days(),
            mode: ComputationMode::default(),
        }
    }
}

/// Employee directory file structure from `employees.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesConfig {
    /// The directory records.
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
}

/// The complete salary configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct SalaryConfig {
    settings: ProcessingSettings,
    employees: Vec<EmployeeRecord>,
}

impl SalaryConfig {
    /// Creates a new SalaryConfig from its component parts.
    pub fn new(settings: ProcessingSettings, employees: Vec<EmployeeRecord>) -> Self {
        Self {
            settings,
            employees,
        }
    }

    /// Returns the processing settings.
    pub fn settings(&self) -> &ProcessingSettings {
        &self.settings
    }

    /// Returns the directory records.
    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }
}
