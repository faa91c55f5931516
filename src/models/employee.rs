//! Employee directory record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly salary applied whenever an employee's salary is unknown.
pub const DEFAULT_MONTHLY_SALARY: Decimal = Decimal::from_parts(50000, 0, 0, false, 0);

/// Name given to directory placeholders for unknown identifiers.
pub const UNKNOWN_EMPLOYEE_NAME: &str = "Unknown Employee";

/// An employee as known to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee, matching the attendance export.
    pub employee_id: String,
    /// Display name.
    pub name: String,
    /// Monthly base salary.
    #[serde(default = "default_monthly_salary")]
    pub monthly_salary: Decimal,
}

fn default_monthly_salary() -> Decimal {
    DEFAULT_MONTHLY_SALARY
}

impl EmployeeRecord {
    /// Creates a record.
    pub fn new(
        employee_id: impl Into<String>,
        name: impl Into<String>,
        monthly_salary: Decimal,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            name: name.into(),
            monthly_salary,
        }
    }

    /// Creates a record at [`DEFAULT_MONTHLY_SALARY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::{EmployeeRecord, DEFAULT_MONTHLY_SALARY};
    ///
    /// let placeholder = EmployeeRecord::placeholder("41", "Employee 41");
    /// assert_eq!(placeholder.monthly_salary, DEFAULT_MONTHLY_SALARY);
    /// ```
    pub fn placeholder(employee_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(employee_id, name, DEFAULT_MONTHLY_SALARY)
    }
}
