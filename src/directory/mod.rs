//! Employee directory for the Salary Engine.
//!
//! The directory supplies monthly salaries keyed by employee identifier.
//! Salary computation only reads it; whoever owns the data refreshes it
//! independently.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::{info, warn};

use crate::models::{EmployeeRecord, UNKNOWN_EMPLOYEE_NAME};

/// Read access to employee records.
pub trait EmployeeDirectory: Send + Sync {
    /// Returns every known employee.
    fn list_employees(&self) -> Vec<EmployeeRecord>;

    /// Returns the employee with `employee_id`, or a placeholder record when
    /// the identifier is unknown.
    fn get_employee(&self, employee_id: &str) -> EmployeeRecord;

    /// Replaces the directory contents and returns the number of employees held.
    fn refresh(&self, employees: Vec<EmployeeRecord>) -> usize;

    /// Returns the directory keyed by identifier.
    fn employee_map(&self) -> HashMap<String, EmployeeRecord> {
        self.list_employees()
            .into_iter()
            .map(|e| (e.employee_id.clone(), e))
            .collect()
    }
}

/// An [`EmployeeDirectory`] held in memory and replaced wholesale on refresh.
///
/// # Example
///
/// ```
/// use salary_engine::directory::{EmployeeDirectory, InMemoryDirectory};
/// use salary_engine::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let directory = InMemoryDirectory::new(vec![
///     EmployeeRecord::new("12", "Rahul Sharma", Decimal::from(60000)),
/// ]);
/// assert_eq!(directory.get_employee("12").name, "Rahul Sharma");
/// assert_eq!(directory.get_employee("99").name, "Unknown Employee");
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    employees: RwLock<HashMap<String, EmployeeRecord>>,
}

impl InMemoryDirectory {
    /// Creates a directory holding `employees`.
    pub fn new(employees: Vec<EmployeeRecord>) -> Self {
        let directory = Self::default();
        directory.refresh(employees);
        directory
    }

    /// Number of employees in the directory.
    pub fn len(&self) -> usize {
        self.employees
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when the directory holds no employees.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EmployeeDirectory for InMemoryDirectory {
    fn list_employees(&self) -> Vec<EmployeeRecord> {
        let guard = self
            .employees
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut employees: Vec<EmployeeRecord> = guard.values().cloned().collect();
        employees.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
        employees
    }

    fn get_employee(&self, employee_id: &str) -> EmployeeRecord {
        let guard = self
            .employees
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        match guard.get(employee_id) {
            Some(employee) => employee.clone(),
            None => {
                warn!(employee_id, "Employee not found in directory, using placeholder");
                EmployeeRecord::placeholder(employee_id, UNKNOWN_EMPLOYEE_NAME)
            }
        }
    }

    fn refresh(&self, employees: Vec<EmployeeRecord>) -> usize {
        let map: HashMap<String, EmployeeRecord> = employees
            .into_iter()
            .map(|e| (e.employee_id.clone(), e))
            .collect();
        let count = map.len();
        info!(employees = count, "Loaded employee directory");

        let mut guard = self
            .employees
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = map;
        count
    }

    fn employee_map(&self) -> HashMap<String, EmployeeRecord> {
        self.employees
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
