//! Core data models for the Salary Engine.
//!
//! This module contains the spreadsheet input model and the domain models
//! flowing through extraction and salary computation.

mod attendance;
mod employee;
mod salary_result;
mod sheet;

pub use attendance::{AttendanceStatus, AttendanceSummary};
pub use employee::{DEFAULT_MONTHLY_SALARY, EmployeeRecord, UNKNOWN_EMPLOYEE_NAME};
pub use salary_result::{AuditStep, SalaryResult};
pub use sheet::{Cell, FORMULA_ERROR_TEXT, Row, Sheet, Workbook};
