//! Attendance extraction for the Salary Engine.
//!
//! This module scans spreadsheet rows for the `Employee:` marker, identifies
//! the employee through an ordered cascade of text patterns, and reads the
//! summary metrics (work duration, overtime, day counts, lateness) that follow.
//! When no marker row yields an employee, a degraded colon scan recovers
//! whatever `id : name` cells the sheet contains.

mod extractor;
mod identity;
mod metrics;

pub use extractor::{
    AttendanceExtractor, FALLBACK_HOURS_WORKED, extract_attendance, extract_workbook,
};
pub use identity::{
    EMPLOYEE_MARKER, EmployeeIdentity, IDENTITY_CASCADE, IdentityMatcher, clean_name,
    extract_identity, is_noise_name, match_fallback, match_manual, match_primary, match_simple,
};
pub use metrics::{SummaryMetrics, extract_count, extract_duration, parse_duration};
