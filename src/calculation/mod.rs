//! Salary computation for the Salary Engine.
//!
//! This module turns attendance summaries into payable salaries: the
//! attendance coefficient (worked over expected hours, uncapped), the tiered
//! late-mark penalty, and the per-employee result assembled from both under a
//! strict or permissive directory-matching policy.

mod coefficient;
mod late_penalty;
mod salary;

pub use coefficient::{CoefficientResult, EXPECTED_HOURS_PER_DAY, calculate_coefficient};
pub use late_penalty::{
    FORGIVEN_LATE_MARKS, HALF_DAY_LATE_MARK, LateMarkPenaltyResult, PENALTY_MONTH_DAYS,
    calculate_late_mark_penalty,
};
pub use salary::{ComputationMode, calculate_salary, compute_salaries, placeholder_employee};
