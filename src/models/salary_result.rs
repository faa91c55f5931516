//! Salary result models.
//!
//! This module contains the [`SalaryResult`] type handed to downstream
//! renderers and the [`AuditStep`] entries that explain how each figure
//! was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use salary_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "attendance_coefficient".to_string(),
///     rule_name: "Attendance Coefficient".to_string(),
///     input: serde_json::json!({"actual_hours": "300", "expected_hours": "160"}),
///     output: serde_json::json!({"coefficient": "1.875"}),
///     reasoning: "300 / 160 = 1.875".to_string(),
/// };
/// assert_eq!(step.step_number, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The computed salary for one employee.
///
/// Every field is always populated, zeros included, so renderers never
/// have to handle an absent value. The coefficient is the raw ratio of
/// actual to expected hours and may exceed 1.0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// Employee identifier.
    pub employee_id: String,
    /// Employee display name.
    pub employee_name: String,
    /// Monthly base salary used for the computation.
    pub monthly_salary: Decimal,
    /// Policy-expected hours (working days x 8).
    pub expected_hours: Decimal,
    /// Regular plus overtime hours from the attendance summary.
    pub actual_worked_hours: Decimal,
    /// `actual_worked_hours / expected_hours`, uncapped.
    pub coefficient: Decimal,
    /// Pro-rated salary minus the late-mark penalty.
    pub final_payable_salary: Decimal,
    /// Number of late marks considered.
    pub late_marks: u32,
    /// Amount deducted for late marks.
    pub late_mark_penalty: Decimal,
    /// How the figures were derived.
    #[serde(default)]
    pub audit_trace: Vec<AuditStep>,
}

impl SalaryResult {
    /// Returns the coefficient as a percentage rounded to two places.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::models::SalaryResult;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let result = SalaryResult {
    ///     employee_id: "12".to_string(),
    ///     employee_name: "Rahul Sharma".to_string(),
    ///     monthly_salary: Decimal::from(60000),
    ///     expected_hours: Decimal::from(160),
    ///     actual_worked_hours: Decimal::from(300),
    ///     coefficient: Decimal::from_str("1.875").unwrap(),
    ///     final_payable_salary: Decimal::from(112500),
    ///     late_marks: 0,
    ///     late_mark_penalty: Decimal::ZERO,
    ///     audit_trace: vec![],
    /// };
    /// assert_eq!(result.coefficient_percent(), Decimal::from_str("187.50").unwrap());
    /// ```
    pub fn coefficient_percent(&self) -> Decimal {
        (self.coefficient * Decimal::ONE_HUNDRED).round_dp(2)
    }
}
