//! Attendance coefficient calculation.
//!
//! The coefficient is the share of policy-expected hours an employee actually
//! worked. It is deliberately left uncapped: overtime beyond the expectation
//! pushes it above 1.0 and raises the payable salary accordingly.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// Hours expected for each working day in the billing period.
pub const EXPECTED_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The result of computing an attendance coefficient.
#[derive(Debug, Clone)]
pub struct CoefficientResult {
    /// `total_working_days x EXPECTED_HOURS_PER_DAY`.
    pub expected_hours: Decimal,
    /// The hours actually worked.
    pub actual_hours: Decimal,
    /// `actual_hours / expected_hours`.
    pub coefficient: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the ratio of worked hours to expected hours for the period.
///
/// # Arguments
///
/// * `actual_hours` - Regular plus overtime hours worked
/// * `total_working_days` - Working days in the billing period
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns `CalculationError` when `total_working_days` is zero.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_coefficient;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_coefficient(Decimal::from(300), 20, 1).unwrap();
/// assert_eq!(result.expected_hours, Decimal::from(160));
/// assert_eq!(result.coefficient, Decimal::from_str("1.875").unwrap());
/// ```
pub fn calculate_coefficient(
    actual_hours: Decimal,
    total_working_days: u32,
    step_number: u32,
) -> EngineResult<CoefficientResult> {
    let expected_hours = Decimal::from(total_working_days) * EXPECTED_HOURS_PER_DAY;

    let coefficient =
        actual_hours
            .checked_div(expected_hours)
            .ok_or_else(|| EngineError::CalculationError {
                message: format!(
                    "cannot compute coefficient against {} expected hours",
                    expected_hours
                ),
            })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "attendance_coefficient".to_string(),
        rule_name: "Attendance Coefficient".to_string(),
        input: serde_json::json!({
            "actual_hours": actual_hours.normalize().to_string(),
            "total_working_days": total_working_days,
            "hours_per_day": EXPECTED_HOURS_PER_DAY.to_string()
        }),
        output: serde_json::json!({
            "expected_hours": expected_hours.normalize().to_string(),
            "coefficient": coefficient.normalize().to_string()
        }),
        reasoning: format!(
            "{} hours worked / ({} days x {} hours) = {}",
            actual_hours.normalize(),
            total_working_days,
            EXPECTED_HOURS_PER_DAY,
            coefficient.round_dp(4).normalize()
        ),
    };

    Ok(CoefficientResult {
        expected_hours,
        actual_hours,
        coefficient,
        audit_step,
    })
}
