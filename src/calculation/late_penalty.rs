//! Late-mark penalty calculation.
//!
//! Penalties are measured in days of salary against a fixed 30-day month,
//! independent of the configured working days:
//!
//! | Late marks | Penalty                                   |
//! |------------|-------------------------------------------|
//! | 0-2        | none                                      |
//! | 3          | half a day's salary                       |
//! | n > 3      | half a day plus a third of that per extra |

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// Days in the month used to derive the daily salary for penalties.
pub const PENALTY_MONTH_DAYS: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Late marks that carry no penalty.
pub const FORGIVEN_LATE_MARKS: u32 = 2;

/// The late mark that triggers the half-day deduction.
pub const HALF_DAY_LATE_MARK: u32 = 3;

/// The result of applying the late-mark policy.
#[derive(Debug, Clone)]
pub struct LateMarkPenaltyResult {
    /// Number of late marks considered.
    pub late_marks: u32,
    /// `monthly_salary / 30`.
    pub daily_salary: Decimal,
    /// Half of `daily_salary`.
    pub half_day_salary: Decimal,
    /// The amount to deduct.
    pub penalty: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies the tiered late-mark policy to a monthly salary.
///
/// # Arguments
///
/// * `monthly_salary` - The employee's monthly base salary
/// * `late_marks` - Number of late days recorded in the period
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns `CalculationError` if the penalty overflows the decimal range.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_late_mark_penalty;
/// use rust_decimal::Decimal;
///
/// let salary = Decimal::from(60000);
///
/// assert_eq!(calculate_late_mark_penalty(salary, 2, 1).unwrap().penalty, Decimal::ZERO);
/// assert_eq!(calculate_late_mark_penalty(salary, 3, 1).unwrap().penalty, Decimal::from(1000));
/// ```
pub fn calculate_late_mark_penalty(
    monthly_salary: Decimal,
    late_marks: u32,
    step_number: u32,
) -> EngineResult<LateMarkPenaltyResult> {
    let daily_salary = monthly_salary / PENALTY_MONTH_DAYS;
    let half_day_salary = daily_salary / Decimal::TWO;

    let (penalty, reasoning) = if late_marks <= FORGIVEN_LATE_MARKS {
        (
            Decimal::ZERO,
            format!(
                "{} late marks within the {} forgiven, no penalty",
                late_marks, FORGIVEN_LATE_MARKS
            ),
        )
    } else if late_marks == HALF_DAY_LATE_MARK {
        (
            half_day_salary,
            format!(
                "{} late marks: half day salary ${}",
                late_marks,
                half_day_salary.round_dp(2)
            ),
        )
    } else {
        let additional_marks = late_marks - HALF_DAY_LATE_MARK;
        let per_mark = half_day_salary / Decimal::from(3);
        let penalty = per_mark
            .checked_mul(Decimal::from(additional_marks))
            .and_then(|extra| half_day_salary.checked_add(extra))
            .ok_or_else(|| EngineError::CalculationError {
                message: format!(
                    "late-mark penalty overflowed for {} late marks on salary {}",
                    late_marks, monthly_salary
                ),
            })?;
        (
            penalty,
            format!(
                "{} late marks: half day salary ${} + {} x ${} = ${}",
                late_marks,
                half_day_salary.round_dp(2),
                additional_marks,
                per_mark.round_dp(2),
                penalty.round_dp(2)
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "late_mark_penalty".to_string(),
        rule_name: "Late Mark Penalty".to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string(),
            "late_marks": late_marks
        }),
        output: serde_json::json!({
            "daily_salary": daily_salary.round_dp(2).normalize().to_string(),
            "half_day_salary": half_day_salary.round_dp(2).normalize().to_string(),
            "penalty": penalty.round_dp(2).normalize().to_string()
        }),
        reasoning,
    };

    Ok(LateMarkPenaltyResult {
        late_marks,
        daily_salary,
        half_day_salary,
        penalty,
        audit_step,
    })
}
