//! Final payable salary computation.
//!
//! Combines the attendance coefficient and the late-mark penalty into a
//! [`SalaryResult`] per employee, matching attendance summaries to directory
//! records according to a [`ComputationMode`].

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceSummary, AuditStep, EmployeeRecord, SalaryResult};

use super::coefficient::calculate_coefficient;
use super::late_penalty::calculate_late_mark_penalty;

/// How attendance identifiers missing from the directory are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputationMode {
    /// Only identifiers present in both the attendance data and the directory are paid.
    #[default]
    Strict,
    /// Unknown identifiers get a placeholder employee at the default salary.
    Permissive,
}

/// Computes the salary result for one employee.
///
/// Late marks are the summary's late-day count.
///
/// # Errors
///
/// Returns `CalculationError` when `total_working_days` is zero or a
/// figure overflows the decimal range.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_salary;
/// use salary_engine::models::{AttendanceSummary, EmployeeRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut summary = AttendanceSummary::new("12", "Rahul", NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
/// summary.hours_worked = Decimal::from(240);
/// let employee = EmployeeRecord::new("12", "Rahul Sharma", Decimal::from(60000));
///
/// let result = calculate_salary(&summary, &employee, 30).unwrap();
/// assert_eq!(result.final_payable_salary, Decimal::from(60000));
/// ```
pub fn calculate_salary(
    summary: &AttendanceSummary,
    employee: &EmployeeRecord,
    total_working_days: u32,
) -> EngineResult<SalaryResult> {
    let monthly_salary = employee.monthly_salary;

    let coefficient = calculate_coefficient(summary.actual_hours(), total_working_days, 1)?;
    let base_final_salary = monthly_salary
        .checked_mul(coefficient.coefficient)
        .ok_or_else(|| overflow_error(summary, "base salary"))?;

    let late = calculate_late_mark_penalty(monthly_salary, summary.late_days, 2)?;
    let final_payable_salary = base_final_salary
        .checked_sub(late.penalty)
        .ok_or_else(|| overflow_error(summary, "final payable salary"))?;

    let final_step = AuditStep {
        step_number: 3,
        rule_id: "final_payable_salary".to_string(),
        rule_name: "Final Payable Salary".to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string(),
            "coefficient": coefficient.coefficient.normalize().to_string(),
            "late_mark_penalty": late.penalty.round_dp(2).normalize().to_string()
        }),
        output: serde_json::json!({
            "base_final_salary": base_final_salary.round_dp(2).normalize().to_string(),
            "final_payable_salary": final_payable_salary.round_dp(2).normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} - ${} = ${}",
            monthly_salary.normalize(),
            coefficient.coefficient.round_dp(4).normalize(),
            late.penalty.round_dp(2),
            final_payable_salary.round_dp(2)
        ),
    };

    info!(
        employee_id = %summary.employee_id,
        monthly_salary = %monthly_salary,
        actual_hours = %coefficient.actual_hours,
        expected_hours = %coefficient.expected_hours,
        coefficient = %coefficient.coefficient.round_dp(4),
        late_marks = late.late_marks,
        penalty = %late.penalty.round_dp(2),
        final_payable_salary = %final_payable_salary.round_dp(2),
        "Calculated salary"
    );

    Ok(SalaryResult {
        employee_id: summary.employee_id.clone(),
        employee_name: employee.name.clone(),
        monthly_salary,
        expected_hours: coefficient.expected_hours,
        actual_worked_hours: coefficient.actual_hours,
        coefficient: coefficient.coefficient,
        final_payable_salary,
        late_marks: late.late_marks,
        late_mark_penalty: late.penalty,
        audit_trace: vec![coefficient.audit_step, late.audit_step, final_step],
    })
}

fn overflow_error(summary: &AttendanceSummary, figure: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!(
            "{} overflowed for employee '{}' ({} hours)",
            figure,
            summary.employee_id,
            summary.actual_hours()
        ),
    }
}

/// Builds the directory stand-in used in permissive mode.
///
/// The name comes from the attendance data when it has one, else `Employee <id>`.
pub fn placeholder_employee(summary: &AttendanceSummary) -> EmployeeRecord {
    let name = if summary.employee_name.trim().is_empty() {
        format!("Employee {}", summary.employee_id)
    } else {
        summary.employee_name.clone()
    };
    EmployeeRecord::placeholder(summary.employee_id.clone(), name)
}

/// Computes salary results for every payable employee, in identifier order.
///
/// In [`ComputationMode::Strict`] only identifiers found in `directory` are
/// paid; an empty intersection yields an empty result and a warning. In
/// [`ComputationMode::Permissive`] every summary is paid, using
/// [`placeholder_employee`] for identifiers the directory does not know.
///
/// # Errors
///
/// Returns `CalculationError` when `total_working_days` is zero.
pub fn compute_salaries(
    summaries: &BTreeMap<String, AttendanceSummary>,
    directory: &HashMap<String, EmployeeRecord>,
    total_working_days: u32,
    mode: ComputationMode,
) -> EngineResult<Vec<SalaryResult>> {
    info!(
        employees = summaries.len(),
        directory_size = directory.len(),
        total_working_days,
        ?mode,
        "Computing salaries"
    );

    let matching: Vec<&str> = summaries
        .keys()
        .filter(|id| directory.contains_key(*id))
        .map(String::as_str)
        .collect();
    info!(matching = matching.len(), ids = ?matching, "Matched attendance to directory");

    if matching.is_empty() && mode == ComputationMode::Strict && !summaries.is_empty() {
        warn!("No attendance identifiers matched the employee directory");
    }

    let mut results = Vec::with_capacity(summaries.len());
    for (employee_id, summary) in summaries {
        let result = match (directory.get(employee_id), mode) {
            (Some(employee), _) => calculate_salary(summary, employee, total_working_days)?,
            (None, ComputationMode::Permissive) => {
                let employee = placeholder_employee(summary);
                info!(employee_id = %employee_id, name = %employee.name, "Created placeholder employee");
                calculate_salary(summary, &employee, total_working_days)?
            }
            (None, ComputationMode::Strict) => {
                info!(employee_id = %employee_id, "Employee not in directory, skipping");
                continue;
            }
        };
        results.push(result);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_MONTHLY_SALARY;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn summary(id: &str, name: &str, hours: &str, overtime: &str, late_days: u32) -> AttendanceSummary {
        let mut summary =
            AttendanceSummary::new(id, name, NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
        summary.hours_worked = dec(hours);
        summary.overtime_hours = dec(overtime);
        summary.late_days = late_days;
        summary.refresh_flags();
        summary
    }

    fn summaries(list: Vec<AttendanceSummary>) -> BTreeMap<String, AttendanceSummary> {
        list.into_iter()
            .map(|s| (s.employee_id.clone(), s))
            .collect()
    }

    fn directory(list: Vec<EmployeeRecord>) -> HashMap<String, EmployeeRecord> {
        list.into_iter()
            .map(|e| (e.employee_id.clone(), e))
            .collect()
    }

    #[test]
    fn test_rahul_scenario() {
        let summary = summary("12", "Rahul Sharma", "180.30", "5.15", 2);
        let employee = EmployeeRecord::new("12", "Rahul Sharma", dec("60000"));

        let result = calculate_salary(&summary, &employee, 26).unwrap();

        assert_eq!(result.actual_worked_hours, dec("185.45"));
        assert_eq!(result.expected_hours, dec("208"));
        assert_eq!(result.coefficient.round_dp(4), dec("0.8916"));
        assert_eq!(result.late_marks, 2);
        assert_eq!(result.late_mark_penalty, Decimal::ZERO);
        assert_eq!(result.final_payable_salary.round_dp(2), dec("53495.19"));
    }

    #[test]
    fn test_overtime_pushes_salary_above_monthly() {
        let summary = summary("4", "Vikram", "280", "20", 0);
        let employee = EmployeeRecord::new("4", "Vikram", dec("40000"));

        let result = calculate_salary(&summary, &employee, 20).unwrap();

        assert_eq!(result.coefficient, dec("1.875"));
        assert_eq!(result.final_payable_salary, dec("75000"));
    }

    #[test]
    fn test_late_penalty_is_subtracted() {
        let summary = summary("7", "Neha", "240", "0", 3);
        let employee = EmployeeRecord::new("7", "Neha", dec("60000"));

        let result = calculate_salary(&summary, &employee, 30).unwrap();

        assert_eq!(result.late_marks, 3);
        assert_eq!(result.late_mark_penalty, dec("1000"));
        assert_eq!(result.final_payable_salary, dec("59000"));
    }

    #[test]
    fn test_directory_name_is_reported() {
        let summary = summary("7", "NEHA K", "240", "0", 0);
        let employee = EmployeeRecord::new("7", "Neha Kapoor", dec("60000"));
        let result = calculate_salary(&summary, &employee, 30).unwrap();
        assert_eq!(result.employee_name, "Neha Kapoor");
    }

    #[test]
    fn test_audit_trace_has_three_ordered_steps() {
        let summary = summary("7", "Neha", "240", "0", 4);
        let employee = EmployeeRecord::new("7", "Neha", dec("60000"));
        let result = calculate_salary(&summary, &employee, 30).unwrap();

        let rule_ids: Vec<&str> = result
            .audit_trace
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec!["attendance_coefficient", "late_mark_penalty", "final_payable_salary"]
        );
        let numbers: Vec<u32> = result.audit_trace.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_strict_mode_keeps_only_directory_matches() {
        let summaries = summaries(vec![
            summary("A", "Asha", "240", "0", 0),
            summary("B", "Bala", "240", "0", 0),
            summary("C", "Chitra", "240", "0", 0),
        ]);
        let directory = directory(vec![
            EmployeeRecord::new("A", "Asha", dec("30000")),
            EmployeeRecord::new("C", "Chitra", dec("35000")),
        ]);

        let results = compute_salaries(&summaries, &directory, 30, ComputationMode::Strict).unwrap();

        let ids: Vec<&str> = results.iter().map(|r| r.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn test_strict_mode_with_no_matches_is_empty() {
        let summaries = summaries(vec![summary("A", "Asha", "240", "0", 0)]);
        let directory = directory(vec![EmployeeRecord::new("Z", "Zoya", dec("30000"))]);

        let results = compute_salaries(&summaries, &directory, 30, ComputationMode::Strict).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_permissive_mode_synthesizes_placeholders() {
        let summaries = summaries(vec![
            summary("A", "Asha", "240", "0", 0),
            summary("B", "", "120", "0", 0),
        ]);
        let directory = directory(vec![EmployeeRecord::new("A", "Asha R", dec("30000"))]);

        let results =
            compute_salaries(&summaries, &directory, 30, ComputationMode::Permissive).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].employee_name, "Asha R");
        assert_eq!(results[0].monthly_salary, dec("30000"));
        assert_eq!(results[1].employee_id, "B");
        assert_eq!(results[1].employee_name, "Employee B");
        assert_eq!(results[1].monthly_salary, DEFAULT_MONTHLY_SALARY);
        assert_eq!(results[1].final_payable_salary, dec("25000"));
    }

    #[test]
    fn test_permissive_placeholder_uses_attendance_name() {
        let placeholder = placeholder_employee(&summary("9", "Farah Khan", "0", "0", 0));
        assert_eq!(placeholder.name, "Farah Khan");
        assert_eq!(placeholder.monthly_salary, DEFAULT_MONTHLY_SALARY);
    }

    #[test]
    fn test_empty_summaries_give_empty_results() {
        let results = compute_salaries(
            &BTreeMap::new(),
            &HashMap::new(),
            30,
            ComputationMode::Strict,
        )
        .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_zero_working_days_propagates_error() {
        let summaries = summaries(vec![summary("A", "Asha", "240", "0", 0)]);
        let directory = directory(vec![EmployeeRecord::new("A", "Asha", dec("30000"))]);
        assert!(compute_salaries(&summaries, &directory, 0, ComputationMode::Strict).is_err());
    }

    #[test]
    fn test_overflowing_hours_propagate_error() {
        let mut huge = summary("A", "Asha", "0", "0", 0);
        huge.hours_worked = Decimal::from(u64::MAX) + dec("0.59");
        huge.overtime_hours = Decimal::from(u64::MAX) + dec("0.59");
        let summaries = summaries(vec![huge]);
        let directory = directory(vec![EmployeeRecord::new("A", "Asha", dec("100000000000"))]);

        match compute_salaries(&summaries, &directory, 1, ComputationMode::Strict) {
            Err(EngineError::CalculationError { message }) => {
                assert!(message.contains("overflowed"));
                assert!(message.contains("'A'"));
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }

    #[test]
    fn test_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&ComputationMode::Strict).unwrap(),
            "\"strict\""
        );
        let mode: ComputationMode = serde_json::from_str("\"permissive\"").unwrap();
        assert_eq!(mode, ComputationMode::Permissive);
    }
}
