//! Attendance summary model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Overall attendance status of a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// At least one present day was recorded.
    Present,
    /// No present days were recorded.
    #[default]
    Absent,
}

/// Per-employee attendance summary pulled from one marker row.
///
/// Hours use the export's `H:MM` convention read as `H.MM`, so `128:37`
/// is stored as `128.37`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Employee identifier as printed in the export.
    pub employee_id: String,
    /// Display name, cleaned of trailing dots and whitespace.
    pub employee_name: String,
    /// Reference date of the summary.
    pub date: NaiveDate,
    /// Present when any present day was recorded.
    pub status: AttendanceStatus,
    /// Total regular work duration.
    pub hours_worked: Decimal,
    /// Total overtime duration.
    pub overtime_hours: Decimal,
    /// Number of present days.
    pub present_days: u32,
    /// Number of absent days.
    pub absent_days: u32,
    /// Number of weekly-off days.
    pub weekly_off_days: u32,
    /// Total late duration.
    pub late_hours: Decimal,
    /// Number of days the employee was late.
    pub late_days: u32,
    /// True iff `late_days > 0`.
    pub is_late: bool,
}

impl AttendanceSummary {
    /// Creates a summary with every metric at zero.
    pub fn new(
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            date,
            status: AttendanceStatus::default(),
            hours_worked: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            present_days: 0,
            absent_days: 0,
            weekly_off_days: 0,
            late_hours: Decimal::ZERO,
            late_days: 0,
            is_late: false,
        }
    }

    /// Total hours counted towards pay (regular plus overtime).
    pub fn actual_hours(&self) -> Decimal {
        self.hours_worked + self.overtime_hours
    }

    /// Recomputes `status` and `is_late` from the day counts.
    pub fn refresh_flags(&mut self) {
        self.status = if self.present_days > 0 {
            AttendanceStatus::Present
        } else {
            AttendanceStatus::Absent
        };
        self.is_late = self.late_days > 0;
    }
}
