//! Attendance extraction over spreadsheet rows.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::models::{AttendanceStatus, AttendanceSummary, Cell, Row, Sheet, Workbook};

use super::identity::{EMPLOYEE_MARKER, clean_name, extract_identity, is_noise_name};
use super::metrics::SummaryMetrics;

/// Hours credited to each employee found by the degraded colon scan.
pub const FALLBACK_HOURS_WORKED: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Turns attendance export rows into one [`AttendanceSummary`] per employee.
///
/// The reference date stamped on each summary is fixed at construction so
/// that repeated runs over the same rows produce identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceExtractor {
    reference_date: NaiveDate,
}

impl AttendanceExtractor {
    /// Creates an extractor stamping summaries with `reference_date`.
    pub fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    /// Creates an extractor stamping summaries with today's local date.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// Returns the date stamped on extracted summaries.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Extracts summaries from the marker rows of a single sheet.
    ///
    /// Metrics are read from the marker row plus the row after it, since
    /// exports sometimes wrap the summary onto a second line. Later rows for
    /// the same identifier replace earlier ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::extraction::AttendanceExtractor;
    /// use salary_engine::models::Row;
    /// use chrono::NaiveDate;
    ///
    /// let extractor = AttendanceExtractor::new(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
    /// let rows = vec![
    ///     Row::from_texts(&["Employee: 12 : Rahul Sharma", "Total Work Duration: 180:30 Hrs"]),
    ///     Row::from_texts(&["Present: 22 Absent: 2"]),
    /// ];
    ///
    /// let summaries = extractor.extract(&rows);
    /// assert_eq!(summaries["12"].employee_name, "Rahul Sharma");
    /// assert_eq!(summaries["12"].present_days, 22);
    /// ```
    pub fn extract(&self, rows: &[Row]) -> BTreeMap<String, AttendanceSummary> {
        let mut summaries = BTreeMap::new();

        for (index, row) in rows.iter().enumerate() {
            let row_content = row.text();
            debug!(row = index, content = %row_content, "Raw row content");

            if !row_content.contains(EMPLOYEE_MARKER) {
                continue;
            }
            info!(row = index, content = %row_content, "Found employee row");

            let Some((identity, matcher)) = extract_identity(&row_content) else {
                warn!(row = index, content = %row_content, "Failed to extract employee data from row");
                continue;
            };

            let employee_name = clean_name(&identity.employee_name);
            if employee_name.is_empty() {
                warn!(row = index, content = %row_content, "Extracted employee name is empty");
                continue;
            }
            if is_noise_name(employee_name) {
                info!(employee_name, "Skipping test employee");
                continue;
            }

            let summary_text = match rows.get(index + 1) {
                Some(next) => format!("{} {}", row_content, next.text()),
                None => row_content.clone(),
            };
            let metrics = SummaryMetrics::parse(&summary_text);

            info!(
                matcher,
                employee_id = %identity.employee_id,
                employee_name,
                hours_worked = %metrics.hours_worked,
                overtime_hours = %metrics.overtime_hours,
                present_days = metrics.present_days,
                absent_days = metrics.absent_days,
                weekly_off_days = metrics.weekly_off_days,
                late_hours = %metrics.late_hours,
                late_days = metrics.late_days,
                "Extracted employee metrics"
            );

            let summary = self.build_summary(&identity.employee_id, employee_name, metrics);
            summaries.insert(identity.employee_id, summary);
        }

        summaries
    }

    /// Extracts summaries from every sheet, then falls back to a colon scan of
    /// the first sheet if no marker row produced an employee.
    pub fn extract_workbook(&self, workbook: &Workbook) -> BTreeMap<String, AttendanceSummary> {
        let mut summaries = BTreeMap::new();

        for sheet in &workbook.sheets {
            info!(sheet = %sheet.name, rows = sheet.rows.len(), "Processing sheet");
            summaries.extend(self.extract(&sheet.rows));
        }
        info!(employees = summaries.len(), "Finished parsing");

        if summaries.is_empty() {
            warn!("No employee rows found, attempting colon pattern detection");
            if let Some(first) = workbook.sheets.first() {
                summaries = self.fallback_scan(first);
            }
            if summaries.is_empty() {
                warn!("Colon pattern detection also found no employees");
            }
        }

        summaries
    }

    /// Degraded recovery: treats every cell of the form `id : name` as an employee.
    ///
    /// Found employees are credited [`FALLBACK_HOURS_WORKED`] and marked
    /// present, dated by a date cell in the same row when there is one.
    pub fn fallback_scan(&self, sheet: &Sheet) -> BTreeMap<String, AttendanceSummary> {
        let mut summaries = BTreeMap::new();

        for (index, row) in sheet.rows.iter().enumerate() {
            let row_date = row
                .cells
                .iter()
                .rev()
                .find_map(|cell| match cell {
                    Cell::Date(dt) => Some(dt.date()),
                    _ => None,
                })
                .unwrap_or(self.reference_date);

            // Date cells render with time separators and are never `id : name`.
            let values = row
                .cells
                .iter()
                .filter(|cell| !matches!(cell, Cell::Date(_)))
                .filter_map(Cell::to_text);

            for value in values {
                let Some((id, name)) = value.split_once(':') else {
                    continue;
                };
                let (id, name) = (id.trim(), name.trim());
                if id.is_empty() {
                    continue;
                }
                info!(row = index, employee_id = id, employee_name = name, "Found colon pattern");

                let mut summary = AttendanceSummary::new(id, name, row_date);
                summary.status = AttendanceStatus::Present;
                summary.hours_worked = FALLBACK_HOURS_WORKED;
                summaries.insert(id.to_string(), summary);
            }
        }

        info!(employees = summaries.len(), "Colon pattern detection finished");
        summaries
    }

    fn build_summary(
        &self,
        employee_id: &str,
        employee_name: &str,
        metrics: SummaryMetrics,
    ) -> AttendanceSummary {
        let mut summary = AttendanceSummary::new(employee_id, employee_name, self.reference_date);
        summary.hours_worked = metrics.hours_worked;
        summary.overtime_hours = metrics.overtime_hours;
        summary.present_days = metrics.present_days;
        summary.absent_days = metrics.absent_days;
        summary.weekly_off_days = metrics.weekly_off_days;
        summary.late_hours = metrics.late_hours;
        summary.late_days = metrics.late_days;
        summary.refresh_flags();
        summary
    }
}

/// Extracts summaries from one sheet's rows, stamped with today's date.
pub fn extract_attendance(rows: &[Row]) -> BTreeMap<String, AttendanceSummary> {
    AttendanceExtractor::today().extract(rows)
}

/// Extracts summaries from a whole workbook, stamped with today's date.
pub fn extract_workbook(workbook: &Workbook) -> BTreeMap<String, AttendanceSummary> {
    AttendanceExtractor::today().extract_workbook(workbook)
}
