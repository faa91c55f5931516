//! Processing runs for the Salary Engine.
//!
//! A [`SalaryProcessor`] owns the shared state a run needs: the employee
//! directory, the working-days setting, the computation mode and the cache
//! of the last run's results. One call to [`SalaryProcessor::process_workbook`]
//! extracts attendance, computes salaries and publishes them as the new
//! cached generation.

mod cache;
mod settings;

pub use cache::ResultCache;
pub use settings::{
    DEFAULT_TOTAL_WORKING_DAYS, MAX_TOTAL_WORKING_DAYS, MIN_TOTAL_WORKING_DAYS,
    WorkingDaysSetting, coerce_working_days,
};

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::calculation::{ComputationMode, compute_salaries};
use crate::config::ConfigLoader;
use crate::directory::EmployeeDirectory;
use crate::error::{EngineError, EngineResult};
use crate::extraction::AttendanceExtractor;
use crate::models::{EmployeeRecord, SalaryResult, Workbook};

/// Runs extraction and salary computation against shared state.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use salary_engine::calculation::ComputationMode;
/// use salary_engine::directory::InMemoryDirectory;
/// use salary_engine::processor::SalaryProcessor;
///
/// let processor = SalaryProcessor::new(
///     Arc::new(InMemoryDirectory::default()),
///     ComputationMode::Strict,
/// );
/// assert_eq!(processor.set_total_working_days(0), 30);
/// assert_eq!(processor.set_total_working_days(26), 26);
/// ```
pub struct SalaryProcessor {
    directory: Arc<dyn EmployeeDirectory>,
    mode: ComputationMode,
    working_days: WorkingDaysSetting,
    cache: ResultCache,
    config_dir: Option<PathBuf>,
}

impl SalaryProcessor {
    /// Creates a processor with the default working-day count.
    pub fn new(directory: Arc<dyn EmployeeDirectory>, mode: ComputationMode) -> Self {
        Self {
            directory,
            mode,
            working_days: WorkingDaysSetting::default(),
            cache: ResultCache::new(),
            config_dir: None,
        }
    }

    /// Creates a processor from loaded configuration.
    pub fn from_config(loader: &ConfigLoader) -> Self {
        let settings = loader.settings();
        Self {
            directory: Arc::new(loader.directory()),
            mode: settings.mode,
            working_days: WorkingDaysSetting::new(settings.total_working_days),
            cache: ResultCache::new(),
            config_dir: Some(loader.path().to_path_buf()),
        }
    }

    /// Returns the employee directory.
    pub fn directory(&self) -> &dyn EmployeeDirectory {
        self.directory.as_ref()
    }

    /// Replaces the directory contents and returns the number of employees held.
    ///
    /// Later runs use the new records; cached results are left untouched.
    pub fn refresh_directory(&self, employees: Vec<EmployeeRecord>) -> usize {
        self.directory.refresh(employees)
    }

    /// Re-reads `employees.yaml` from the configuration directory this
    /// processor was built from and refreshes the directory with it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when the processor was not built from
    /// configuration or the file is missing, and `ConfigParseError` when it
    /// is invalid. The directory is unchanged on error.
    pub fn reload_directory(&self) -> EngineResult<usize> {
        let config_dir = self
            .config_dir
            .as_ref()
            .ok_or_else(|| EngineError::ConfigNotFound {
                path: "employees.yaml (no configuration directory)".to_string(),
            })?;
        let employees = ConfigLoader::load_employees(config_dir)?;
        let count = self.refresh_directory(employees);
        info!(
            config_dir = %config_dir.display(),
            employees = count,
            "Reloaded employee directory"
        );
        Ok(count)
    }

    /// Returns the computation mode.
    pub fn mode(&self) -> ComputationMode {
        self.mode
    }

    /// Sets the working days used by later runs and returns the stored value.
    ///
    /// Values outside 1..=31 are replaced with 30.
    pub fn set_total_working_days(&self, days: i64) -> u32 {
        self.working_days.set(days)
    }

    /// Returns the working days used by the next run.
    pub fn total_working_days(&self) -> u32 {
        self.working_days.get()
    }

    /// Extracts attendance from `workbook`, computes salaries and caches them.
    ///
    /// The previous run's cached results are discarded once this run's
    /// results are ready.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError` if computation fails; the cache keeps the
    /// previous generation in that case.
    pub fn process_workbook(&self, workbook: &Workbook) -> EngineResult<Vec<SalaryResult>> {
        let total_working_days = self.total_working_days();
        let summaries = AttendanceExtractor::today().extract_workbook(workbook);
        info!(
            sheets = workbook.sheets.len(),
            employees = summaries.len(),
            total_working_days,
            "Extracted attendance"
        );

        let results = compute_salaries(
            &summaries,
            &self.directory.employee_map(),
            total_working_days,
            self.mode,
        )?;
        if results.is_empty() {
            warn!("Processing produced no salary results");
        }

        self.cache.replace(&results);
        Ok(results)
    }

    /// Returns the cached result for `employee_id` from the last run.
    ///
    /// # Errors
    ///
    /// Returns `ResultNotFound` when the last run produced no result for the
    /// identifier, or no run has completed.
    pub fn cached_result(&self, employee_id: &str) -> EngineResult<SalaryResult> {
        self.cache
            .get(employee_id)
            .ok_or_else(|| EngineError::ResultNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    /// Returns every cached result from the last run.
    pub fn cached_results(&self) -> Arc<HashMap<String, SalaryResult>> {
        self.cache.snapshot()
    }
}

impl std::fmt::Debug for SalaryProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalaryProcessor")
            .field("mode", &self.mode)
            .field("working_days", &self.working_days)
            .field("cache", &self.cache)
            .field("config_dir", &self.config_dir)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::InMemoryDirectory;
    use crate::models::{EmployeeRecord, Row};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rahul_workbook() -> Workbook {
        Workbook::single_sheet(
            "June",
            vec![Row::from_texts(&[
                "Employee: 12 : Rahul Sharma Total Work Duration: 180:30 Hrs Total OT: 5:15 Hrs \
                 Present: 22 Absent: 2 WeeklyOff: 4 Late By Hrs: 1:30 Late By Days: 2",
            ])],
        )
    }

    fn processor(mode: ComputationMode) -> SalaryProcessor {
        let directory = InMemoryDirectory::new(vec![EmployeeRecord::new(
            "12",
            "Rahul Sharma",
            Decimal::from(60000),
        )]);
        SalaryProcessor::new(Arc::new(directory), mode)
    }

    #[test]
    fn test_process_workbook_computes_and_caches() {
        let processor = processor(ComputationMode::Strict);
        processor.set_total_working_days(26);
        let results = processor.process_workbook(&rahul_workbook()).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].late_mark_penalty, Decimal::ZERO);
        assert_eq!(results[0].final_payable_salary.round_dp(2), dec("53495.19"));

        let cached = processor.cached_result("12").unwrap();
        assert_eq!(cached, results[0]);
        assert_eq!(processor.cached_results().len(), 1);
    }

    #[test]
    fn test_cached_result_before_any_run() {
        let processor = processor(ComputationMode::Strict);
        match processor.cached_result("12") {
            Err(EngineError::ResultNotFound { employee_id }) => assert_eq!(employee_id, "12"),
            other => panic!("Expected ResultNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_second_run_replaces_cache() {
        let processor = processor(ComputationMode::Permissive);
        processor.process_workbook(&rahul_workbook()).unwrap();

        let other = Workbook::single_sheet(
            "July",
            vec![Row::from_texts(&[
                "Employee: 40 : Kiran Total Work Duration: 100:00 Hrs Present: 12",
            ])],
        );
        processor.process_workbook(&other).unwrap();

        assert!(processor.cached_result("12").is_err());
        assert!(processor.cached_result("40").is_ok());
    }

    #[test]
    fn test_working_days_change_applies_to_next_run() {
        let processor = processor(ComputationMode::Strict);
        assert_eq!(processor.set_total_working_days(20), 20);

        let results = processor.process_workbook(&rahul_workbook()).unwrap();
        assert_eq!(results[0].expected_hours, Decimal::from(160));
    }

    #[test]
    fn test_strict_run_without_matches_yields_empty_cache() {
        let processor = processor(ComputationMode::Strict);
        processor.process_workbook(&rahul_workbook()).unwrap();

        let unknown = Workbook::single_sheet(
            "June",
            vec![Row::from_texts(&["Employee: 99 : Nobody Total Work Duration: 10:00 Hrs"])],
        );
        let results = processor.process_workbook(&unknown).unwrap();
        assert!(results.is_empty());
        assert!(processor.cached_results().is_empty());
    }

    #[test]
    fn test_refresh_directory_applies_to_next_run() {
        let processor = processor(ComputationMode::Strict);
        let count = processor.refresh_directory(vec![EmployeeRecord::new(
            "12",
            "Rahul Sharma",
            Decimal::from(30000),
        )]);
        assert_eq!(count, 1);

        processor.set_total_working_days(26);
        let results = processor.process_workbook(&rahul_workbook()).unwrap();
        assert_eq!(results[0].monthly_salary, Decimal::from(30000));
    }

    #[test]
    fn test_reload_without_config_dir_is_an_error() {
        let processor = processor(ComputationMode::Strict);
        assert!(matches!(
            processor.reload_directory(),
            Err(EngineError::ConfigNotFound { .. })
        ));
        assert_eq!(processor.directory().list_employees().len(), 1);
    }

    #[test]
    fn test_reload_from_config_dir() {
        let loader = ConfigLoader::load("./config/salary").unwrap();
        let processor = SalaryProcessor::from_config(&loader);
        processor.refresh_directory(vec![]);

        let count = processor.reload_directory().unwrap();
        assert_eq!(count, loader.employees().len());
        assert_eq!(processor.directory().get_employee("12").name, "Rahul Sharma");
    }
}
