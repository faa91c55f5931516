//! The process-wide working-days setting.

use std::sync::atomic::{AtomicU32, Ordering};

use tracing::{info, warn};

/// Working days assumed when none is configured or a rejected value is set.
pub const DEFAULT_TOTAL_WORKING_DAYS: u32 = 30;

/// Smallest accepted working-day count.
pub const MIN_TOTAL_WORKING_DAYS: i64 = 1;

/// Largest accepted working-day count.
pub const MAX_TOTAL_WORKING_DAYS: i64 = 31;

/// The working-day count applied to every salary computation.
///
/// Reads and writes are atomic; a computation reads the value once at its
/// start and is unaffected by later changes.
#[derive(Debug)]
pub struct WorkingDaysSetting {
    days: AtomicU32,
}

impl WorkingDaysSetting {
    /// Creates a setting holding `days`, coerced into range.
    pub fn new(days: i64) -> Self {
        Self {
            days: AtomicU32::new(coerce_working_days(days)),
        }
    }

    /// Returns the current working-day count.
    pub fn get(&self) -> u32 {
        self.days.load(Ordering::SeqCst)
    }

    /// Stores `days`, replacing values outside 1..=31 with the default.
    ///
    /// Returns the value actually stored.
    pub fn set(&self, days: i64) -> u32 {
        let stored = coerce_working_days(days);
        self.days.store(stored, Ordering::SeqCst);
        info!(requested = days, total_working_days = stored, "Set total working days");
        stored
    }
}

impl Default for WorkingDaysSetting {
    fn default() -> Self {
        Self {
            days: AtomicU32::new(DEFAULT_TOTAL_WORKING_DAYS),
        }
    }
}

/// Maps a requested day count into 1..=31, falling back to the default.
pub fn coerce_working_days(days: i64) -> u32 {
    if (MIN_TOTAL_WORKING_DAYS..=MAX_TOTAL_WORKING_DAYS).contains(&days) {
        // In range, so the narrowing cannot fail.
        days as u32
    } else {
        warn!(
            requested = days,
            default = DEFAULT_TOTAL_WORKING_DAYS,
            "Invalid total working days, using default"
        );
        DEFAULT_TOTAL_WORKING_DAYS
    }
}
