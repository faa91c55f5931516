//! Summary metric parsing.
//!
//! Metrics are read from free text such as
//! `Total Work Duration: 180:30 Hrs Total OT: 5:15 Hrs Present: 22`.
//! A metric that cannot be found or parsed reads as zero.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, warn};

static WORK_DURATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Total Work Duration:\s*([\d:]+)\s*Hrs").unwrap());
static OVERTIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Total OT:\s*([\d:]+)\s*Hrs").unwrap());
static PRESENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Present:\s*([\d.]+)").unwrap());
static ABSENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Absent:\s*([\d.]+)").unwrap());
static WEEKLY_OFF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"WeeklyOff:\s*([\d.]+)").unwrap());
static LATE_HOURS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Late By Hrs:\s*([\d:]+)").unwrap());
static LATE_DAYS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Late By Days:\s*([\d.]+)").unwrap());

/// The numeric metrics carried by one employee's summary text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryMetrics {
    /// Total regular work duration.
    pub hours_worked: Decimal,
    /// Total overtime duration.
    pub overtime_hours: Decimal,
    /// Present-day count.
    pub present_days: u32,
    /// Absent-day count.
    pub absent_days: u32,
    /// Weekly-off-day count.
    pub weekly_off_days: u32,
    /// Total late duration.
    pub late_hours: Decimal,
    /// Late-day count.
    pub late_days: u32,
}

impl SummaryMetrics {
    /// Reads every metric from `text`, defaulting misses to zero.
    pub fn parse(text: &str) -> Self {
        Self {
            hours_worked: extract_duration(text, &WORK_DURATION_PATTERN),
            overtime_hours: extract_duration(text, &OVERTIME_PATTERN),
            present_days: extract_count(text, &PRESENT_PATTERN),
            absent_days: extract_count(text, &ABSENT_PATTERN),
            weekly_off_days: extract_count(text, &WEEKLY_OFF_PATTERN),
            late_hours: extract_duration(text, &LATE_HOURS_PATTERN),
            late_days: extract_count(text, &LATE_DAYS_PATTERN),
        }
    }
}

/// Converts an `H:MM` duration into `H.MM`.
///
/// The minute digits become hundredths, they are not divided by 60.
/// Anything other than exactly two colon-separated integers is rejected.
///
/// # Examples
///
/// ```
/// use salary_engine::extraction::parse_duration;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(parse_duration("128:37"), Some(Decimal::from_str("128.37").unwrap()));
/// assert_eq!(parse_duration("8:05"), Some(Decimal::from_str("8.05").unwrap()));
/// assert_eq!(parse_duration("128"), None);
/// ```
pub fn parse_duration(duration: &str) -> Option<Decimal> {
    let (hours, minutes) = duration.trim().split_once(':')?;
    if minutes.contains(':') {
        return None;
    }

    let hours: u64 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;

    Some(Decimal::from(hours) + Decimal::new(i64::from(minutes), 2))
}

/// Finds `pattern` in `text` and converts its first group with [`parse_duration`].
pub fn extract_duration(text: &str, pattern: &Regex) -> Decimal {
    let Some(captures) = pattern.captures(text) else {
        return Decimal::ZERO;
    };
    let raw = captures[1].trim();

    match parse_duration(raw) {
        Some(hours) => {
            debug!(duration = raw, hours = %hours, "Converted duration");
            hours
        }
        None => {
            warn!(duration = raw, "Failed to parse duration");
            Decimal::ZERO
        }
    }
}

/// Finds `pattern` in `text` and reads its first group as a day count.
///
/// Decimal-formatted integers such as `22.0` are truncated.
pub fn extract_count(text: &str, pattern: &Regex) -> u32 {
    let Some(captures) = pattern.captures(text) else {
        return 0;
    };
    let raw = captures[1].trim();

    if let Ok(count) = raw.parse::<u32>() {
        return count;
    }

    match raw.parse::<Decimal>().ok().and_then(|d| d.trunc().to_u32()) {
        Some(count) => count,
        None => {
            warn!(value = raw, "Failed to parse number");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_duration_uses_hundredths_not_sixtieths() {
        assert_eq!(parse_duration("128:37"), Some(dec("128.37")));
        assert_ne!(parse_duration("128:37"), Some(dec("128.6166666666666666666666667")));
    }

    #[test]
    fn test_parse_duration_zero_minutes() {
        assert_eq!(parse_duration("40:00"), Some(dec("40")));
    }

    #[test]
    fn test_parse_duration_rejects_other_shapes() {
        assert_eq!(parse_duration("180"), None);
        assert_eq!(parse_duration("1:30:00"), None);
        assert_eq!(parse_duration("180:"), None);
        assert_eq!(parse_duration(":30"), None);
        assert_eq!(parse_duration("ab:cd"), None);
    }

    #[test]
    fn test_extract_duration_missing_is_zero() {
        assert_eq!(
            extract_duration("Present: 22", &WORK_DURATION_PATTERN),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_extract_duration_malformed_is_zero() {
        assert_eq!(
            extract_duration("Total OT: 1:2:3 Hrs", &OVERTIME_PATTERN),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_extract_count_tolerates_decimal_integers() {
        assert_eq!(extract_count("Present: 22.0", &PRESENT_PATTERN), 22);
        assert_eq!(extract_count("Present: 21.5", &PRESENT_PATTERN), 21);
    }

    #[test]
    fn test_extract_count_unparseable_is_zero() {
        assert_eq!(extract_count("Absent: .", &ABSENT_PATTERN), 0);
        assert_eq!(extract_count("Absent: 1.2.3", &ABSENT_PATTERN), 0);
    }

    #[test]
    fn test_parse_all_metrics() {
        let text = "Total Work Duration: 180:30 Hrs Total OT: 5:15 Hrs Present: 22 \
                    Absent: 2 WeeklyOff: 4 Late By Hrs: 1:30 Late By Days: 2";
        let metrics = SummaryMetrics::parse(text);

        assert_eq!(metrics.hours_worked, dec("180.30"));
        assert_eq!(metrics.overtime_hours, dec("5.15"));
        assert_eq!(metrics.present_days, 22);
        assert_eq!(metrics.absent_days, 2);
        assert_eq!(metrics.weekly_off_days, 4);
        assert_eq!(metrics.late_hours, dec("1.30"));
        assert_eq!(metrics.late_days, 2);
    }

    #[test]
    fn test_parse_empty_text_is_all_zero() {
        assert_eq!(SummaryMetrics::parse(""), SummaryMetrics::default());
    }

    proptest! {
        #[test]
        fn prop_duration_is_hours_plus_minutes_over_100(hours in 0u32..10_000, minutes in 0u32..60) {
            let text = format!("{}:{:02}", hours, minutes);
            let expected = Decimal::from(hours) + Decimal::from(minutes) / Decimal::from(100);
            prop_assert_eq!(parse_duration(&text), Some(expected));
        }
    }
}
