//! Time-of-day conversion functionality.
//!
//! Attendance times travel as 24-hour `HH:MM` strings. This module converts
//! them to and from minutes since midnight, validates their format and
//! renders minute counts for display.

use std::sync::LazyLock;

use regex::Regex;

static TIME_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$").expect("time format pattern is valid")
});

/// Converts an `HH:MM` string into minutes since midnight.
///
/// The input is not validated: a component that is not a number counts as
/// zero, and out-of-range components saturate instead of overflowing.
/// Check untrusted input with [`is_valid_time_format`] first.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::time_to_minutes;
///
/// assert_eq!(time_to_minutes("09:00"), 540);
/// assert_eq!(time_to_minutes("00:00"), 0);
/// assert_eq!(time_to_minutes("23:59"), 1439);
/// ```
pub fn time_to_minutes(time: &str) -> i64 {
    let (hours, minutes) = time.split_once(':').unwrap_or((time, ""));
    time_component(hours)
        .saturating_mul(60)
        .saturating_add(time_component(minutes))
}

fn time_component(component: &str) -> i64 {
    component.trim().parse().unwrap_or(0)
}

/// Converts minutes since midnight into a zero-padded `HH:MM` string.
///
/// Hours are not wrapped at midnight: 1440 minutes renders as `"24:00"`.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::minutes_to_time;
///
/// assert_eq!(minutes_to_time(555), "09:15");
/// assert_eq!(minutes_to_time(1500), "25:00");
/// ```
pub fn minutes_to_time(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Returns true if `time` is a 24-hour `HH:MM` value.
///
/// The hour may be written with one digit (`9:05`); the minute always
/// needs two.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::is_valid_time_format;
///
/// assert!(is_valid_time_format("09:05"));
/// assert!(!is_valid_time_format("9:5"));
/// assert!(!is_valid_time_format("24:00"));
/// ```
pub fn is_valid_time_format(time: &str) -> bool {
    TIME_FORMAT.is_match(time)
}

/// Renders a non-negative minute count as `"1h 30m"`, `"1h"`, `"45m"` or
/// `"0m"`. Negative counts are not meaningful here.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::format_minutes_to_readable;
///
/// assert_eq!(format_minutes_to_readable(0), "0m");
/// assert_eq!(format_minutes_to_readable(90), "1h 30m");
/// assert_eq!(format_minutes_to_readable(60), "1h");
/// ```
pub fn format_minutes_to_readable(minutes: i64) -> String {
    if minutes == 0 {
        return "0m".to_string();
    }

    match (minutes / 60, minutes % 60) {
        (0, mins) => format!("{}m", mins),
        (hours, 0) => format!("{}h", hours),
        (hours, mins) => format!("{}h {}m", hours, mins),
    }
}
