//! Working hours derived from the office start and end times.

use serde::{Deserialize, Serialize};

use super::time_of_day::time_to_minutes;
use crate::models::AttendancePolicy;

/// Length of the official working day.
///
/// `hours * 60 + minutes == total` always holds. A policy whose end is
/// before its start gives negative components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    /// Whole hours.
    pub hours: i64,
    /// Remaining minutes.
    pub minutes: i64,
    /// Total minutes.
    pub total: i64,
}

/// Splits the office day into hours and minutes.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_working_hours;
/// use attendance_engine::models::AttendancePolicy;
///
/// let policy = AttendancePolicy {
///     office_start_time: "09:00".to_string(),
///     office_end_time: "17:30".to_string(),
///     ..AttendancePolicy::default()
/// };
/// let hours = calculate_working_hours(&policy);
/// assert_eq!((hours.hours, hours.minutes, hours.total), (8, 30, 510));
/// ```
pub fn calculate_working_hours(policy: &AttendancePolicy) -> WorkingHours {
    let total = time_to_minutes(&policy.office_end_time)
        .saturating_sub(time_to_minutes(&policy.office_start_time));

    WorkingHours {
        hours: total / 60,
        minutes: total % 60,
        total,
    }
}
