//! Lateness classification functionality.
//!
//! This module decides whether a check-in is late under an
//! [`AttendancePolicy`] and by how much. Arriving exactly at the end of the
//! grace period counts as on time.

use serde::{Deserialize, Serialize};

use super::time_of_day::{format_minutes_to_readable, minutes_to_time, time_to_minutes};
use crate::models::AttendancePolicy;

/// Whether an arrival was on time or late.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Checked in no later than the grace-period end.
    OnTime,
    /// Checked in after the grace-period end.
    Late,
}

/// The status of one check-in, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceStatusReport {
    /// On time or late.
    pub status: AttendanceStatus,
    /// Minutes past the grace-period end, zero when on time.
    pub minutes_late: i64,
    /// The `HH:MM` at which the grace period ends.
    pub grace_period_end_time: String,
    /// A human-readable sentence describing the status.
    pub message: String,
}

fn grace_period_end_minutes(policy: &AttendancePolicy) -> i64 {
    time_to_minutes(&policy.office_start_time)
        .saturating_add(i64::from(policy.grace_period_minutes))
}

/// Returns the `HH:MM` at which the grace period ends.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_grace_period_end_time;
/// use attendance_engine::models::AttendancePolicy;
///
/// let policy = AttendancePolicy {
///     office_start_time: "09:00".to_string(),
///     grace_period_minutes: 15,
///     ..AttendancePolicy::default()
/// };
/// assert_eq!(calculate_grace_period_end_time(&policy), "09:15");
/// ```
pub fn calculate_grace_period_end_time(policy: &AttendancePolicy) -> String {
    minutes_to_time(grace_period_end_minutes(policy))
}

/// Returns true if `check_in_time` is strictly after the grace-period end.
pub fn is_late_arrival(check_in_time: &str, policy: &AttendancePolicy) -> bool {
    time_to_minutes(check_in_time) > grace_period_end_minutes(policy)
}

/// Minutes between the grace-period end and `check_in_time`, or 0 when the
/// arrival was on time.
pub fn calculate_minutes_late(check_in_time: &str, policy: &AttendancePolicy) -> i64 {
    time_to_minutes(check_in_time)
        .saturating_sub(grace_period_end_minutes(policy))
        .max(0)
}

/// Builds the full status of one check-in.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::{AttendanceStatus, get_attendance_status};
/// use attendance_engine::models::AttendancePolicy;
///
/// let policy = AttendancePolicy {
///     office_start_time: "09:00".to_string(),
///     grace_period_minutes: 15,
///     ..AttendancePolicy::default()
/// };
///
/// let report = get_attendance_status("10:45", &policy);
/// assert_eq!(report.status, AttendanceStatus::Late);
/// assert_eq!(report.minutes_late, 90);
/// assert_eq!(report.message, "Late by 1h 30m (grace period ended at 09:15)");
/// ```
pub fn get_attendance_status(check_in_time: &str, policy: &AttendancePolicy) -> AttendanceStatusReport {
    let grace_period_end_time = calculate_grace_period_end_time(policy);

    if is_late_arrival(check_in_time, policy) {
        let minutes_late = calculate_minutes_late(check_in_time, policy);
        AttendanceStatusReport {
            status: AttendanceStatus::Late,
            minutes_late,
            message: format!(
                "Late by {} (grace period ended at {})",
                format_minutes_to_readable(minutes_late),
                grace_period_end_time
            ),
            grace_period_end_time,
        }
    } else {
        AttendanceStatusReport {
            status: AttendanceStatus::OnTime,
            minutes_late: 0,
            message: format!("On time (grace period until {})", grace_period_end_time),
            grace_period_end_time,
        }
    }
}
