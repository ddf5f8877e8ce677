//! Late-arrival tallying over a payroll period.
//!
//! Walks a set of attendance records and counts the late arrivals that
//! feed [`calculate_late_arrival_deduction`](super::calculate_late_arrival_deduction).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::lateness::{calculate_minutes_late, is_late_arrival};
use super::time_of_day::is_valid_time_format;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendancePolicy, AttendanceRecord, PayPeriod};

/// Counts derived from one period of attendance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateArrivalTally {
    /// Check-ins after the grace period.
    pub late_arrivals: u32,
    /// Check-ins within the grace period.
    pub on_time_arrivals: u32,
    /// Records in the period without a check-in.
    pub missing_check_ins: u32,
    /// Sum of minutes late across all late arrivals.
    pub total_minutes_late: i64,
    /// Dates of the late arrivals, in record order.
    pub late_dates: Vec<NaiveDate>,
}

/// Counts how many of `check_in_times` are late under `policy`.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::count_late_arrivals;
/// use attendance_engine::models::AttendancePolicy;
///
/// let policy = AttendancePolicy {
///     office_start_time: "09:00".to_string(),
///     grace_period_minutes: 15,
///     ..AttendancePolicy::default()
/// };
/// assert_eq!(count_late_arrivals(&["09:20", "09:10", "09:30", "09:05"], &policy), 2);
/// ```
pub fn count_late_arrivals<S: AsRef<str>>(check_in_times: &[S], policy: &AttendancePolicy) -> u32 {
    check_in_times
        .iter()
        .filter(|time| is_late_arrival(time.as_ref(), policy))
        .count() as u32
}

/// Tallies the records dated inside `period`.
///
/// Records outside the period are ignored. A record without a check-in is
/// counted as missing rather than late. A check-in that is not a valid
/// `HH:MM` time fails the whole tally.
pub fn tally_late_arrivals(
    records: &[AttendanceRecord],
    policy: &AttendancePolicy,
    period: &PayPeriod,
) -> EngineResult<LateArrivalTally> {
    let mut tally = LateArrivalTally::default();

    for record in records.iter().filter(|r| period.contains_date(r.date)) {
        let Some(check_in) = record.check_in_time.as_deref() else {
            tally.missing_check_ins += 1;
            continue;
        };

        if !is_valid_time_format(check_in) {
            return Err(EngineError::InvalidRecord {
                employee_id: record.employee_id.clone(),
                date: record.date,
                message: format!("check-in time '{}' is not a valid HH:MM time", check_in),
            });
        }

        if is_late_arrival(check_in, policy) {
            tally.late_arrivals += 1;
            tally.total_minutes_late += calculate_minutes_late(check_in, policy);
            tally.late_dates.push(record.date);
        } else {
            tally.on_time_arrivals += 1;
        }
    }

    Ok(tally)
}
