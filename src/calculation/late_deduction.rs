//! Late-arrival deduction functionality.
//!
//! Every `late_arrivals_per_day` late arrivals add up to one deducted day
//! of salary. The configuration loader rejects a zero threshold; a policy
//! built by hand with one yields zero deductions instead of a panic.

use serde::{Deserialize, Serialize};

use crate::models::AttendancePolicy;

/// Late-arrival figures for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateArrivalSummary {
    /// Late arrivals counted.
    pub total_late_arrivals: u32,
    /// Salary days deducted for them.
    pub days_deducted: u32,
    /// Late arrivals left before the next deduction.
    pub remaining_before_deduction: u32,
    /// The policy threshold, echoed back.
    pub next_deduction_at: u32,
}

/// Number of salary days deducted for `late_arrival_count` late arrivals.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_late_arrival_deduction;
/// use attendance_engine::models::AttendancePolicy;
///
/// let policy = AttendancePolicy {
///     late_arrivals_per_day: 3,
///     ..AttendancePolicy::default()
/// };
/// assert_eq!(calculate_late_arrival_deduction(2, &policy), 0);
/// assert_eq!(calculate_late_arrival_deduction(7, &policy), 2);
/// ```
pub fn calculate_late_arrival_deduction(late_arrival_count: u32, policy: &AttendancePolicy) -> u32 {
    let threshold = policy.late_arrivals_per_day;

    if late_arrival_count < threshold {
        return 0;
    }

    late_arrival_count.checked_div(threshold).unwrap_or(0)
}

/// Late arrivals left until the next deduction.
///
/// Right after a deduction point this is the full threshold again, never 0.
pub fn get_remaining_late_arrivals(late_arrival_count: u32, policy: &AttendancePolicy) -> u32 {
    let threshold = policy.late_arrivals_per_day;
    threshold - late_arrival_count.checked_rem(threshold).unwrap_or(0)
}

/// Gathers the deduction figures for `late_arrival_count` late arrivals.
pub fn get_late_arrival_summary(late_arrival_count: u32, policy: &AttendancePolicy) -> LateArrivalSummary {
    LateArrivalSummary {
        total_late_arrivals: late_arrival_count,
        days_deducted: calculate_late_arrival_deduction(late_arrival_count, policy),
        remaining_before_deduction: get_remaining_late_arrivals(late_arrival_count, policy),
        next_deduction_at: policy.late_arrivals_per_day,
    }
}
