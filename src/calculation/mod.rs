//! Calculation logic for the Attendance Policy Engine.
//!
//! This module contains the pure policy calculations (time-of-day
//! conversion, grace-period lateness, late-arrival deductions, working
//! hours) together with late-arrival tallying over a period, leave
//! balances and the payroll deduction run built on top of them.

mod late_deduction;
mod late_tally;
mod lateness;
mod leave_balance;
mod payroll;
mod time_of_day;
mod working_hours;

pub use late_deduction::{
    LateArrivalSummary, calculate_late_arrival_deduction, get_late_arrival_summary,
    get_remaining_late_arrivals,
};
pub use late_tally::{LateArrivalTally, count_late_arrivals, tally_late_arrivals};
pub use lateness::{
    AttendanceStatus, AttendanceStatusReport, calculate_grace_period_end_time,
    calculate_minutes_late, get_attendance_status, is_late_arrival,
};
pub use leave_balance::{LeaveBalance, calculate_leave_balance};
pub use payroll::calculate_payroll;
pub use time_of_day::{
    format_minutes_to_readable, is_valid_time_format, minutes_to_time, time_to_minutes,
};
pub use working_hours::{WorkingHours, calculate_working_hours};
