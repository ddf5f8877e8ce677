//! Core data models for the Attendance Policy Engine.
//!
//! This module contains the policy, record and payroll types used
//! throughout the engine.

mod attendance;
mod leave;
mod pay_period;
mod payroll;
mod policy;

pub use attendance::AttendanceRecord;
pub use leave::{LeaveRecord, LeaveType};
pub use pay_period::PayPeriod;
pub use payroll::{
    AuditStep, AuditTrace, AuditWarning, DeductionTotals, PayrollInput, PayrollResult,
};
pub use policy::{
    AttendancePolicy, DEFAULT_GRACE_PERIOD_MINUTES, DEFAULT_LATE_ARRIVALS_PER_DAY,
    DEFAULT_OFFICE_END_TIME, DEFAULT_OFFICE_START_TIME,
};
