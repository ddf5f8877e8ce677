//! Leave models.
//!
//! This module defines [`LeaveType`] and [`LeaveRecord`] for approved leave
//! taken by an employee.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;
use crate::error::{EngineError, EngineResult};

/// The kind of leave taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid annual leave.
    Annual,
    /// Paid sick leave.
    Sick,
    /// Paid casual leave.
    Casual,
    /// Leave without pay; every day is deducted.
    Unpaid,
}

impl LeaveType {
    /// All leave types, in reporting order.
    pub const ALL: [LeaveType; 4] = [
        LeaveType::Annual,
        LeaveType::Sick,
        LeaveType::Casual,
        LeaveType::Unpaid,
    ];

    /// Returns the snake_case name used in configuration and responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Annual => "annual",
            LeaveType::Sick => "sick",
            LeaveType::Casual => "casual",
            LeaveType::Unpaid => "unpaid",
        }
    }
}

/// An approved leave record.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{LeaveRecord, LeaveType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let leave = LeaveRecord {
///     employee_id: "emp_001".to_string(),
///     leave_type: LeaveType::Annual,
///     start_date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 3, 11).unwrap(),
///     half_day: false,
/// };
/// assert_eq!(leave.days().unwrap(), Decimal::from(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// The employee who took the leave.
    pub employee_id: String,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Whether this is a half-day on a single date.
    #[serde(default)]
    pub half_day: bool,
}

impl LeaveRecord {
    /// Number of leave days covered by the record.
    ///
    /// Inclusive calendar days, or 0.5 for a half-day. Fails when the end
    /// date precedes the start date, or when a half-day spans more than one
    /// date.
    pub fn days(&self) -> EngineResult<Decimal> {
        if self.end_date < self.start_date {
            return Err(self.invalid("end date is before start date"));
        }

        let days = (self.end_date - self.start_date).num_days() + 1;

        if self.half_day {
            if days != 1 {
                return Err(self.invalid("half-day leave must start and end on the same date"));
            }
            return Ok(Decimal::new(5, 1));
        }

        Ok(Decimal::from(days))
    }

    /// Leave days that fall inside `period`.
    ///
    /// The record is clipped to the period; a half-day inside the period
    /// counts as 0.5.
    pub fn days_within(&self, period: &PayPeriod) -> EngineResult<Decimal> {
        let total = self.days()?;

        let start = self.start_date.max(period.start_date);
        let end = self.end_date.min(period.end_date);
        if end < start {
            return Ok(Decimal::ZERO);
        }

        if self.half_day {
            return Ok(total);
        }

        Ok(Decimal::from((end - start).num_days() + 1))
    }

    fn invalid(&self, message: &str) -> EngineError {
        EngineError::InvalidRecord {
            employee_id: self.employee_id.clone(),
            date: self.start_date,
            message: message.to_string(),
        }
    }
}
