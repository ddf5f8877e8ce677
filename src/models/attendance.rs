//! Attendance record model.
//!
//! Records are owned by the attendance store; the engine only reads them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::time_to_minutes;

/// One employee's attendance for one day.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceRecord;
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     check_in_time: Some("09:05".to_string()),
///     check_out_time: Some("17:35".to_string()),
/// };
/// assert_eq!(record.worked_minutes(), Some(510));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar day of the record.
    pub date: NaiveDate,
    /// Check-in time (`HH:MM`), absent when the employee never checked in.
    #[serde(default)]
    pub check_in_time: Option<String>,
    /// Check-out time (`HH:MM`), absent until the employee checks out.
    #[serde(default)]
    pub check_out_time: Option<String>,
}

impl AttendanceRecord {
    /// Minutes between check-in and check-out, when both are present.
    ///
    /// A check-out earlier than the check-in yields a negative value; the
    /// record is taken as stored.
    pub fn worked_minutes(&self) -> Option<i64> {
        let check_in = self.check_in_time.as_deref()?;
        let check_out = self.check_out_time.as_deref()?;
        Some(time_to_minutes(check_out).saturating_sub(time_to_minutes(check_in)))
    }
}
