//! Leave balance calculation functionality.
//!
//! Compares the leave an employee has taken against their allowance for
//! one leave type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{LeaveRecord, LeaveType};

/// Allowance, usage and balance for one leave type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// The leave type.
    pub leave_type: LeaveType,
    /// Days allowed.
    pub allocated: Decimal,
    /// Days taken.
    pub used: Decimal,
    /// Days still available, never negative.
    pub remaining: Decimal,
    /// Days taken beyond the allowance.
    pub excess: Decimal,
}

/// Calculates the balance of `leave_type` given `records`.
///
/// Records of other leave types are ignored. Fails on a record whose dates
/// are inconsistent.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_leave_balance;
/// use attendance_engine::models::{LeaveRecord, LeaveType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records = vec![LeaveRecord {
///     employee_id: "emp_001".to_string(),
///     leave_type: LeaveType::Casual,
///     start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 3, 3).unwrap(),
///     half_day: false,
/// }];
///
/// let balance = calculate_leave_balance(LeaveType::Casual, Decimal::from(7), &records).unwrap();
/// assert_eq!(balance.remaining, Decimal::from(5));
/// assert_eq!(balance.excess, Decimal::ZERO);
/// ```
pub fn calculate_leave_balance(
    leave_type: LeaveType,
    allocated: Decimal,
    records: &[LeaveRecord],
) -> EngineResult<LeaveBalance> {
    let mut used = Decimal::ZERO;
    for record in records.iter().filter(|r| r.leave_type == leave_type) {
        used += record.days()?;
    }

    Ok(LeaveBalance {
        leave_type,
        allocated,
        used,
        remaining: (allocated - used).max(Decimal::ZERO),
        excess: (used - allocated).max(Decimal::ZERO),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn leave(leave_type: LeaveType, start: u32, end: u32, half_day: bool) -> LeaveRecord {
        LeaveRecord {
            employee_id: "emp_001".to_string(),
            leave_type,
            start_date: NaiveDate::from_ymd_opt(2026, 3, start).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, end).unwrap(),
            half_day,
        }
    }

    #[test]
    fn test_no_leave_taken() {
        let balance = calculate_leave_balance(LeaveType::Annual, Decimal::from(18), &[]).unwrap();
        assert_eq!(balance.used, Decimal::ZERO);
        assert_eq!(balance.remaining, Decimal::from(18));
        assert_eq!(balance.excess, Decimal::ZERO);
    }

    #[test]
    fn test_only_matching_type_counted() {
        let records = vec![
            leave(LeaveType::Sick, 2, 3, false),
            leave(LeaveType::Annual, 9, 13, false),
            leave(LeaveType::Sick, 20, 20, true),
        ];

        let balance = calculate_leave_balance(LeaveType::Sick, Decimal::from(12), &records).unwrap();
        assert_eq!(balance.used, Decimal::new(25, 1));
        assert_eq!(balance.remaining, Decimal::new(95, 1));
    }

    #[test]
    fn test_usage_beyond_allowance_is_excess() {
        let records = vec![leave(LeaveType::Casual, 2, 10, false)];

        let balance = calculate_leave_balance(LeaveType::Casual, Decimal::from(7), &records).unwrap();
        assert_eq!(balance.used, Decimal::from(9));
        assert_eq!(balance.remaining, Decimal::ZERO);
        assert_eq!(balance.excess, Decimal::from(2));
    }

    #[test]
    fn test_unpaid_leave_is_all_excess() {
        let records = vec![leave(LeaveType::Unpaid, 16, 17, false)];

        let balance = calculate_leave_balance(LeaveType::Unpaid, Decimal::ZERO, &records).unwrap();
        assert_eq!(balance.excess, Decimal::from(2));
    }

    #[test]
    fn test_invalid_record_fails() {
        let records = vec![leave(LeaveType::Annual, 10, 9, false)];
        assert!(calculate_leave_balance(LeaveType::Annual, Decimal::from(18), &records).is_err());
    }
}
