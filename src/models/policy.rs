//! Attendance policy model.
//!
//! This module defines the administrator-configured [`AttendancePolicy`]
//! and the single set of defaults used whenever a configuration omits a
//! field.

use serde::{Deserialize, Serialize};

use crate::calculation::{is_valid_time_format, time_to_minutes};
use crate::error::{EngineError, EngineResult};

/// Default official start of the working day.
pub const DEFAULT_OFFICE_START_TIME: &str = "09:00";

/// Default official end of the working day.
pub const DEFAULT_OFFICE_END_TIME: &str = "18:00";

/// Default grace window after the start time, in minutes.
pub const DEFAULT_GRACE_PERIOD_MINUTES: u32 = 10;

/// Default number of late arrivals that trigger one deduction day.
pub const DEFAULT_LATE_ARRIVALS_PER_DAY: u32 = 3;

/// The office hours, grace window and late-arrival threshold applied to
/// every attendance calculation.
///
/// Missing fields fall back to the `DEFAULT_*` constants when deserialized.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendancePolicy;
///
/// let policy: AttendancePolicy = serde_yaml::from_str("grace_period_minutes: 15").unwrap();
/// assert_eq!(policy.office_start_time, "09:00");
/// assert_eq!(policy.grace_period_minutes, 15);
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendancePolicy {
    /// Official start of the working day (`HH:MM`, 24-hour).
    pub office_start_time: String,
    /// Official end of the working day (`HH:MM`, 24-hour).
    pub office_end_time: String,
    /// Minutes after the start time during which arrival is still on time.
    pub grace_period_minutes: u32,
    /// Number of late arrivals that add up to one deducted day.
    pub late_arrivals_per_day: u32,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            office_start_time: DEFAULT_OFFICE_START_TIME.to_string(),
            office_end_time: DEFAULT_OFFICE_END_TIME.to_string(),
            grace_period_minutes: DEFAULT_GRACE_PERIOD_MINUTES,
            late_arrivals_per_day: DEFAULT_LATE_ARRIVALS_PER_DAY,
        }
    }
}

impl AttendancePolicy {
    /// Checks the policy once so the calculations can trust it.
    ///
    /// Rejects malformed office times, an end time that is not after the
    /// start time, and a zero late-arrival threshold.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in [
            ("office_start_time", &self.office_start_time),
            ("office_end_time", &self.office_end_time),
        ] {
            if !is_valid_time_format(value) {
                return Err(EngineError::InvalidPolicy {
                    field: field.to_string(),
                    message: format!("'{}' is not a valid HH:MM time", value),
                });
            }
        }

        if time_to_minutes(&self.office_end_time) <= time_to_minutes(&self.office_start_time) {
            return Err(EngineError::InvalidPolicy {
                field: "office_end_time".to_string(),
                message: format!(
                    "{} must be after office_start_time {}",
                    self.office_end_time, self.office_start_time
                ),
            });
        }

        if self.late_arrivals_per_day == 0 {
            return Err(EngineError::InvalidPolicy {
                field: "late_arrivals_per_day".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(start: &str, end: &str, grace: u32, threshold: u32) -> AttendancePolicy {
        AttendancePolicy {
            office_start_time: start.to_string(),
            office_end_time: end.to_string(),
            grace_period_minutes: grace,
            late_arrivals_per_day: threshold,
        }
    }

    #[test]
    fn test_default_policy_is_valid() {
        let policy = AttendancePolicy::default();
        assert_eq!(policy.office_start_time, "09:00");
        assert_eq!(policy.office_end_time, "18:00");
        assert_eq!(policy.grace_period_minutes, 10);
        assert_eq!(policy.late_arrivals_per_day, 3);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let policy: AttendancePolicy =
            serde_json::from_str(r#"{"office_start_time": "08:30"}"#).unwrap();
        assert_eq!(policy.office_start_time, "08:30");
        assert_eq!(policy.office_end_time, DEFAULT_OFFICE_END_TIME);
        assert_eq!(policy.grace_period_minutes, DEFAULT_GRACE_PERIOD_MINUTES);
        assert_eq!(policy.late_arrivals_per_day, DEFAULT_LATE_ARRIVALS_PER_DAY);
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let result = policy("09:00", "18:00", 15, 0).validate();
        match result {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "late_arrivals_per_day");
            }
            _ => panic!("Expected InvalidPolicy error"),
        }
    }

    #[test]
    fn test_malformed_start_time_rejected() {
        let result = policy("9am", "18:00", 15, 3).validate();
        match result {
            Err(EngineError::InvalidPolicy { field, message }) => {
                assert_eq!(field, "office_start_time");
                assert!(message.contains("9am"));
            }
            _ => panic!("Expected InvalidPolicy error"),
        }
    }

    #[test]
    fn test_end_before_start_rejected() {
        let result = policy("18:00", "09:00", 15, 3).validate();
        match result {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "office_end_time");
            }
            _ => panic!("Expected InvalidPolicy error"),
        }
    }

    #[test]
    fn test_end_equal_to_start_rejected() {
        assert!(policy("09:00", "09:00", 0, 3).validate().is_err());
    }

    #[test]
    fn test_zero_grace_period_allowed() {
        assert!(policy("09:00", "17:00", 0, 1).validate().is_ok());
    }
}
