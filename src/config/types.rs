//! Configuration types for the attendance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section falls
//! back to its `Default` when omitted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendancePolicy, LeaveType};

/// Default number of paid working days a monthly salary covers.
pub const DEFAULT_WORKING_DAYS_PER_MONTH: u32 = 26;

/// Payroll settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Working days a monthly salary is divided into for the daily rate.
    pub working_days_per_month: u32,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            working_days_per_month: DEFAULT_WORKING_DAYS_PER_MONTH,
        }
    }
}

/// Yearly paid leave allowance per leave type, in days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaveAllowances {
    /// Annual leave days.
    pub annual: Decimal,
    /// Sick leave days.
    pub sick: Decimal,
    /// Casual leave days.
    pub casual: Decimal,
}

impl Default for LeaveAllowances {
    fn default() -> Self {
        Self {
            annual: Decimal::from(18),
            sick: Decimal::from(12),
            casual: Decimal::from(7),
        }
    }
}

impl LeaveAllowances {
    /// Returns the allowance for `leave_type`. Unpaid leave has none.
    pub fn allowance_for(&self, leave_type: LeaveType) -> Decimal {
        match leave_type {
            LeaveType::Annual => self.annual,
            LeaveType::Sick => self.sick,
            LeaveType::Casual => self.casual,
            LeaveType::Unpaid => Decimal::ZERO,
        }
    }
}

/// HTTP server and logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_level: "info".to_string(),
        }
    }
}

/// The complete engine configuration.
///
/// # Example
///
/// ```
/// use attendance_engine::config::EngineConfig;
///
/// let config: EngineConfig = serde_yaml::from_str(
///     "attendance_policy:\n  grace_period_minutes: 15\n",
/// )
/// .unwrap();
/// assert_eq!(config.attendance_policy.grace_period_minutes, 15);
/// assert_eq!(config.payroll.working_days_per_month, 26);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// The attendance policy.
    pub attendance_policy: AttendancePolicy,
    /// Payroll settings.
    pub payroll: PayrollConfig,
    /// Leave allowances.
    pub leave_allowances: LeaveAllowances,
    /// Server settings.
    pub server: ServerConfig,
}

impl EngineConfig {
    /// Validates every section so calculations can rely on it.
    pub fn validate(&self) -> EngineResult<()> {
        self.attendance_policy.validate()?;

        if self.payroll.working_days_per_month == 0 {
            return Err(EngineError::InvalidPolicy {
                field: "working_days_per_month".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        for leave_type in [LeaveType::Annual, LeaveType::Sick, LeaveType::Casual] {
            if self.leave_allowances.allowance_for(leave_type) < Decimal::ZERO {
                return Err(EngineError::InvalidPolicy {
                    field: format!("leave_allowances.{}", leave_type.as_str()),
                    message: "must not be negative".to_string(),
                });
            }
        }

        Ok(())
    }
}
