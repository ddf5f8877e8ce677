//! Payroll run models for the Attendance Policy Engine.
//!
//! This module contains the [`PayrollInput`] consumed by a payroll run and
//! the [`PayrollResult`] it produces, including the audit trace recording
//! every deduction decision.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AttendanceRecord, LeaveRecord, PayPeriod};
use crate::calculation::{LateArrivalSummary, LeaveBalance};

/// Everything a payroll run needs for one employee and one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// The employee being paid.
    pub employee_id: String,
    /// Gross monthly salary before deductions.
    pub monthly_salary: Decimal,
    /// The period the attendance and leave belong to.
    pub pay_period: PayPeriod,
    /// Attendance records for the period.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Approved leave records overlapping the period.
    #[serde(default)]
    pub leave: Vec<LeaveRecord>,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during a payroll run.
///
/// Warnings flag data that was skipped or looks suspicious without
/// stopping the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Aggregated deduction figures for a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionTotals {
    /// Days deducted for accumulated late arrivals.
    pub late_deduction_days: u32,
    /// Days of unpaid leave inside the pay period.
    pub unpaid_leave_days: Decimal,
    /// Sum of late deduction days and unpaid leave days.
    pub total_deduction_days: Decimal,
    /// Salary withheld, rounded to cents.
    pub deduction_amount: Decimal,
    /// Salary after deductions, never negative.
    pub net_salary: Decimal,
}

/// The complete result of a payroll deduction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the calculation is for.
    pub employee_id: String,
    /// The period covered.
    pub pay_period: PayPeriod,
    /// Gross monthly salary.
    pub monthly_salary: Decimal,
    /// Salary value of one day.
    pub daily_rate: Decimal,
    /// Late-arrival figures for the period.
    pub late_arrivals: LateArrivalSummary,
    /// Leave balance per leave type.
    pub leave_balances: Vec<LeaveBalance>,
    /// Aggregated deductions.
    pub totals: DeductionTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_deserialize_payroll_input_defaults_empty_records() {
        let json = r#"{
            "employee_id": "emp_001",
            "monthly_salary": "52000.00",
            "pay_period": {"start_date": "2026-03-01", "end_date": "2026-03-31"}
        }"#;

        let input: PayrollInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.employee_id, "emp_001");
        assert_eq!(input.monthly_salary, Decimal::new(5200000, 2));
        assert_eq!(
            input.pay_period.start_date,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
        );
        assert!(input.attendance.is_empty());
        assert!(input.leave.is_empty());
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "daily_rate".to_string(),
            rule_name: "Daily Rate".to_string(),
            input: serde_json::json!({"monthly_salary": "52000"}),
            output: serde_json::json!({"daily_rate": "2000"}),
            reasoning: "$52000 / 26 days = $2000".to_string(),
        };

        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["step_number"], 1);
        assert_eq!(json["rule_id"], "daily_rate");
        assert_eq!(json["output"]["daily_rate"], "2000");
    }
}
