//! Payroll deduction run.
//!
//! Combines the late-arrival tally, the late deduction rule and the leave
//! balances into the salary deduction for one employee and one pay period,
//! recording every decision as an [`AuditStep`].

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::late_deduction::get_late_arrival_summary;
use super::late_tally::tally_late_arrivals;
use super::leave_balance::{LeaveBalance, calculate_leave_balance};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, AuditStep, AuditTrace, AuditWarning, DeductionTotals, LeaveRecord,
    LeaveType, PayrollInput, PayrollResult,
};

/// Calculates the late-arrival and unpaid-leave deductions for one payroll
/// input.
///
/// Attendance and leave records belonging to another employee are skipped
/// with a warning. Paid leave balances are reported over all supplied
/// leave records; unpaid leave is deducted only for the days inside the
/// pay period. The net salary never goes below zero.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_payroll;
/// use attendance_engine::config::EngineConfig;
/// use attendance_engine::models::{AttendanceRecord, PayPeriod, PayrollInput};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = |d| NaiveDate::from_ymd_opt(2026, 3, d).unwrap();
/// let attendance = ["09:30", "09:40", "10:00"]
///     .iter()
///     .enumerate()
///     .map(|(i, t)| AttendanceRecord {
///         employee_id: "emp_001".to_string(),
///         date: day(i as u32 + 2),
///         check_in_time: Some(t.to_string()),
///         check_out_time: None,
///     })
///     .collect();
///
/// let input = PayrollInput {
///     employee_id: "emp_001".to_string(),
///     monthly_salary: Decimal::from(26000),
///     pay_period: PayPeriod { start_date: day(1), end_date: day(31) },
///     attendance,
///     leave: vec![],
/// };
///
/// let result = calculate_payroll(&input, &EngineConfig::default()).unwrap();
/// assert_eq!(result.totals.late_deduction_days, 1);
/// assert_eq!(result.totals.deduction_amount, Decimal::from(1000));
/// assert_eq!(result.totals.net_salary, Decimal::from(25000));
/// ```
pub fn calculate_payroll(input: &PayrollInput, config: &EngineConfig) -> EngineResult<PayrollResult> {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let policy = &config.attendance_policy;
    let period = &input.pay_period;

    if input.monthly_salary < Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: format!("monthly salary {} is negative", input.monthly_salary),
        });
    }
    if period.end_date < period.start_date {
        return Err(EngineError::CalculationError {
            message: format!(
                "pay period ends ({}) before it starts ({})",
                period.end_date, period.start_date
            ),
        });
    }
    if config.payroll.working_days_per_month == 0 {
        return Err(EngineError::CalculationError {
            message: "working_days_per_month must be greater than zero".to_string(),
        });
    }

    let attendance: Vec<AttendanceRecord> = input
        .attendance
        .iter()
        .filter(|r| r.employee_id == input.employee_id)
        .cloned()
        .collect();
    let leave: Vec<LeaveRecord> = input
        .leave
        .iter()
        .filter(|r| r.employee_id == input.employee_id)
        .cloned()
        .collect();

    let skipped = (input.attendance.len() - attendance.len()) + (input.leave.len() - leave.len());
    if skipped > 0 {
        warnings.push(AuditWarning {
            code: "FOREIGN_RECORDS_SKIPPED".to_string(),
            message: format!(
                "{} record(s) belonging to other employees were ignored",
                skipped
            ),
            severity: "medium".to_string(),
        });
    }

    // Daily rate
    let working_days = Decimal::from(config.payroll.working_days_per_month);
    let daily_rate = input
        .monthly_salary
        .checked_div(working_days)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "daily rate for monthly salary {} over {} working days is out of range",
                input.monthly_salary, config.payroll.working_days_per_month
            ),
        })?;
    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "daily_rate".to_string(),
        rule_name: "Daily Rate".to_string(),
        input: serde_json::json!({
            "monthly_salary": input.monthly_salary.normalize().to_string(),
            "working_days_per_month": config.payroll.working_days_per_month
        }),
        output: serde_json::json!({
            "daily_rate": daily_rate.normalize().to_string()
        }),
        reasoning: format!(
            "${} / {} working days = ${}",
            input.monthly_salary.normalize(),
            config.payroll.working_days_per_month,
            daily_rate.normalize()
        ),
    });

    // Late arrival tally
    let tally = tally_late_arrivals(&attendance, policy, period)?;
    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "late_arrival_tally".to_string(),
        rule_name: "Late Arrival Tally".to_string(),
        input: serde_json::json!({
            "records": attendance.len(),
            "office_start_time": policy.office_start_time,
            "grace_period_minutes": policy.grace_period_minutes
        }),
        output: serde_json::json!({
            "late_arrivals": tally.late_arrivals,
            "on_time_arrivals": tally.on_time_arrivals,
            "missing_check_ins": tally.missing_check_ins,
            "total_minutes_late": tally.total_minutes_late
        }),
        reasoning: format!(
            "{} of {} check-ins were after the grace period",
            tally.late_arrivals,
            tally.late_arrivals + tally.on_time_arrivals
        ),
    });
    if tally.missing_check_ins > 0 {
        warnings.push(AuditWarning {
            code: "MISSING_CHECK_IN".to_string(),
            message: format!(
                "{} attendance record(s) in the period have no check-in time",
                tally.missing_check_ins
            ),
            severity: "low".to_string(),
        });
    }

    // Late arrival deduction
    let late_summary = get_late_arrival_summary(tally.late_arrivals, policy);
    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "late_arrival_deduction".to_string(),
        rule_name: "Late Arrival Deduction".to_string(),
        input: serde_json::json!({
            "late_arrivals": late_summary.total_late_arrivals,
            "late_arrivals_per_day": policy.late_arrivals_per_day
        }),
        output: serde_json::json!({
            "days_deducted": late_summary.days_deducted,
            "remaining_before_deduction": late_summary.remaining_before_deduction
        }),
        reasoning: format!(
            "{} late arrival(s) / {} per day = {} day(s) deducted",
            late_summary.total_late_arrivals,
            policy.late_arrivals_per_day,
            late_summary.days_deducted
        ),
    });

    // Leave balances
    let mut leave_balances: Vec<LeaveBalance> = Vec::new();
    for leave_type in [LeaveType::Annual, LeaveType::Sick, LeaveType::Casual] {
        let allowance = config.leave_allowances.allowance_for(leave_type);
        let balance = calculate_leave_balance(leave_type, allowance, &leave)?;
        if balance.excess > Decimal::ZERO {
            warnings.push(AuditWarning {
                code: "LEAVE_BALANCE_EXCEEDED".to_string(),
                message: format!(
                    "{} leave used ({}) exceeds the allowance ({}) by {} day(s)",
                    leave_type.as_str(),
                    balance.used.normalize(),
                    balance.allocated.normalize(),
                    balance.excess.normalize()
                ),
                severity: "medium".to_string(),
            });
        }
        leave_balances.push(balance);
    }

    // Unpaid leave
    let mut unpaid_leave_days = Decimal::ZERO;
    for record in leave.iter().filter(|r| r.leave_type == LeaveType::Unpaid) {
        unpaid_leave_days += record.days_within(period)?;
    }
    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "unpaid_leave".to_string(),
        rule_name: "Unpaid Leave".to_string(),
        input: serde_json::json!({
            "unpaid_leave_records": leave.iter().filter(|r| r.leave_type == LeaveType::Unpaid).count(),
            "period_start": period.start_date.to_string(),
            "period_end": period.end_date.to_string()
        }),
        output: serde_json::json!({
            "unpaid_leave_days": unpaid_leave_days.normalize().to_string()
        }),
        reasoning: format!(
            "{} unpaid leave day(s) fall inside the pay period",
            unpaid_leave_days.normalize()
        ),
    });

    // Salary deduction
    let total_deduction_days = Decimal::from(late_summary.days_deducted) + unpaid_leave_days;
    let deduction_amount = total_deduction_days
        .checked_mul(daily_rate)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "deduction for {} day(s) at daily rate {} is out of range",
                total_deduction_days.normalize(),
                daily_rate.normalize()
            ),
        })?
        .round_dp(2);
    let net_salary = if deduction_amount > input.monthly_salary {
        warnings.push(AuditWarning {
            code: "DEDUCTION_EXCEEDS_SALARY".to_string(),
            message: format!(
                "deduction ${} exceeds monthly salary ${}; net salary capped at zero",
                deduction_amount, input.monthly_salary
            ),
            severity: "high".to_string(),
        });
        Decimal::ZERO
    } else {
        input.monthly_salary - deduction_amount
    };
    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "salary_deduction".to_string(),
        rule_name: "Salary Deduction".to_string(),
        input: serde_json::json!({
            "late_deduction_days": late_summary.days_deducted,
            "unpaid_leave_days": unpaid_leave_days.normalize().to_string(),
            "daily_rate": daily_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "deduction_amount": deduction_amount.normalize().to_string(),
            "net_salary": net_salary.normalize().to_string()
        }),
        reasoning: format!(
            "{} day(s) x ${} = ${}",
            total_deduction_days.normalize(),
            daily_rate.normalize(),
            deduction_amount.normalize()
        ),
    });

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(PayrollResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: input.employee_id.clone(),
        pay_period: *period,
        monthly_salary: input.monthly_salary,
        daily_rate,
        late_arrivals: late_summary,
        leave_balances,
        totals: DeductionTotals {
            late_deduction_days: late_summary.days_deducted,
            unpaid_leave_days,
            total_deduction_days,
            deduction_amount,
            net_salary,
        },
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

fn next_step(steps: &[AuditStep]) -> u32 {
    steps.len() as u32 + 1
}
