//! Attendance & Leave Policy Engine
//!
//! This crate decides lateness against an office attendance policy, turns
//! accumulated late arrivals into salary deduction days, tracks leave
//! balances and runs the resulting payroll deductions.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
