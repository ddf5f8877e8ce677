//! Configuration loading and management for the attendance engine.
//!
//! This module loads the attendance policy, payroll settings, leave
//! allowances and server settings from a YAML file and validates them once,
//! at load time.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Grace period: {} minutes", config.policy().grace_period_minutes);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_WORKING_DAYS_PER_MONTH, EngineConfig, LeaveAllowances, PayrollConfig, ServerConfig,
};
