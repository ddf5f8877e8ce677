//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading and
//! validating the engine configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::AttendancePolicy;

use super::types::{EngineConfig, LeaveAllowances, PayrollConfig, ServerConfig};

/// Loads and provides access to a validated engine configuration.
///
/// # File Layout
///
/// ```text
/// attendance_policy:
///   office_start_time: "09:00"
///   office_end_time: "18:00"
///   grace_period_minutes: 15
///   late_arrivals_per_day: 3
/// payroll:
///   working_days_per_month: 26
/// leave_allowances:
///   annual: 18
///   sick: 12
///   casual: 7
/// server:
///   host: "127.0.0.1"
///   port: 3000
///   log_level: "info"
/// ```
///
/// Omitted sections and fields take their defaults.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml")?;
/// println!("Office opens at {}", loader.policy().office_start_time);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// Returns an error if the file is missing, is not valid YAML, or holds
    /// a configuration that fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, "Parsed engine configuration file");

        Self::from_config(config)
    }

    /// Builds a loader from YAML text, labelling errors with `source`.
    pub fn from_yaml_str(content: &str, source: &str) -> EngineResult<Self> {
        let config = Self::parse(content, source)?;
        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        debug!("Engine configuration validated");
        Ok(Self { config })
    }

    fn parse(content: &str, source: &str) -> EngineResult<EngineConfig> {
        // An empty file deserializes as unit; treat it as all defaults.
        if content.trim().is_empty() {
            return Ok(EngineConfig::default());
        }

        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the attendance policy.
    pub fn policy(&self) -> &AttendancePolicy {
        &self.config.attendance_policy
    }

    /// Returns the payroll settings.
    pub fn payroll(&self) -> &PayrollConfig {
        &self.config.payroll
    }

    /// Returns the leave allowances.
    pub fn leave_allowances(&self) -> &LeaveAllowances {
        &self.config.leave_allowances
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }
}
