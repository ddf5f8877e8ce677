//! Error types for the Attendance Policy Engine.
//!
//! The pure policy calculations never fail; these errors come from the
//! validation layer around them (configuration loading, record checks and
//! the payroll run).

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Attendance Policy Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A policy field held a value the engine cannot work with.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// A time-of-day string was not in `HH:MM` form.
    #[error("Invalid time format '{value}': expected HH:MM")]
    InvalidTimeFormat {
        /// The rejected value.
        value: String,
    },

    /// An attendance or leave record was inconsistent.
    #[error("Invalid record for employee '{employee_id}' on {date}: {message}")]
    InvalidRecord {
        /// The employee the record belongs to.
        employee_id: String,
        /// The date of the record.
        date: NaiveDate,
        /// A description of the problem.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
