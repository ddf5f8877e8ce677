//! Logging setup for the attendance engine service.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured log filter could not be parsed.
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        /// The rejected filter string.
        value: String,
        /// The parse failure.
        #[source]
        source: ParseError,
    },

    /// A global subscriber was already installed.
    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Installs a compact `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `log_level` when it holds a valid filter.
pub fn init(log_level: &str) -> Result<(), TelemetryError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_env_filter(log_level, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

fn build_env_filter(
    log_level: &str,
    rust_log: Option<&str>,
) -> Result<EnvFilter, TelemetryError> {
    if let Some(filter) = rust_log.and_then(|value| EnvFilter::try_new(value).ok()) {
        return Ok(filter);
    }

    EnvFilter::try_new(log_level).map_err(|source| TelemetryError::EnvFilter {
        value: log_level.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_rejected() {
        let error = build_env_filter("not==valid", None).unwrap_err();

        match &error {
            TelemetryError::EnvFilter { value, .. } => assert_eq!(value, "not==valid"),
            other => panic!("Expected EnvFilter error, got {:?}", other),
        }
        assert!(error.to_string().contains("not==valid"));
    }

    #[test]
    fn test_rust_log_takes_precedence() {
        let filter = build_env_filter("not==valid", Some("attendance_engine=debug")).unwrap();
        assert_eq!(filter.to_string(), "attendance_engine=debug");
    }

    #[test]
    fn test_invalid_rust_log_falls_back_to_level() {
        let filter = build_env_filter("warn", Some("not==valid")).unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_second_init_reports_installed_subscriber() {
        let _ = init("info");
        let second = init("info");

        assert!(matches!(second, Err(TelemetryError::Subscriber(_))));
    }
}
