//! Log subscriber setup for the binary.

/// How the binary logs.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    pub default_directive: String,
    /// Emit JSON lines instead of human-readable text
    pub json_logs: bool,
}

impl LoggingConfig {
    /// `debug` for verbose runs, `info` otherwise.
    pub fn new(verbose: bool) -> Self {
        let level = if verbose { "debug" } else { "info" };
        Self {
            default_directive: level.to_string(),
            json_logs: false,
        }
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }
}

/// Install the global subscriber.
///
/// Logs go to stderr so command output on stdout stays parseable.
#[cfg(not(feature = "otel"))]
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_directive))?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Install the global subscriber with span export.
///
/// Text logs only; `json_logs` is ignored.
#[cfg(feature = "otel")]
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    vermeer_core::init_telemetry("vermeer", &config.default_directive)
}

/// Flush exporters before exit.
pub fn shutdown_logging() {
    #[cfg(feature = "otel")]
    vermeer_core::shutdown_telemetry();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_selects_debug() {
        assert_eq!(LoggingConfig::new(true).default_directive, "debug");
        assert_eq!(LoggingConfig::new(false).default_directive, "info");
        assert!(LoggingConfig::new(false).with_json_logs(true).json_logs);
    }
}
