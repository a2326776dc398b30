mod config;

pub use config::{LogFormat, TelemetryConfig};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Logs are written to stderr; stdout carries the report.
pub fn init_telemetry() {
    let config = TelemetryConfig::from_env();

    let env_filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|e| {
        eprintln!(
            "Invalid log filter '{}': {}. Falling back to defaults.",
            config.filter, e
        );
        EnvFilter::new(TelemetryConfig::default().filter)
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }

    tracing::debug!(filter = %config.filter, format = ?config.format, "Tracing initialized");
}
