const DEFAULT_FILTER: &str = "swaglint=warn";

/// Log output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("SWAGLINT_LOG").ok(),
            std::env::var("SWAGLINT_LOG_FORMAT").ok(),
        )
    }

    fn from_values(filter: Option<String>, format: Option<String>) -> Self {
        let filter = filter
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let format = match format.as_deref().map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Self { filter, format }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
