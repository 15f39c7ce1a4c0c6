use anyhow::{bail, Context};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Initial bug toggle state.
    pub enable_bug: bool,
    pub log_format: LogFormat,
    pub telemetry_connection_string: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let telemetry_connection_string = lookup("APPLICATIONINSIGHTS_CONNECTION_STRING")
            .filter(|s| !s.trim().is_empty());

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::to_ascii_lowercase) {
            None => {
                // The exporter on the host ingests JSON lines.
                if telemetry_connection_string.is_some() {
                    LogFormat::Json
                } else {
                    LogFormat::Compact
                }
            }
            Some(f) if f == "compact" => LogFormat::Compact,
            Some(f) if f == "json" => LogFormat::Json,
            Some(other) => bail!("LOG_FORMAT must be 'compact' or 'json', got '{}'", other),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            enable_bug: lookup("ENABLE_BUG")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            log_format,
            telemetry_connection_string,
        })
    }
}
