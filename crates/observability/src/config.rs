use std::env;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_VAR: &str = "INVOICEFSM_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable, multi-line output.
    Pretty,
}

impl LogFormat {
    /// Parse a format name; `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" | "text" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// Stream log events are written to.
///
/// Defaults to stderr so a program's own stdout output stays machine-readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogTarget {
    Stdout,
    #[default]
    Stderr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    pub target: LogTarget,
    /// Fallback filter directive when `RUST_LOG` is unset or invalid.
    pub default_filter: String,
    /// Raw value of the format variable when it could not be parsed.
    pub unrecognized_format: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            target: LogTarget::default(),
            default_filter: DEFAULT_FILTER.to_string(),
            unrecognized_format: None,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_format_value(env::var(LOG_FORMAT_VAR).ok().as_deref())
    }

    fn from_format_value(value: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = value {
            match LogFormat::parse(raw) {
                Some(format) => config.format = format,
                None => config.unrecognized_format = Some(raw.to_string()),
            }
        }
        config
    }
}
