//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive scoping this level to the bro crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "bro=trace",
            LogLevel::Debug => "bro=debug",
            LogLevel::Info => "bro=info",
            LogLevel::Warn => "bro=warn",
            LogLevel::Error => "bro=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
