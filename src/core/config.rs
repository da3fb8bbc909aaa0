//! Logger configuration
//!
//! A [`LogConfig`] is a plain value: cloning it yields an independent copy,
//! and a [`Logger`](super::Logger) never changes its configuration after
//! construction.
//!
//! Configurations can be built in code or loaded from JSON:
//!
//! ```
//! use hplog::{LogConfig, LogLevel};
//!
//! let config = LogConfig::from_json(r#"{
//!     "logger_name": "error-file",
//!     "log_file_name": "error.log",
//!     "log_level": "Error",
//!     "print_console": false
//! }"#).unwrap();
//!
//! assert_eq!(config.log_level, LogLevel::Error);
//! assert!(config.colored);
//! ```

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Interval between two flushes of the in-memory buffer to the log file
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Registry key; must be non-empty
    pub logger_name: String,
    /// Target file for buffered output; empty disables the file sink
    pub log_file_name: String,
    pub log_level: LogLevel,
    pub print_console: bool,
    pub colored: bool,
    #[serde(rename = "flush_interval_ms", with = "duration_millis")]
    pub flush_interval: Duration,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            logger_name: super::registry::DEFAULT_LOGGER_NAME.to_string(),
            log_file_name: String::new(),
            log_level: LogLevel::Debug,
            print_console: true,
            colored: true,
            flush_interval: DEFAULT_FLUSH_INTERVAL,
        }
    }
}

impl LogConfig {
    /// Console-only configuration with default settings
    pub fn new(logger_name: impl Into<String>) -> Self {
        Self {
            logger_name: logger_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_file(mut self, log_file_name: impl Into<String>) -> Self {
        self.log_file_name = log_file_name.into();
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    #[must_use]
    pub fn with_console(mut self, print_console: bool) -> Self {
        self.print_console = print_console;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    #[must_use]
    pub fn with_flush_interval(mut self, interval: Duration) -> Self {
        self.flush_interval = interval;
        self
    }

    pub fn has_file_sink(&self) -> bool {
        !self.log_file_name.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.logger_name.is_empty() {
            return Err(LoggerError::config("LogConfig", "logger_name must not be empty"));
        }
        if self.has_file_sink() && self.flush_interval.is_zero() {
            return Err(LoggerError::config(
                "LogConfig",
                format!("flush interval of '{}' must be non-zero", self.logger_name),
            ));
        }
        Ok(())
    }

    /// Parse and validate a configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LogConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json(&json)
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
