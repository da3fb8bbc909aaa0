//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    #[default]
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl LogLevel {
    /// Every level, lowest first
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Green,
            LogLevel::Info => Cyan,
            LogLevel::Warn => Yellow,
            LogLevel::Error | LogLevel::Fatal => Red,
        }
    }

    /// Whether a message at this level gets through a logger configured at
    /// `configured`.
    ///
    /// Error and Fatal always pass. Anything below Error is suppressed only
    /// when it is strictly below `configured`, so a logger configured at
    /// `Fatal` still emits `Error` messages.
    #[inline]
    pub fn passes(&self, configured: LogLevel) -> bool {
        *self >= LogLevel::Error || *self >= configured
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
        assert_eq!(LogLevel::default(), LogLevel::Debug);
    }

    #[test]
    fn test_passes_below_error() {
        assert!(!LogLevel::Debug.passes(LogLevel::Warn));
        assert!(!LogLevel::Info.passes(LogLevel::Warn));
        assert!(LogLevel::Warn.passes(LogLevel::Warn));
        assert!(LogLevel::Info.passes(LogLevel::Debug));
    }

    #[test]
    fn test_error_and_fatal_always_pass() {
        assert!(LogLevel::Error.passes(LogLevel::Fatal));
        assert!(LogLevel::Fatal.passes(LogLevel::Fatal));
        assert!(LogLevel::Error.passes(LogLevel::Error));
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("Fatal".parse::<LogLevel>(), Ok(LogLevel::Fatal));
        assert!("trace".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_colors() {
        assert_eq!(LogLevel::Debug.color_code(), colored::Color::Green);
        assert_eq!(LogLevel::Info.color_code(), colored::Color::Cyan);
        assert_eq!(LogLevel::Warn.color_code(), colored::Color::Yellow);
        assert_eq!(LogLevel::Error.color_code(), colored::Color::Red);
        assert_eq!(LogLevel::Fatal.color_code(), colored::Color::Red);
    }
}
