//! # hplog
//!
//! A lightweight in-process logging facility.
//!
//! ## Features
//!
//! - **Named Loggers**: A [`LoggerRegistry`] of independently configured loggers
//! - **Colored Console**: Immediate, level-colored output on stderr
//! - **Buffered Files**: Lines collected in memory and appended to a file by a
//!   background flush once per interval
//! - **Thread Safe**: Log from any thread; flush cycles never overlap
//!
//! Messages at Error and Fatal are never filtered out, whatever level a
//! logger is configured with.
//!
//! Buffered output that has not been flushed yet is lost if the process
//! terminates abruptly.

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        CallSite, LogConfig, LogLevel, Logger, LoggerError, LoggerMetrics, LoggerRegistry,
        PeriodicTimer, Result, DEFAULT_FLUSH_INTERVAL, DEFAULT_LOGGER_NAME,
    };
    pub use crate::{call_site, hlog, hlog_debug, hlog_error, hlog_fatal, hlog_info, hlog_warn};
}

pub use crate::core::{
    CallSite, LogConfig, LogLevel, Logger, LoggerError, LoggerMetrics, LoggerRegistry,
    PeriodicTimer, Result, DEFAULT_FLUSH_INTERVAL, DEFAULT_LOGGER_NAME,
};
