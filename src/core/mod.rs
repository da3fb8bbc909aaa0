//! Core logger types

pub mod call_site;
pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod registry;
pub mod timer;

pub use call_site::CallSite;
pub use config::{LogConfig, DEFAULT_FLUSH_INTERVAL};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use record::{colorize, format_record, format_timestamp, TIMESTAMP_FORMAT};
pub use registry::{LoggerRegistry, DEFAULT_LOGGER_NAME};
pub use timer::PeriodicTimer;
