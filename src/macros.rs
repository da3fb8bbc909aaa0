//! Logging macros that capture the call site.
//!
//! The level macros take a [`LoggerRegistry`](crate::LoggerRegistry) and
//! `format!`-style arguments. Without a `logger:` argument they write to the
//! `"default"` logger. A logger name that is not registered makes the call a
//! silent no-op.
//!
//! # Examples
//!
//! ```
//! use hplog::{hlog_error, hlog_info, LogConfig, LogLevel, LoggerRegistry};
//!
//! let registry = LoggerRegistry::new();
//! registry.append(
//!     LogConfig::new("quiet")
//!         .with_console(false)
//!         .with_level(LogLevel::Error),
//! );
//!
//! // Default logger
//! hlog_info!(registry, "Server listening on port {}", 8080);
//!
//! // Named logger
//! hlog_error!(registry, logger: "quiet", "Request {} failed", 17);
//!
//! // Unknown logger: nothing happens
//! hlog_error!(registry, logger: "nope", "ignored");
//! ```

/// Name of the enclosing function, without its module path.
///
/// Closures report the function they are defined in.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::core::call_site::function_name_from_path(type_name_of(f))
    }};
}

/// [`CallSite`](crate::CallSite) for the location of the macro invocation.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(file!(), line!(), $crate::function_name!())
    };
}

/// Log at an explicit level through a registry.
///
/// # Examples
///
/// ```
/// # use hplog::{LoggerRegistry, LogLevel};
/// use hplog::hlog;
/// let registry = LoggerRegistry::new();
/// hlog!(registry, LogLevel::Warn, "Disk usage at {}%", 91);
/// hlog!(registry, logger: "default", LogLevel::Info, "Simple message");
/// ```
#[macro_export]
macro_rules! hlog {
    ($registry:expr, logger: $name:expr, $level:expr, $($arg:tt)+) => {{
        let level: $crate::LogLevel = $level;
        if let Ok(logger) = $registry.get($name) {
            if logger.would_log(level) {
                logger.log(&$crate::call_site!(), format!($($arg)+), level);
            } else {
                logger.metrics().record_suppressed();
            }
        }
    }};
    ($registry:expr, $level:expr, $($arg:tt)+) => {
        $crate::hlog!($registry, logger: $crate::DEFAULT_LOGGER_NAME, $level, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! hlog_debug {
    ($registry:expr, logger: $name:expr, $($arg:tt)+) => {
        $crate::hlog!($registry, logger: $name, $crate::LogLevel::Debug, $($arg)+)
    };
    ($registry:expr, $($arg:tt)+) => {
        $crate::hlog!($registry, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! hlog_info {
    ($registry:expr, logger: $name:expr, $($arg:tt)+) => {
        $crate::hlog!($registry, logger: $name, $crate::LogLevel::Info, $($arg)+)
    };
    ($registry:expr, $($arg:tt)+) => {
        $crate::hlog!($registry, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! hlog_warn {
    ($registry:expr, logger: $name:expr, $($arg:tt)+) => {
        $crate::hlog!($registry, logger: $name, $crate::LogLevel::Warn, $($arg)+)
    };
    ($registry:expr, $($arg:tt)+) => {
        $crate::hlog!($registry, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! hlog_error {
    ($registry:expr, logger: $name:expr, $($arg:tt)+) => {
        $crate::hlog!($registry, logger: $name, $crate::LogLevel::Error, $($arg)+)
    };
    ($registry:expr, $($arg:tt)+) => {
        $crate::hlog!($registry, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// Only logs; it does not abort the process.
#[macro_export]
macro_rules! hlog_fatal {
    ($registry:expr, logger: $name:expr, $($arg:tt)+) => {
        $crate::hlog!($registry, logger: $name, $crate::LogLevel::Fatal, $($arg)+)
    };
    ($registry:expr, $($arg:tt)+) => {
        $crate::hlog!($registry, $crate::LogLevel::Fatal, $($arg)+)
    };
}
