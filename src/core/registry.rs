//! Named logger registry
//!
//! [`LoggerRegistry`] maps logger names to [`Logger`] instances. It is an
//! ordinary value: create one at application start, share it (usually as
//! `Arc<LoggerRegistry>`) with the components that log, and drop or
//! [`shutdown`](LoggerRegistry::shutdown) it at exit.
//!
//! ```
//! use hplog::{LogConfig, LogLevel, LoggerRegistry};
//!
//! let registry = LoggerRegistry::new();
//! assert!(registry.exists("default"));
//!
//! assert!(registry.append(LogConfig::new("audit").with_level(LogLevel::Warn)));
//! assert!(!registry.append(LogConfig::new("audit")));
//!
//! let audit = registry.get("audit").unwrap();
//! assert_eq!(audit.config().log_level, LogLevel::Warn);
//!
//! registry.remove("audit");
//! assert!(!registry.exists("audit"));
//! ```

use super::{
    config::LogConfig,
    error::{LoggerError, Result},
    logger::Logger,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Name of the console-only logger every registry starts with
pub const DEFAULT_LOGGER_NAME: &str = "default";

pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    /// Create a registry holding only the `"default"` logger
    /// (console, Debug level, colored)
    #[must_use]
    pub fn new() -> Self {
        let mut loggers = HashMap::new();
        loggers.insert(DEFAULT_LOGGER_NAME.to_string(), Arc::new(Logger::default()));
        Self {
            loggers: RwLock::new(loggers),
        }
    }

    /// Register a new logger built from `config`.
    ///
    /// Returns `false` and leaves the registry untouched if the name is
    /// taken or the logger cannot be created.
    pub fn append(&self, config: LogConfig) -> bool {
        match self.try_append(config) {
            Ok(()) => true,
            Err(LoggerError::AlreadyExists { .. }) => false,
            Err(e) => {
                eprintln!("[LOGGER ERROR] Cannot register logger: {}", e);
                false
            }
        }
    }

    /// Like [`append`](Self::append), reporting why registration failed
    pub fn try_append(&self, config: LogConfig) -> Result<()> {
        config.validate()?;

        let mut loggers = self.loggers.write();
        if loggers.contains_key(&config.logger_name) {
            return Err(LoggerError::already_exists(&config.logger_name));
        }

        let name = config.logger_name.clone();
        let logger = Logger::new(config)?;
        loggers.insert(name, Arc::new(logger));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Arc<Logger>> {
        self.loggers
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| LoggerError::not_found(name))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    /// Unregister `name`, stopping its periodic flush.
    ///
    /// Output still buffered in the logger is discarded. Handles obtained
    /// earlier through [`get`](Self::get) keep working but no longer flush:
    /// their buffer grows with every line until the last handle is dropped
    /// or [`Logger::flush`] is called on it.
    /// Removing `"default"` is allowed; the unqualified logging macros then
    /// become silent.
    pub fn remove(&self, name: &str) {
        let removed = self.loggers.write().remove(name);
        if let Some(logger) = removed {
            logger.stop_flushing();
        }
    }

    /// Registered logger names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    /// Run one flush cycle on every logger, returning the first error after
    /// trying them all
    pub fn flush_all(&self) -> Result<()> {
        let mut first_error = None;
        for logger in self.snapshot() {
            if let Err(e) = logger.flush() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Stop every periodic flush, then write out what is still buffered.
    ///
    /// Loggers stay registered; their timers can be restarted with
    /// [`Logger::start_flushing`].
    pub fn shutdown(&self) {
        for logger in self.snapshot() {
            if let Err(e) = logger.shutdown() {
                eprintln!(
                    "[LOGGER ERROR] Final flush of logger '{}' failed: {}",
                    logger.name(),
                    e
                );
            }
        }
    }

    /// Clone the handles so no registry lock is held during I/O
    fn snapshot(&self) -> Vec<Arc<Logger>> {
        self.loggers.read().values().cloned().collect()
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LoggerRegistry {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_level::LogLevel;
    use std::thread;

    #[test]
    fn test_default_logger_present() {
        let registry = LoggerRegistry::new();
        assert!(registry.exists(DEFAULT_LOGGER_NAME));
        assert_eq!(registry.len(), 1);

        let logger = registry.get(DEFAULT_LOGGER_NAME).unwrap();
        assert_eq!(logger.config().log_level, LogLevel::Debug);
        assert!(logger.config().print_console);
        assert!(!logger.config().has_file_sink());
    }

    #[test]
    fn test_append_duplicate_keeps_first() {
        let registry = LoggerRegistry::new();
        assert!(registry.append(LogConfig::new("x").with_level(LogLevel::Warn)));
        assert!(!registry.append(LogConfig::new("x").with_level(LogLevel::Fatal)));

        assert_eq!(registry.get("x").unwrap().config().log_level, LogLevel::Warn);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_append_default_name_rejected() {
        let registry = LoggerRegistry::new();
        assert!(!registry.append(LogConfig::default()));
    }

    #[test]
    fn test_try_append_errors() {
        let registry = LoggerRegistry::new();
        assert!(matches!(
            registry.try_append(LogConfig::new("")),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
        registry.try_append(LogConfig::new("y")).unwrap();
        assert!(matches!(
            registry.try_append(LogConfig::new("y")),
            Err(LoggerError::AlreadyExists { .. })
        ));
    }

    #[test]
    fn test_missing_logger() {
        let registry = LoggerRegistry::new();
        assert!(!registry.exists("missing"));
        assert!(matches!(
            registry.get("missing"),
            Err(LoggerError::NotFound { .. })
        ));
        registry.remove("missing");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove() {
        let registry = LoggerRegistry::new();
        registry.append(LogConfig::new("gone"));
        registry.remove("gone");
        assert!(!registry.exists("gone"));
        // The name can be reused
        assert!(registry.append(LogConfig::new("gone")));
    }

    #[test]
    fn test_removed_handle_buffers_until_flushed() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("detached.log");
        let registry = LoggerRegistry::new();
        registry.append(
            LogConfig::new("detached")
                .with_file(path.to_string_lossy().into_owned())
                .with_console(false),
        );
        let handle = registry.get("detached").unwrap();
        registry.remove("detached");
        assert!(!handle.is_flushing());

        handle.warn(&crate::call_site!(), "still here");
        assert!(handle.buffered_len() > 0);
        handle.flush().unwrap();
        assert_eq!(handle.buffered_len(), 0);
        assert!(std::fs::read_to_string(&path).unwrap().contains("still here"));
    }

    #[test]
    fn test_remove_default_allowed() {
        let registry = LoggerRegistry::new();
        registry.remove(DEFAULT_LOGGER_NAME);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_names_sorted() {
        let registry = LoggerRegistry::new();
        registry.append(LogConfig::new("zeta"));
        registry.append(LogConfig::new("alpha"));
        assert_eq!(registry.names(), vec!["alpha", "default", "zeta"]);
    }

    #[test]
    fn test_concurrent_append_unique() {
        let registry = Arc::new(LoggerRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.append(LogConfig::new("shared")))
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(registry.len(), 2);
    }
}
