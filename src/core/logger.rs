//! Main logger implementation

use super::{
    call_site::CallSite,
    config::LogConfig,
    error::{LoggerError, Result},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    record::{colorize, format_record},
    timer::PeriodicTimer,
};
use chrono::Local;
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Arc;

/// State shared between callers of [`Logger::log`] and the flush thread
struct Shared {
    config: LogConfig,
    /// Formatted lines waiting for the next flush cycle
    buffer: Mutex<String>,
    /// Held for a whole flush cycle so cycles never overlap or reorder
    flush_lock: Mutex<()>,
    metrics: LoggerMetrics,
}

impl Shared {
    /// One flush cycle: swap the buffer out, then append the snapshot to the
    /// log file. Lines logged while the write is in progress land in the next
    /// snapshot. If the write fails the snapshot is gone.
    fn flush(&self) -> Result<usize> {
        let _cycle = self.flush_lock.lock();
        let snapshot = std::mem::take(&mut *self.buffer.lock());
        if snapshot.is_empty() {
            return Ok(0);
        }

        let path = &self.config.log_file_name;
        let written = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(snapshot.as_bytes()));

        match written {
            Ok(()) => {
                self.metrics.record_flush(snapshot.len());
                Ok(snapshot.len())
            }
            Err(e) => {
                self.metrics.record_flush_failure(snapshot.len());
                Err(LoggerError::io_operation(
                    "flushing log buffer",
                    format!("cannot append to '{}'", path),
                    e,
                ))
            }
        }
    }
}

/// A named logger with a level filter, an optional console sink and an
/// optional file sink fed by a periodic flush.
///
/// Configuration is fixed at construction. When `log_file_name` is set, a
/// background [`PeriodicTimer`] appends the buffered lines to that file once
/// per `flush_interval`.
///
/// # Example
///
/// ```no_run
/// use hplog::{call_site, LogConfig, LogLevel, Logger};
///
/// let logger = Logger::new(
///     LogConfig::new("worker")
///         .with_file("worker.log")
///         .with_level(LogLevel::Info),
/// )
/// .unwrap();
///
/// logger.info(&call_site!(), "job started");
/// logger.debug(&call_site!(), "suppressed: below Info");
/// logger.flush().unwrap();
/// ```
pub struct Logger {
    shared: Arc<Shared>,
    timer: PeriodicTimer,
}

impl Logger {
    /// Create a logger and, if it has a file sink, start its flush timer
    pub fn new(config: LogConfig) -> Result<Self> {
        config.validate()?;
        let logger = Self::with_config(config);
        logger.start_flushing()?;
        Ok(logger)
    }

    fn with_config(config: LogConfig) -> Self {
        let timer = PeriodicTimer::named(format!("hplog-flush-{}", config.logger_name));
        Self {
            shared: Arc::new(Shared {
                config,
                buffer: Mutex::new(String::new()),
                flush_lock: Mutex::new(()),
                metrics: LoggerMetrics::new(),
            }),
            timer,
        }
    }

    pub fn config(&self) -> &LogConfig {
        &self.shared.config
    }

    pub fn name(&self) -> &str {
        &self.shared.config.logger_name
    }

    /// Whether a message at `level` would get past this logger's filter
    #[inline]
    pub fn would_log(&self, level: LogLevel) -> bool {
        level.passes(self.shared.config.log_level)
    }

    /// Log `message` at `level` from `site`.
    ///
    /// Error and Fatal messages are never filtered. Lower levels are dropped
    /// when below the configured level, before any formatting happens.
    ///
    /// Lines are buffered only when the logger has a file sink; a
    /// console-only logger keeps [`buffered_len`](Self::buffered_len) at 0.
    /// Buffering continues after [`stop_flushing`](Self::stop_flushing), so
    /// a logger whose flush is stopped for good keeps growing its buffer
    /// until it is flushed or dropped.
    pub fn log(&self, site: &CallSite<'_>, message: impl AsRef<str>, level: LogLevel) {
        let config = &self.shared.config;
        if !self.would_log(level) {
            self.shared.metrics.record_suppressed();
            return;
        }

        let line = format_record(
            &Local::now(),
            &config.logger_name,
            level,
            message.as_ref(),
            site,
        );

        if config.print_console {
            self.write_console(&line, level);
        }
        if config.has_file_sink() {
            self.shared.buffer.lock().push_str(&line);
        }
        self.shared.metrics.record_logged();
    }

    fn write_console(&self, line: &str, level: LogLevel) {
        let mut stderr = std::io::stderr().lock();
        // Console output is best effort
        let _ = if self.shared.config.colored {
            stderr.write_all(colorize(line, level).as_bytes())
        } else {
            stderr.write_all(line.as_bytes())
        };
    }

    #[inline]
    pub fn debug(&self, site: &CallSite<'_>, message: impl AsRef<str>) {
        self.log(site, message, LogLevel::Debug);
    }

    #[inline]
    pub fn info(&self, site: &CallSite<'_>, message: impl AsRef<str>) {
        self.log(site, message, LogLevel::Info);
    }

    #[inline]
    pub fn warn(&self, site: &CallSite<'_>, message: impl AsRef<str>) {
        self.log(site, message, LogLevel::Warn);
    }

    #[inline]
    pub fn error(&self, site: &CallSite<'_>, message: impl AsRef<str>) {
        self.log(site, message, LogLevel::Error);
    }

    #[inline]
    pub fn fatal(&self, site: &CallSite<'_>, message: impl AsRef<str>) {
        self.log(site, message, LogLevel::Fatal);
    }

    /// Run one flush cycle now.
    ///
    /// Serialized with the periodic flush. Unlike the periodic flush, a
    /// write failure is returned to the caller; the snapshot is lost either
    /// way. Does nothing for loggers without a file sink.
    pub fn flush(&self) -> Result<()> {
        if !self.shared.config.has_file_sink() {
            return Ok(());
        }
        self.shared.flush().map(|_| ())
    }

    /// Start the periodic flush if this logger has a file sink.
    ///
    /// Returns `Ok(false)` when there is no file sink or the flush is
    /// already running.
    pub fn start_flushing(&self) -> Result<bool> {
        if !self.shared.config.has_file_sink() {
            return Ok(false);
        }
        let shared = Arc::clone(&self.shared);
        self.timer.start(self.shared.config.flush_interval, move || {
            if let Err(e) = shared.flush() {
                eprintln!("[LOGGER ERROR] {}; buffered output dropped", e);
            }
        })
    }

    /// Stop the periodic flush, waiting for an in-flight cycle to finish.
    /// Buffered lines stay in memory, and later lines keep accumulating
    /// until a manual [`flush`](Self::flush) or a restart.
    pub fn stop_flushing(&self) {
        self.timer.stop();
    }

    pub fn is_flushing(&self) -> bool {
        self.timer.is_running()
    }

    /// Stop the periodic flush, then write out whatever is still buffered
    pub fn shutdown(&self) -> Result<()> {
        self.stop_flushing();
        self.flush()
    }

    /// Bytes currently waiting for the next flush cycle
    pub fn buffered_len(&self) -> usize {
        self.shared.buffer.lock().len()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.shared.metrics
    }
}

impl Default for Logger {
    /// Console-only logger named `"default"` at Debug level
    fn default() -> Self {
        Self::with_config(LogConfig::default())
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // The flush thread must be gone before the buffer is released
        self.timer.stop();

        let unflushed = self.buffered_len();
        if unflushed > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger '{}' dropped with {} unflushed bytes",
                self.name(),
                unflushed
            );
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.shared.config)
            .field("flushing", &self.is_flushing())
            .finish()
    }
}
