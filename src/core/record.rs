//! Log record formatting
//!
//! Pure functions turning a timestamp, a logger name, a level, a message and
//! a call site into the single line that goes to the console and to the file
//! buffer:
//!
//! ```text
//! 2025-01-08 10:30:45 UTC+0800 app ERROR connection refused - server.rs@connect:42
//! ```

use super::call_site::CallSite;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::fmt::Write as _;

/// strftime pattern for the record timestamp, in local time
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC%z";

const ANSI_RESET: &str = "\x1b[0m";

/// Sanitize log message to prevent log injection
///
/// Replaces newlines, carriage returns, and tabs with escape sequences so a
/// record always occupies exactly one line of the log file.
pub fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Format one record, trailing newline included.
pub fn format_record(
    timestamp: &DateTime<Local>,
    logger_name: &str,
    level: LogLevel,
    message: &str,
    site: &CallSite<'_>,
) -> String {
    let mut line = String::with_capacity(64 + message.len());
    // Writing into a String cannot fail
    let _ = writeln!(
        line,
        "{} {} {} {} - {}@{}:{}",
        format_timestamp(timestamp),
        logger_name,
        level.to_str(),
        sanitize_message(message),
        site.basename(),
        site.function,
        site.line
    );
    line
}

/// Wrap a whole formatted line in the level's ANSI foreground color.
pub fn colorize(line: &str, level: LogLevel) -> String {
    format!(
        "\x1b[{}m{}{}",
        level.color_code().to_fg_str(),
        line,
        ANSI_RESET
    )
}
