//! Registry usage example
//!
//! Logs through the default console logger, then registers a file logger that
//! only keeps errors and lets its background flush write them out.
//!
//! Run with: cargo run --example registry_usage

use hplog::prelude::*;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== hplog - Registry Usage Example ===\n");

    let registry = LoggerRegistry::new();

    println!("1. Default logger (console only, Debug level):");
    hlog_debug!(registry, "test_log");
    hlog_info!(registry, "test_log");
    hlog_warn!(registry, "test_log");
    hlog_error!(registry, "test_log");

    println!("\n2. File logger keeping Error and above:");
    registry.try_append(
        LogConfig::new("error-file")
            .with_file("error.log")
            .with_level(LogLevel::Error)
            .with_console(false),
    )?;

    hlog_info!(registry, logger: "error-file", "filtered out");
    hlog_error!(registry, logger: "error-file", "test error");
    hlog_fatal!(registry, logger: "error-file", "test fatal {}", 2);

    // Give the background flush time to write the file
    std::thread::sleep(Duration::from_secs(3));

    let logger = registry.get("error-file")?;
    println!(
        "   {} lines logged, {} bytes written",
        logger.metrics().total_logged(),
        logger.metrics().bytes_written()
    );

    println!("\n=== Example completed successfully! ===");
    println!("Check 'error.log' for the file output");

    Ok(())
}
