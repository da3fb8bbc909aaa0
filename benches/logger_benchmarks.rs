//! Criterion benchmarks for hplog

use chrono::Local;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hplog::core::record::{colorize, format_record};
use hplog::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

const SITE: CallSite<'static> = CallSite::new("/srv/app/src/bench.rs", 10, "bench");

/// Buffered file logger whose timer does not fire during a run
fn buffered_logger(dir: &TempDir, name: &str, level: LogLevel) -> Logger {
    let path = dir.path().join(format!("{}.log", name));
    Logger::new(
        LogConfig::new(name)
            .with_file(path.to_string_lossy().into_owned())
            .with_console(false)
            .with_level(level)
            .with_flush_interval(Duration::from_secs(3600)),
    )
    .expect("Failed to create logger")
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));
    let now = Local::now();

    group.bench_function("format_record", |b| {
        b.iter(|| {
            format_record(
                black_box(&now),
                "bench",
                LogLevel::Info,
                black_box("Request completed in 12ms"),
                &SITE,
            )
        });
    });

    let line = format_record(&now, "bench", LogLevel::Warn, "slow request", &SITE);
    group.bench_function("colorize", |b| {
        b.iter(|| colorize(black_box(&line), LogLevel::Warn));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_buffered_logging(c: &mut Criterion) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut group = c.benchmark_group("buffered_logging");
    group.throughput(Throughput::Elements(1));

    let logger = buffered_logger(&dir, "buffered", LogLevel::Debug);
    group.bench_function("info", |b| {
        b.iter(|| logger.info(&SITE, black_box("Info message")));
    });
    // Keep the buffer from growing across benchmarks
    let _ = logger.flush();

    group.finish();
}

fn bench_level_filtering(c: &mut Criterion) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = buffered_logger(&dir, "filtered", LogLevel::Warn);
    group.bench_function("suppressed_debug", |b| {
        b.iter(|| logger.debug(&SITE, black_box("Filtered out")));
    });

    group.finish();
}

fn bench_flush(c: &mut Criterion) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut group = c.benchmark_group("flush");

    for lines in [10usize, 100, 1000] {
        let logger = buffered_logger(&dir, &format!("flush-{}", lines), LogLevel::Debug);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, &lines| {
            b.iter(|| {
                for i in 0..lines {
                    logger.info(&SITE, format!("line {}", i));
                }
                logger.flush().expect("Failed to flush");
            });
        });
    }

    group.finish();
}

fn bench_concurrent_logging(c: &mut Criterion) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut group = c.benchmark_group("concurrent_logging");
    group.throughput(Throughput::Elements(400));

    let logger = Arc::new(buffered_logger(&dir, "concurrent", LogLevel::Debug));
    group.bench_function("4_threads", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for _ in 0..100 {
                            logger.info(&SITE, "Concurrent message");
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().expect("Thread panicked");
            }
            logger.flush().expect("Failed to flush");
        });
    });

    group.finish();
}

fn bench_registry_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    group.throughput(Throughput::Elements(1));

    let registry = LoggerRegistry::new();
    for i in 0..32 {
        registry.append(LogConfig::new(format!("logger-{}", i)).with_console(false));
    }

    group.bench_function("get_hit", |b| {
        b.iter(|| registry.get(black_box("logger-17")));
    });
    group.bench_function("exists_miss", |b| {
        b.iter(|| registry.exists(black_box("missing")));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_formatting,
    bench_buffered_logging,
    bench_level_filtering,
    bench_flush,
    bench_concurrent_logging,
    bench_registry_lookup
);
criterion_main!(benches);
