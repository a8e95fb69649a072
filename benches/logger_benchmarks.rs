//! Criterion benchmarks for applog

use applog::core::{sanitize_message, serialize_context};
use applog::{ConsoleSink, FixedPaths, LogLevel, Logger, LoggerConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;

/// Sink that swallows output so benches measure the pipeline, not the terminal
struct DiscardConsole;

impl ConsoleSink for DiscardConsole {
    fn emit(&self, _level: LogLevel, _message: &str, _context: Option<&Value>) {}
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    let platform = Arc::new(FixedPaths::new(std::env::temp_dir(), false));

    group.bench_function("console_only", |b| {
        let platform = Arc::clone(&platform);
        b.iter(|| {
            let logger = Logger::with_console(
                black_box("bench"),
                LoggerConfig::new(),
                platform.clone(),
                Arc::new(DiscardConsole),
            );
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::with_console(
        "bench",
        LoggerConfig::new(),
        Arc::new(FixedPaths::new(std::env::temp_dir(), false)),
        Arc::new(DiscardConsole),
    );

    group.bench_function("info", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"));
        });
    });

    group.bench_function("info_with_context", |b| {
        b.iter(|| {
            logger.info_with(
                black_box("Info message"),
                json!({ "user": "u1", "attempt": 3 }),
            );
        });
    });

    group.finish();
}

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::with_console(
        "bench",
        LoggerConfig::new().with_level(LogLevel::Warn),
        Arc::new(FixedPaths::new(std::env::temp_dir(), false)),
        Arc::new(DiscardConsole),
    );

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            logger.debug(black_box("This should be filtered"));
        });
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| {
            logger.error(black_box("This should be logged"));
        });
    });

    group.finish();
}

// ============================================================================
// File Output Benchmarks
// ============================================================================

fn bench_file_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_logging");
    group.throughput(Throughput::Elements(1));

    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let write_through = Logger::with_console(
        "bench",
        LoggerConfig::new().with_file_logging(true),
        Arc::new(FixedPaths::new(temp_dir.path().join("write_through"), false)),
        Arc::new(DiscardConsole),
    );

    group.bench_function("write_through", |b| {
        b.iter(|| {
            write_through.info(black_box("File message"));
        });
    });

    let buffered = Logger::with_console(
        "bench",
        LoggerConfig::new().with_file_logging(true).with_buffer_size(64),
        Arc::new(FixedPaths::new(temp_dir.path().join("buffered"), false)),
        Arc::new(DiscardConsole),
    );

    group.bench_function("buffered_64", |b| {
        b.iter(|| {
            buffered.info(black_box("File message"));
        });
    });

    group.finish();
}

// ============================================================================
// Serialization Benchmarks
// ============================================================================

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");
    group.throughput(Throughput::Elements(1));

    let flat = json!({ "user": "u1", "attempt": 3, "ok": true });
    group.bench_function("flat_context", |b| {
        b.iter(|| black_box(serialize_context(black_box(&flat))));
    });

    let mut nested = json!("leaf");
    for _ in 0..8 {
        nested = json!({ "inner": nested, "tag": "level" });
    }
    group.bench_function("nested_context", |b| {
        b.iter(|| black_box(serialize_context(black_box(&nested))));
    });

    // Past the depth cap, rendering stops early
    let mut capped = json!("leaf");
    for _ in 0..32 {
        capped = json!([capped]);
    }
    group.bench_function("capped_context", |b| {
        b.iter(|| black_box(serialize_context(black_box(&capped))));
    });

    group.finish();
}

fn bench_sanitization(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitization");
    group.throughput(Throughput::Elements(1));

    group.bench_function("clean_message", |b| {
        b.iter(|| {
            black_box(sanitize_message(black_box(
                "An ordinary message with no escapes",
            )))
        });
    });

    group.bench_function("message_with_escapes", |b| {
        b.iter(|| {
            black_box(sanitize_message(black_box(
                "line one\nline two\r\nwith\ttabs",
            )))
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_logger_creation,
    bench_emission,
    bench_level_filtering,
    bench_file_logging,
    bench_serialization,
    bench_sanitization
);

criterion_main!(benches);
