//! Criterion benchmarks for hooklog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hooklog::prelude::*;
use std::io;
use std::sync::Arc;

fn discard_logger(level: LogLevel) -> Logger {
    Logger::builder()
        .sink(io::sink())
        .min_level(level)
        .exit_handler(|_| {})
        .build()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("builder", |b| {
        b.iter(|| black_box(discard_logger(LogLevel::Info)));
    });

    let parent = discard_logger(LogLevel::Info).with("service", "api");
    group.bench_function("with", |b| {
        b.iter(|| black_box(parent.with(black_box("request_id"), "req-123456")));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(LogLevel::Debug);

    group.bench_function("message_only", |b| {
        b.iter(|| logger.info().msg(black_box("Info message")));
    });

    group.bench_function("five_fields", |b| {
        b.iter(|| {
            logger
                .info()
                .str("component", "api")
                .int("status", 200)
                .bool("cache_hit", true)
                .float("latency_ms", 12.5)
                .str("path", "/users")
                .msg(black_box("request served"))
        });
    });

    let context_logger = logger.with("request_id", "req-1").with("user_id", "user-7");
    group.bench_function("with_context", |b| {
        b.iter(|| context_logger.warn().msg(black_box("context message")));
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(LogLevel::Error);

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            logger
                .debug()
                .str("ignored", "value")
                .msg(black_box("filtered"))
        });
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| logger.error().msg(black_box("written")));
    });

    group.finish();
}

// ============================================================================
// Hook Dispatch Benchmarks
// ============================================================================

struct NullPublisher;

impl Publisher for NullPublisher {
    fn publish(&self, subject: &str, data: &[u8]) -> std::result::Result<(), hooklog::BoxError> {
        black_box((subject, data));
        Ok(())
    }
}

fn bench_hooks(c: &mut Criterion) {
    let mut group = c.benchmark_group("hooks");
    group.throughput(Throughput::Elements(1));

    let closure_logger = discard_logger(LogLevel::Info);
    closure_logger.add_hook(Arc::new(FnHook::new(&[], |entry: &Entry| {
        black_box(entry.len());
        Ok(())
    })));
    group.bench_function("closure_hook", |b| {
        b.iter(|| closure_logger.info().msg(black_box("hooked")));
    });

    let nats_logger = discard_logger(LogLevel::Info);
    nats_logger.add_hook(Arc::new(NatsHook::new(
        NullPublisher,
        "logs.{level}.{component}",
        &[],
    )));
    group.bench_function("nats_hook", |b| {
        b.iter(|| {
            nats_logger
                .info()
                .str("component", "api")
                .msg(black_box("published"))
        });
    });

    let filtered_logger = discard_logger(LogLevel::Info);
    filtered_logger.add_hook(Arc::new(RecordingHook::new(&[LogLevel::Fatal])));
    group.bench_function("unsubscribed_hook", |b| {
        b.iter(|| filtered_logger.info().msg(black_box("skipped by hook")));
    });

    group.finish();
}

// ============================================================================
// Concurrency Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");
    group.throughput(Throughput::Elements(400));

    let logger = Arc::new(discard_logger(LogLevel::Info));

    group.bench_function("multi_thread_4", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for i in 0..100 {
                            logger.info().int("i", i).msg("concurrent");
                        }
                    })
                })
                .collect();

            for handle in handles {
                let _ = handle.join();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_logging,
    bench_level_filtering,
    bench_hooks,
    bench_concurrent_logging,
);
criterion_main!(benches);
