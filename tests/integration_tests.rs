//! Integration tests for hooklog
//!
//! These tests verify:
//! - Level filtering and runtime level changes
//! - Derived loggers and reserved key handling
//! - Hook ordering, level filtering and removal
//! - Subject templating for the message bus hook
//! - Thread safety
//! - File output

use hooklog::prelude::*;
use hooklog::BoxError;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

fn parse_lines(sink: &MemorySink) -> Vec<Value> {
    sink.lines()
        .iter()
        .map(|line| serde_json::from_str(line).expect("every line is a JSON object"))
        .collect()
}

#[test]
fn test_level_filtering_scenario() {
    let sink = MemorySink::new();
    let logger = Logger::new(
        LoggerOptions::new()
            .with_sink(sink.clone())
            .with_level(LogLevel::Info),
    );

    logger.debug().msg("debug message");
    assert!(sink.is_empty(), "debug is below the minimum level");

    logger.info().str("a", "b").msg("y");
    let entries = parse_lines(&sink);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["level"], "info");
    assert_eq!(entries[0]["message"], "y");
    assert_eq!(entries[0]["a"], "b");
    assert!(entries[0]["time"].is_string());

    logger.set_level(LogLevel::Debug);
    logger.debug().msg("debug message");
    assert_eq!(parse_lines(&sink).len(), 2);
}

#[test]
fn test_every_level_at_lowest_minimum() {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .sink(sink.clone())
        .min_level(LogLevel::Debug)
        .exit_handler(|_| {})
        .build();

    logger.debug().msg("d");
    logger.info().msg("i");
    logger.warn().msg("w");
    logger.error().msg("e");
    logger.fatal().msg("f");

    let levels: Vec<String> = parse_lines(&sink)
        .iter()
        .map(|e| e["level"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(levels, ["debug", "info", "warn", "error", "fatal"]);
}

#[test]
fn test_with_chain_and_collisions() {
    let sink = MemorySink::new();
    let logger = Logger::builder().sink(sink.clone()).build();

    let request_logger = logger
        .with("request_id", "req-123456")
        .with("user_id", "user-789");
    request_logger.info().msg("Processing request");
    request_logger
        .info()
        .str("user_id", "user-override")
        .msg("event fields override context");

    let entries = parse_lines(&sink);
    assert_eq!(entries[0]["request_id"], "req-123456");
    assert_eq!(entries[0]["user_id"], "user-789");
    assert_eq!(entries[1]["user_id"], "user-override");

    logger.info().msg("parent is unchanged");
    assert!(parse_lines(&sink)[2].get("request_id").is_none());
}

#[test]
fn test_reserved_keys_win() {
    let sink = MemorySink::new();
    let logger = Logger::builder().sink(sink.clone()).build();

    logger
        .with("message", "from context")
        .warn()
        .str("level", "not-a-level")
        .str("time", "yesterday")
        .msg("real message");

    let entries = parse_lines(&sink);
    assert_eq!(entries[0]["level"], "warn");
    assert_eq!(entries[0]["message"], "real message");
    assert_ne!(entries[0]["time"], "yesterday");
}

#[test]
fn test_messages_stay_on_one_line() {
    let sink = MemorySink::new();
    let logger = Logger::builder().sink(sink.clone()).build();

    logger
        .info()
        .str("path", "a\nb")
        .msg("User login\nERROR fake entry\n\"quoted\"");

    let lines = sink.lines();
    assert_eq!(lines.len(), 1, "log should be a single line");
    let entry: Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(entry["message"], "User login\nERROR fake entry\n\"quoted\"");
}

#[test]
fn test_hooks_fire_in_order_and_by_level() {
    let sink = MemorySink::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    let first_order = Arc::clone(&order);
    let first = Arc::new(
        FnHook::new(&[], move |entry: &Entry| {
            first_order.lock().push(format!("first:{}", entry.message()));
            Ok(())
        })
        .with_name("first"),
    );
    let second_order = Arc::clone(&order);
    let errors_only = Arc::new(FnHook::new(&[LogLevel::Error], move |entry: &Entry| {
        second_order.lock().push(format!("errors:{}", entry.message()));
        Ok(())
    }));

    let logger = Logger::builder()
        .sink(sink.clone())
        .hook(first)
        .hook(errors_only.clone())
        .build();

    logger.info().msg("a");
    logger.error().msg("b");

    assert_eq!(*order.lock(), vec!["first:a", "first:b", "errors:b"]);

    logger.remove_hook(&errors_only);
    logger.error().msg("c");
    assert_eq!(order.lock().last().map(String::as_str), Some("first:c"));
    assert_eq!(order.lock().len(), 4);
}

#[test]
fn test_hook_sees_finalized_entry() {
    let hook = Arc::new(RecordingHook::all_levels());
    let logger = Logger::builder()
        .sink(MemorySink::new())
        .hook(hook.clone())
        .build();

    logger.with("component", "db").error().int("code", 7).msg("down");

    let entry = hook.last().expect("hook fired");
    assert_eq!(entry.level(), LogLevel::Error);
    assert_eq!(entry.message(), "down");
    assert_eq!(entry.get_str("component"), Some("db"));
    assert_eq!(entry.get("code"), Some(&FieldValue::Int(7)));
    assert!(!entry.time().is_empty());
}

#[derive(Default)]
struct CapturingConn {
    published: Mutex<Vec<(String, Value)>>,
}

impl Publisher for CapturingConn {
    fn publish(&self, subject: &str, data: &[u8]) -> std::result::Result<(), BoxError> {
        let payload = serde_json::from_slice(data)?;
        self.published.lock().push((subject.to_string(), payload));
        Ok(())
    }
}

#[test]
fn test_nats_hook_subjects() {
    let conn = Arc::new(CapturingConn::default());
    let logger = Logger::builder()
        .sink(MemorySink::new())
        .hook(Arc::new(NatsHook::new(
            Arc::clone(&conn),
            "logs.{level}.{component}",
            &[LogLevel::Info, LogLevel::Error],
        )))
        .build();

    logger
        .info()
        .str("component", "api")
        .str("endpoint", "/users")
        .msg("API request received");
    logger.debug().str("component", "api").msg("filtered by logger");
    logger.warn().str("component", "api").msg("filtered by hook");
    logger
        .error()
        .str("component", "database")
        .err(Some("connection timeout"))
        .msg("Database connection failed");
    logger.info().msg("no component");

    let published = conn.published.lock();
    let subjects: Vec<&str> = published.iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(
        subjects,
        ["logs.info.api", "logs.error.database", "logs.info.{component}"]
    );
    assert_eq!(published[0].1["endpoint"], "/users");
    assert_eq!(published[1].1["error"], "connection timeout");
}

#[test]
fn test_concurrent_logging() {
    let sink = MemorySink::new();
    let hook = Arc::new(RecordingHook::all_levels());
    let logger = Arc::new(
        Logger::builder()
            .sink(sink.clone())
            .hook(hook.clone())
            .build(),
    );

    let mut handles = vec![];
    for thread_id in 0..8 {
        let logger = Arc::clone(&logger);
        handles.push(thread::spawn(move || {
            for i in 0..100 {
                logger
                    .info()
                    .int("thread", thread_id)
                    .int("seq", i)
                    .msg(format!("Thread {} - Message {}", thread_id, i));
            }
        }));
    }
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let entries = parse_lines(&sink);
    assert_eq!(entries.len(), 800);
    assert_eq!(hook.len(), 800);

    let unique: HashSet<(i64, i64)> = entries
        .iter()
        .map(|e| (e["thread"].as_i64().unwrap(), e["seq"].as_i64().unwrap()))
        .collect();
    assert_eq!(unique.len(), 800);
}

#[test]
fn test_derived_loggers_share_sink_across_threads() {
    let sink = MemorySink::new();
    let root = Logger::builder().sink(sink.clone()).build();

    thread::scope(|scope| {
        for worker in 0..4 {
            let child = root.with("worker", worker as i64);
            scope.spawn(move || {
                for _ in 0..50 {
                    child.info().msg("tick");
                }
            });
        }
    });

    let entries = parse_lines(&sink);
    assert_eq!(entries.len(), 200);
    assert!(entries.iter().all(|e| e["worker"].is_i64()));
}

#[test]
fn test_file_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");

    {
        let sink = FileSink::open(&log_file).expect("Failed to open log file");
        let logger = Logger::builder().sink(sink).build();
        logger.info().str("run", "first").msg("one");
        logger.flush().expect("Failed to flush");
    }
    {
        let sink = FileSink::open(&log_file).expect("Failed to reopen log file");
        let logger = Logger::builder().sink(sink).build();
        logger.warn().str("run", "second").msg("two");
    }

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let runs: Vec<String> = content
        .lines()
        .map(|line| {
            let v: Value = serde_json::from_str(line).unwrap();
            v["run"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(runs, ["first", "second"]);
}

#[test]
fn test_config_from_json() {
    let config = LoggerConfig::from_json_str(r#"{"level":"error","time_format":"Unix"}"#)
        .expect("valid config");
    let sink = MemorySink::new();
    let logger = Logger::builder().sink(sink.clone()).config(&config).build();

    logger.warn().msg("filtered");
    logger.error().msg("kept");

    let entries = parse_lines(&sink);
    assert_eq!(entries.len(), 1);
    let time = entries[0]["time"].as_str().unwrap();
    assert!(time.parse::<i64>().is_ok(), "unix seconds, got {}", time);
}
