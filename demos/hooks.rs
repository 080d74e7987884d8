//! Hooks example
//!
//! Routes entries to a message bus subject per level and component. The
//! publisher here prints instead of talking to a NATS server.
//!
//! Run with: cargo run --example hooks

use hooklog::prelude::*;
use hooklog::BoxError;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct StdoutPublisher;

impl Publisher for StdoutPublisher {
    fn publish(&self, subject: &str, data: &[u8]) -> std::result::Result<(), BoxError> {
        println!("[{}] {}", subject, String::from_utf8_lossy(data));
        Ok(())
    }
}

fn main() {
    let error_count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&error_count);

    let logger = Logger::builder()
        .sink(io::sink())
        .hook(Arc::new(NatsHook::new(
            StdoutPublisher,
            "logs.{level}.{component}",
            &[LogLevel::Info, LogLevel::Error],
        )))
        .hook(Arc::new(
            FnHook::new(&[LogLevel::Error, LogLevel::Fatal], move |_entry: &Entry| {
                counter.fetch_add(1, Ordering::Relaxed);
                Ok(())
            })
            .with_name("error-counter"),
        ))
        .build();

    logger
        .info()
        .str("component", "api")
        .str("endpoint", "/users")
        .msg("API request received");

    logger
        .warn()
        .str("component", "cache")
        .msg("Not published: warn is not subscribed");

    logger
        .error()
        .str("component", "database")
        .err(Some("connection timeout"))
        .msg("Database connection failed");

    println!("errors seen: {}", error_count.load(Ordering::Relaxed));
}
