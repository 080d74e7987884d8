//! Basic logger usage example
//!
//! Demonstrates levels, typed fields and derived loggers on standard output.
//!
//! Run with: cargo run --example basic_usage

use hooklog::prelude::*;
use std::time::Duration;

#[derive(serde::Serialize)]
struct Metadata {
    id: u32,
    name: &'static str,
}

fn main() {
    let logger = Logger::console();

    // Debug is below the default minimum level
    logger.debug().msg("This debug message is not written");
    logger.info().msg("Application started");

    logger.set_level(LogLevel::Debug);
    logger.debug().str("phase", "startup").msg("Debug output enabled");

    logger
        .info()
        .str("string", "value")
        .int("int", 123)
        .bool("bool", true)
        .float("ratio", 0.75)
        .duration("elapsed", Duration::from_millis(250))
        .hex("digest", [0xdeu8, 0xad, 0xbe, 0xef])
        .any(
            "metadata",
            &Metadata {
                id: 123,
                name: "example",
            },
        )
        .msg("Typed fields");

    let result: std::result::Result<(), std::io::Error> =
        Err(std::io::Error::other("connection refused"));
    logger
        .error()
        .err(result.as_ref().err())
        .msg("Upstream call failed");

    let request_logger = logger
        .with("request_id", "req-123456")
        .with("user_id", "user-789");
    request_logger.info().msg("Processing request");
    request_logger.warn().str("step", "validation").msg("Slow validation");

    hooklog::info!(logger, "Processed {} items", 42);
}
