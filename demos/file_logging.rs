//! File logging example
//!
//! Writes JSON lines to `application.log`, configured from `HOOKLOG_LEVEL`.
//!
//! Run with: HOOKLOG_LEVEL=debug cargo run --example file_logging

use hooklog::prelude::*;

fn main() -> Result<()> {
    let config = LoggerConfig::from_env();
    let logger = Logger::builder()
        .sink(FileSink::open("application.log")?)
        .config(&config)
        .time_format(TimestampFormat::Iso8601Millis)
        .build();

    logger.info().msg("Application started");
    logger.debug().str("path", "config.json").msg("Loading configuration");
    logger.warn().msg("Using default settings for some options");

    let worker = logger.with("component", "worker");
    for i in 1..=5 {
        worker.info().int("item", i).msg("Processing item");
        if i == 3 {
            worker.warn().int("item", i).msg("Item took longer than expected");
        }
    }

    logger.info().msg("All operations completed");
    logger.flush()?;

    let metrics = logger.metrics();
    println!(
        "Wrote {} entries ({} suppressed) to application.log",
        metrics.entries_written(),
        metrics.entries_suppressed()
    );

    Ok(())
}
