//! Core logger types and traits

pub mod config;
pub mod entry;
pub mod error;
pub mod event;
pub mod field;
pub mod hook;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use config::LoggerConfig;
pub use entry::{Entry, ERROR_KEY, LEVEL_KEY, MESSAGE_KEY, TIME_KEY};
pub use error::{BoxError, LoggerError, Result};
pub use event::Event;
pub use field::FieldValue;
pub use hook::Hook;
pub use log_level::{parse_level, LogLevel};
pub use logger::{ExitHandler, Logger, LoggerBuilder, LoggerOptions, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use timestamp::TimestampFormat;
