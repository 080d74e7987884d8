//! # hooklog
//!
//! A structured, leveled JSON logger with hooks.
//!
//! ## Features
//!
//! - **One JSON object per line**: every entry carries `level`, `time` and
//!   `message` plus any typed fields added through the [`Event`] builder
//! - **Level filtering**: events below the minimum level are suppressed
//!   before any field work is done
//! - **Derived loggers**: [`Logger::with`] adds context fields to every entry
//! - **Hooks**: side effects per entry, filtered by level, including a
//!   message bus publisher with templated subjects ([`NatsHook`])
//! - **Thread safe**: a `Logger` can be shared across threads
//!
//! ## Example
//!
//! ```
//! use hooklog::prelude::*;
//! use std::sync::Arc;
//!
//! let sink = MemorySink::new();
//! let errors = Arc::new(RecordingHook::new(&[LogLevel::Error]));
//!
//! let logger = Logger::builder()
//!     .sink(sink.clone())
//!     .hook(errors.clone())
//!     .build();
//!
//! logger.info().str("component", "api").int("status", 200).msg("request served");
//! logger.error().err(Some("connection refused")).msg("upstream failed");
//!
//! assert_eq!(sink.lines().len(), 2);
//! assert_eq!(errors.len(), 1);
//! ```

pub mod core;
pub mod hooks;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        parse_level, Entry, Event, ExitHandler, FieldValue, Hook, LogLevel, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, LoggerOptions, Result,
        TimestampFormat, FATAL_EXIT_CODE,
    };
    pub use crate::hooks::{FnHook, NatsHook, Publisher, RecordingHook};
    pub use crate::sinks::{FileSink, MemorySink};
}

pub use crate::core::{
    parse_level, BoxError, Entry, Event, ExitHandler, FieldValue, Hook, LogLevel, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, LoggerOptions, Result,
    TimestampFormat, ERROR_KEY, FATAL_EXIT_CODE, LEVEL_KEY, MESSAGE_KEY, TIME_KEY,
};
pub use hooks::{FnHook, NatsHook, Publisher, RecordingHook};
pub use sinks::{FileSink, MemorySink};
