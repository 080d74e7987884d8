//! Logging macros for `format!`-style messages.
//!
//! Each macro starts an event at its level and emits it with the formatted
//! message. Use the builder methods directly when the entry needs fields.
//!
//! # Examples
//!
//! ```
//! use hooklog::prelude::*;
//! use hooklog::info;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder().sink(sink.clone()).build();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! assert_eq!(sink.lines().len(), 2);
//! ```

/// Log a formatted message at a runtime level.
///
/// # Examples
///
/// ```
/// # use hooklog::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use hooklog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level).msg(format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use hooklog::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).min_level(LogLevel::Debug).build();
/// use hooklog::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// ```
/// # use hooklog::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use hooklog::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use hooklog::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use hooklog::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message and run the logger's exit handler.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
