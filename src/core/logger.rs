//! Main logger implementation

use super::{
    config::LoggerConfig,
    entry::Entry,
    error::{LoggerError, Result},
    event::Event,
    field::FieldValue,
    hook::Hook,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    timestamp::TimestampFormat,
};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Exit code used after a fatal entry has been written
pub const FATAL_EXIT_CODE: i32 = 1;

/// Callback invoked with [`FATAL_EXIT_CODE`] after a fatal entry is emitted.
///
/// Defaults to [`std::process::exit`].
pub type ExitHandler = Arc<dyn Fn(i32) + Send + Sync>;

type SharedSink = Arc<Mutex<Box<dyn Write + Send>>>;

struct LoggerState {
    level: LogLevel,
    hooks: Vec<Arc<dyn Hook>>,
}

/// Structured JSON logger
///
/// Every emitted event becomes one JSON line on the sink. The minimum level,
/// the hook list and the write + hook dispatch phase of every emission are
/// guarded by one lock per logger, so a `Logger` can be shared across
/// threads (for example in an `Arc`).
///
/// # Example
///
/// ```
/// use hooklog::{Logger, LogLevel, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .sink(sink.clone())
///     .min_level(LogLevel::Info)
///     .build();
///
/// logger.debug().msg("filtered out");
/// logger.info().str("a", "b").msg("y");
///
/// let lines = sink.lines();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].contains(r#""message":"y""#));
/// ```
pub struct Logger {
    sink: SharedSink,
    state: Mutex<LoggerState>,
    time_format: TimestampFormat,
    context: BTreeMap<String, FieldValue>,
    exit_handler: ExitHandler,
    metrics: Arc<LoggerMetrics>,
}

/// Options recognized by [`Logger::new`]
///
/// Unset options fall back to standard output, [`LogLevel::Info`] and
/// [`TimestampFormat::Rfc3339`].
#[derive(Default)]
pub struct LoggerOptions {
    pub sink: Option<Box<dyn Write + Send>>,
    pub level: Option<LogLevel>,
    pub time_format: Option<TimestampFormat>,
}

impl LoggerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sink<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn with_time_format(mut self, format: TimestampFormat) -> Self {
        self.time_format = Some(format);
        self
    }
}

impl fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("sink", &self.sink.as_ref().map(|_| "<sink>"))
            .field("level", &self.level)
            .field("time_format", &self.time_format)
            .finish()
    }
}

fn default_exit_handler() -> ExitHandler {
    Arc::new(|code| std::process::exit(code))
}

impl Logger {
    /// Create a logger, applying defaults for unset options
    #[must_use]
    pub fn new(options: LoggerOptions) -> Self {
        Self::from_parts(options, Vec::new(), default_exit_handler())
    }

    /// Logger writing to standard output at [`LogLevel::Info`]
    #[must_use]
    pub fn console() -> Self {
        Self::new(LoggerOptions::default())
    }

    fn from_parts(
        options: LoggerOptions,
        hooks: Vec<Arc<dyn Hook>>,
        exit_handler: ExitHandler,
    ) -> Self {
        let sink = options
            .sink
            .unwrap_or_else(|| Box::new(io::stdout()) as Box<dyn Write + Send>);

        Self {
            sink: Arc::new(Mutex::new(sink)),
            state: Mutex::new(LoggerState {
                level: options.level.unwrap_or_default(),
                hooks,
            }),
            time_format: options.time_format.unwrap_or_default(),
            context: BTreeMap::new(),
            exit_handler,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.state.lock().level = level;
    }

    pub fn level(&self) -> LogLevel {
        self.state.lock().level
    }

    pub fn time_format(&self) -> &TimestampFormat {
        &self.time_format
    }

    /// Context fields copied into every event from this logger
    pub fn context(&self) -> &BTreeMap<String, FieldValue> {
        &self.context
    }

    /// Derive a logger that adds `key` to every entry.
    ///
    /// The derived logger shares the sink, copies the current level and
    /// context fields, and starts with no hooks. Later level changes on
    /// either logger do not affect the other.
    ///
    /// ```
    /// use hooklog::{Logger, MemorySink};
    ///
    /// let sink = MemorySink::new();
    /// let logger = Logger::builder().sink(sink.clone()).build();
    ///
    /// let request_logger = logger.with("request_id", "req-123456").with("user_id", "user-789");
    /// request_logger.info().msg("Processing request");
    ///
    /// let line = &sink.lines()[0];
    /// assert!(line.contains(r#""request_id":"req-123456""#));
    /// assert!(line.contains(r#""user_id":"user-789""#));
    /// ```
    #[must_use]
    pub fn with<K, V>(&self, key: K, value: V) -> Logger
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut context = self.context.clone();
        context.insert(key.into(), value.into());

        Logger {
            sink: Arc::clone(&self.sink),
            state: Mutex::new(LoggerState {
                level: self.level(),
                hooks: Vec::new(),
            }),
            time_format: self.time_format.clone(),
            context,
            exit_handler: Arc::clone(&self.exit_handler),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Start an event at `level`.
    ///
    /// Returns a suppressed event when `level` is below the current minimum.
    pub fn log(&self, level: LogLevel) -> Event<'_> {
        if level < self.level() {
            self.metrics.record_suppressed();
            return Event::suppressed();
        }
        Event::active(self, level, self.context.clone())
    }

    #[inline]
    pub fn debug(&self) -> Event<'_> {
        self.log(LogLevel::Debug)
    }

    #[inline]
    pub fn info(&self) -> Event<'_> {
        self.log(LogLevel::Info)
    }

    #[inline]
    pub fn warn(&self) -> Event<'_> {
        self.log(LogLevel::Warn)
    }

    #[inline]
    pub fn error(&self) -> Event<'_> {
        self.log(LogLevel::Error)
    }

    /// Start a fatal event. Emitting it terminates the process after the
    /// entry is written and hooks have fired.
    #[inline]
    pub fn fatal(&self) -> Event<'_> {
        self.log(LogLevel::Fatal)
    }

    /// Register a hook. Hooks fire in registration order; the same hook may
    /// be registered more than once.
    pub fn add_hook(&self, hook: Arc<dyn Hook>) -> &Self {
        self.state.lock().hooks.push(hook);
        self
    }

    /// Remove the first registration of `hook`, matched by identity.
    pub fn remove_hook<H: Hook + ?Sized>(&self, hook: &Arc<H>) -> &Self {
        let mut state = self.state.lock();
        if let Some(idx) = state
            .hooks
            .iter()
            .position(|h| std::ptr::addr_eq(Arc::as_ptr(h), Arc::as_ptr(hook)))
        {
            state.hooks.remove(idx);
        }
        self
    }

    pub fn hook_count(&self) -> usize {
        self.state.lock().hooks.len()
    }

    /// Get the logger metrics
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()?;
        Ok(())
    }

    /// Finalize, serialize, write and dispatch one entry.
    pub(crate) fn emit(
        &self,
        level: LogLevel,
        time: DateTime<Utc>,
        fields: BTreeMap<String, FieldValue>,
        message: String,
    ) {
        let entry = Entry::finalize(fields, level, self.time_format.format(&time), message);

        let mut line = match entry.to_json_vec() {
            Ok(line) => line,
            Err(e) => {
                self.metrics.record_serialization_failure();
                eprintln!("[LOGGER ERROR] Failed to serialize log entry: {}", e);
                return;
            }
        };
        line.push(b'\n');

        {
            let state = self.state.lock();

            match self.write_line(&line) {
                Ok(()) => {
                    self.metrics.record_written();
                }
                Err(e) => {
                    self.metrics.record_write_failure();
                    eprintln!("[LOGGER ERROR] {}", e);
                }
            }

            self.dispatch(&state.hooks, level, &entry);
        }

        if level == LogLevel::Fatal {
            (self.exit_handler)(FATAL_EXIT_CODE);
        }
    }

    fn write_line(&self, line: &[u8]) -> Result<()> {
        let mut sink = self.sink.lock();
        sink.write_all(line)
            .map_err(|e| LoggerError::io_operation("writing log entry", "sink write failed", e))?;
        sink.flush()
            .map_err(|e| LoggerError::io_operation("flushing log entry", "sink flush failed", e))
    }

    /// Fire every hook subscribed to the entry's level, in order.
    ///
    /// Each hook is isolated: an error or a panic is reported and the
    /// remaining hooks still run.
    fn dispatch(&self, hooks: &[Arc<dyn Hook>], level: LogLevel, entry: &Entry) {
        for (idx, hook) in hooks.iter().enumerate() {
            if !hook.subscribes_to(level) {
                continue;
            }
            self.metrics.record_hook_invocation();

            let fire_result = panic::catch_unwind(AssertUnwindSafe(|| hook.fire(entry)));

            match fire_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    self.metrics.record_hook_failure();
                    eprintln!(
                        "[LOGGER ERROR] Hook #{} ({}) failed: {}",
                        idx,
                        hook.name(),
                        e
                    );
                }
                Err(panic_info) => {
                    self.metrics.record_hook_failure();
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Hook #{} ({}) panicked: {}. \
                         Remaining hooks continue to run.",
                        idx,
                        hook.name(),
                        panic_msg
                    );
                }
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::console()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Logger")
            .field("level", &state.level)
            .field("hooks", &state.hooks.len())
            .field("time_format", &self.time_format)
            .field("context", &self.context)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use hooklog::prelude::*;
/// use std::sync::Arc;
///
/// let sink = MemorySink::new();
/// let audit = Arc::new(RecordingHook::new(&[LogLevel::Error, LogLevel::Fatal]));
///
/// let logger = Logger::builder()
///     .sink(sink.clone())
///     .min_level(LogLevel::Debug)
///     .time_format(TimestampFormat::Iso8601Millis)
///     .hook(audit.clone())
///     .build();
///
/// logger.error().msg("database unreachable");
/// assert_eq!(audit.len(), 1);
/// ```
pub struct LoggerBuilder {
    options: LoggerOptions,
    hooks: Vec<Arc<dyn Hook>>,
    exit_handler: ExitHandler,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            options: LoggerOptions::default(),
            hooks: Vec::new(),
            exit_handler: default_exit_handler(),
        }
    }

    /// Set the sink entries are written to
    #[must_use = "builder methods return a new value"]
    pub fn sink<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.options.sink = Some(Box::new(sink));
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.options.level = Some(level);
        self
    }

    /// Set the format of the reserved `time` key
    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, format: TimestampFormat) -> Self {
        self.options.time_format = Some(format);
        self
    }

    /// Register a hook
    #[must_use = "builder methods return a new value"]
    pub fn hook(mut self, hook: Arc<dyn Hook>) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Replace the handler run after a fatal entry
    ///
    /// # Example
    ///
    /// ```
    /// use hooklog::prelude::*;
    /// use std::sync::atomic::{AtomicI32, Ordering};
    /// use std::sync::Arc;
    ///
    /// let exit_code = Arc::new(AtomicI32::new(0));
    /// let code = Arc::clone(&exit_code);
    ///
    /// let logger = Logger::builder()
    ///     .sink(MemorySink::new())
    ///     .exit_handler(move |c| code.store(c, Ordering::SeqCst))
    ///     .build();
    ///
    /// logger.fatal().msg("cannot continue");
    /// assert_eq!(exit_code.load(Ordering::SeqCst), 1);
    /// ```
    #[must_use = "builder methods return a new value"]
    pub fn exit_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        self.exit_handler = Arc::new(handler);
        self
    }

    /// Apply level and timestamp format from a loaded configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: &LoggerConfig) -> Self {
        self.options.level = Some(config.level);
        self.options.time_format = Some(config.time_format.clone());
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger::from_parts(self.options, self.hooks, self.exit_handler)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<LoggerOptions> for LoggerBuilder {
    fn from(options: LoggerOptions) -> Self {
        Self {
            options,
            ..Self::new()
        }
    }
}
