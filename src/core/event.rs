//! Fluent builder for a single log record
//!
//! An [`Event`] is created by one of the level methods on [`Logger`], collects
//! typed fields, and is consumed by [`Event::msg`]. Events created below the
//! logger's minimum level are *suppressed*: every builder call on them is a
//! no-op and `msg` writes nothing and fires no hooks.

use super::entry::ERROR_KEY;
use super::field::FieldValue;
use super::log_level::LogLevel;
use super::logger::Logger;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Builder for one log entry
///
/// # Example
///
/// ```
/// use hooklog::{Logger, LogLevel, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder().sink(sink.clone()).build();
///
/// logger.info()
///     .str("service", "billing")
///     .int("status", 200)
///     .bool("cache_hit", true)
///     .msg("request served");
///
/// assert!(sink.contents().contains(r#""status":200"#));
/// ```
///
/// An event is single-owner: it is built on one thread and consumed by `msg`.
#[must_use = "an event does nothing until `msg` is called"]
pub struct Event<'a> {
    state: EventState<'a>,
}

enum EventState<'a> {
    Active(ActiveEvent<'a>),
    Suppressed,
}

struct ActiveEvent<'a> {
    logger: &'a Logger,
    level: LogLevel,
    time: DateTime<Utc>,
    fields: BTreeMap<String, FieldValue>,
}

impl<'a> Event<'a> {
    pub(crate) fn active(
        logger: &'a Logger,
        level: LogLevel,
        fields: BTreeMap<String, FieldValue>,
    ) -> Self {
        Self {
            state: EventState::Active(ActiveEvent {
                logger,
                level,
                time: Utc::now(),
                fields,
            }),
        }
    }

    pub(crate) fn suppressed() -> Self {
        Self {
            state: EventState::Suppressed,
        }
    }

    /// Whether this event will produce output
    pub fn enabled(&self) -> bool {
        matches!(self.state, EventState::Active(_))
    }

    /// Level of an active event; `None` for a suppressed one
    pub fn level(&self) -> Option<LogLevel> {
        match &self.state {
            EventState::Active(active) => Some(active.level),
            EventState::Suppressed => None,
        }
    }

    fn insert(mut self, key: impl Into<String>, value: FieldValue) -> Self {
        if let EventState::Active(active) = &mut self.state {
            active.fields.insert(key.into(), value);
        }
        self
    }

    /// Add a field of any supported type
    pub fn field<K, V>(self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.insert(key, value.into())
    }

    /// Add every pair from an iterator of fields
    pub fn fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        if let EventState::Active(active) = &mut self.state {
            for (key, value) in fields {
                active.fields.insert(key.into(), value.into());
            }
        }
        self
    }

    pub fn str(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, FieldValue::String(value.into()))
    }

    /// Add a list of strings, serialized as a JSON array
    pub fn strs<S: AsRef<str>>(self, key: impl Into<String>, values: &[S]) -> Self {
        if !self.enabled() {
            return self;
        }
        let array = values
            .iter()
            .map(|s| serde_json::Value::String(s.as_ref().to_string()))
            .collect();
        self.insert(key, FieldValue::Json(serde_json::Value::Array(array)))
    }

    pub fn int(self, key: impl Into<String>, value: i64) -> Self {
        self.insert(key, FieldValue::Int(value))
    }

    pub fn uint(self, key: impl Into<String>, value: u64) -> Self {
        self.insert(key, FieldValue::Uint(value))
    }

    /// Add a float. Non-finite values make the entry unserializable.
    pub fn float(self, key: impl Into<String>, value: f64) -> Self {
        self.insert(key, FieldValue::Float(value))
    }

    pub fn bool(self, key: impl Into<String>, value: bool) -> Self {
        self.insert(key, FieldValue::Bool(value))
    }

    /// Record an error's message under the `error` key.
    ///
    /// `None` leaves the event untouched, so a `Result` can be passed
    /// straight through:
    ///
    /// ```
    /// # use hooklog::{Logger, MemorySink};
    /// # let logger = Logger::builder().sink(MemorySink::new()).build();
    /// let result: Result<(), std::io::Error> = Ok(());
    /// logger.info().err(result.as_ref().err()).msg("done");
    /// ```
    pub fn err<E: fmt::Display>(self, err: Option<E>) -> Self {
        match err {
            Some(err) if self.enabled() => {
                self.insert(ERROR_KEY, FieldValue::String(err.to_string()))
            }
            _ => self,
        }
    }

    /// Add an arbitrary serializable value.
    ///
    /// The value is converted to JSON immediately. If the conversion fails,
    /// the event still accepts further calls but `msg` will report the
    /// serialization error and write nothing.
    pub fn any<T: Serialize + ?Sized>(self, key: impl Into<String>, value: &T) -> Self {
        if !self.enabled() {
            return self;
        }
        let value = match serde_json::to_value(value) {
            Ok(json) => FieldValue::Json(json),
            Err(e) => FieldValue::Unserializable(e.to_string()),
        };
        self.insert(key, value)
    }

    /// Add a duration, serialized as integer nanoseconds
    pub fn duration(self, key: impl Into<String>, value: Duration) -> Self {
        self.insert(key, FieldValue::Duration(value))
    }

    /// Add a point in time, serialized as an RFC 3339 string
    pub fn time(self, key: impl Into<String>, value: DateTime<Utc>) -> Self {
        self.insert(key, FieldValue::Time(value))
    }

    /// Add bytes as a lowercase hex string
    pub fn hex(self, key: impl Into<String>, value: impl AsRef<[u8]>) -> Self {
        if !self.enabled() {
            return self;
        }
        self.insert(key, FieldValue::String(hex::encode(value)))
    }

    /// Finish the event and emit it with `message`.
    ///
    /// For a suppressed event this does nothing. Otherwise the entry is
    /// written to the sink, hooks subscribed to the level fire in
    /// registration order, and for [`LogLevel::Fatal`] the process exits
    /// afterwards.
    pub fn msg(self, message: impl Into<String>) {
        match self.state {
            EventState::Suppressed => {}
            EventState::Active(active) => {
                active
                    .logger
                    .emit(active.level, active.time, active.fields, message.into());
            }
        }
    }

    /// Emit with an empty message
    pub fn send(self) {
        self.msg(String::new());
    }
}

impl fmt::Debug for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            EventState::Active(active) => f
                .debug_struct("Event")
                .field("level", &active.level)
                .field("time", &active.time)
                .field("fields", &active.fields)
                .finish(),
            EventState::Suppressed => f.write_str("Event(suppressed)"),
        }
    }
}
