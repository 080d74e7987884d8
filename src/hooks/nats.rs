//! Message bus hook with templated subjects
//!
//! [`NatsHook`] publishes every subscribed entry as JSON to a subject built
//! from a template such as `logs.{level}.{component}`. The connection is any
//! [`Publisher`]; a NATS client wrapper is the intended use.

use super::levels_or_all;
use crate::core::{BoxError, Entry, Hook, LogLevel, LoggerError, Result};
use std::sync::Arc;

/// Publish capability needed by [`NatsHook`]
pub trait Publisher: Send + Sync {
    fn publish(&self, subject: &str, data: &[u8]) -> std::result::Result<(), BoxError>;
}

impl<P: Publisher + ?Sized> Publisher for Arc<P> {
    fn publish(&self, subject: &str, data: &[u8]) -> std::result::Result<(), BoxError> {
        (**self).publish(subject, data)
    }
}

impl<P: Publisher + ?Sized> Publisher for Box<P> {
    fn publish(&self, subject: &str, data: &[u8]) -> std::result::Result<(), BoxError> {
        (**self).publish(subject, data)
    }
}

/// Hook that publishes entries to a templated subject
///
/// Every `{key}` in the subject template is replaced by the entry's value for
/// `key` when that value is a string. Placeholders without a string value
/// are left as written. Substituted text is never expanded again.
///
/// ```
/// use hooklog::hooks::{NatsHook, Publisher};
/// use hooklog::{BoxError, Logger, MemorySink};
/// use std::sync::{Arc, Mutex};
///
/// #[derive(Default)]
/// struct Subjects(Mutex<Vec<String>>);
///
/// impl Publisher for Subjects {
///     fn publish(&self, subject: &str, _data: &[u8]) -> Result<(), BoxError> {
///         self.0.lock().unwrap().push(subject.to_string());
///         Ok(())
///     }
/// }
///
/// let conn = Arc::new(Subjects::default());
/// let logger = Logger::builder()
///     .sink(MemorySink::new())
///     .hook(Arc::new(NatsHook::new(conn.clone(), "logs.{level}.{component}", &[])))
///     .build();
///
/// logger.info().str("component", "api").msg("API request received");
/// assert_eq!(conn.0.lock().unwrap().as_slice(), ["logs.info.api"]);
/// ```
pub struct NatsHook<P> {
    conn: P,
    subject: String,
    levels: Vec<LogLevel>,
}

impl<P: Publisher> NatsHook<P> {
    /// An empty `levels` slice subscribes to every level.
    pub fn new(conn: P, subject: impl Into<String>, levels: &[LogLevel]) -> Self {
        Self {
            conn,
            subject: subject.into(),
            levels: levels_or_all(levels),
        }
    }

    pub fn subject_template(&self) -> &str {
        &self.subject
    }

    /// Resolve the subject template against `entry`
    pub fn subject_for(&self, entry: &Entry) -> String {
        expand_subject(&self.subject, entry)
    }
}

fn expand_subject(template: &str, entry: &Entry) -> String {
    let mut subject = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        subject.push_str(&rest[..open]);
        let tail = &rest[open..];

        let Some(close) = tail.find('}') else {
            break;
        };

        let key = &tail[1..close];
        if key.contains('{') {
            // Stray brace; keep it and look for the next placeholder
            subject.push('{');
            rest = &tail[1..];
            continue;
        }

        match entry.get_str(key) {
            Some(value) => subject.push_str(value),
            None => subject.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }

    subject.push_str(rest);
    subject
}

impl<P: Publisher> Hook for NatsHook<P> {
    fn fire(&self, entry: &Entry) -> Result<()> {
        let subject = self.subject_for(entry);
        let data = entry.to_json_vec()?;

        self.conn
            .publish(&subject, &data)
            .map_err(|e| LoggerError::publish(subject, e))
    }

    fn levels(&self) -> &[LogLevel] {
        &self.levels
    }

    fn name(&self) -> &str {
        "nats"
    }
}
