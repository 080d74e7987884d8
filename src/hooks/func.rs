//! Closure-backed hook

use super::levels_or_all;
use crate::core::{Entry, Hook, LogLevel, Result};

/// Hook that runs a closure for each subscribed entry
///
/// ```
/// use hooklog::prelude::*;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let errors = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&errors);
///
/// let logger = Logger::builder()
///     .sink(MemorySink::new())
///     .hook(Arc::new(FnHook::new(&[LogLevel::Error], move |_entry| {
///         counter.fetch_add(1, Ordering::Relaxed);
///         Ok(())
///     })))
///     .build();
///
/// logger.info().msg("ignored by the hook");
/// logger.error().msg("counted");
/// assert_eq!(errors.load(Ordering::Relaxed), 1);
/// ```
pub struct FnHook<F> {
    name: String,
    levels: Vec<LogLevel>,
    callback: F,
}

impl<F> FnHook<F> {
    /// An empty `levels` slice subscribes to every level.
    pub fn new(levels: &[LogLevel], callback: F) -> Self
    where
        F: Fn(&Entry) -> Result<()> + Send + Sync,
    {
        Self {
            name: "fn".to_string(),
            levels: levels_or_all(levels),
            callback,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<F> Hook for FnHook<F>
where
    F: Fn(&Entry) -> Result<()> + Send + Sync,
{
    fn fire(&self, entry: &Entry) -> Result<()> {
        (self.callback)(entry)
    }

    fn levels(&self) -> &[LogLevel] {
        &self.levels
    }

    fn name(&self) -> &str {
        &self.name
    }
}
