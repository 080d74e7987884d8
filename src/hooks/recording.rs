//! Hook that records entries in memory

use super::levels_or_all;
use crate::core::{Entry, Hook, LogLevel, Result};
use parking_lot::Mutex;

/// Keeps a copy of every entry it is fired with, in firing order
#[derive(Debug)]
pub struct RecordingHook {
    levels: Vec<LogLevel>,
    entries: Mutex<Vec<Entry>>,
}

impl RecordingHook {
    /// An empty `levels` slice subscribes to every level.
    pub fn new(levels: &[LogLevel]) -> Self {
        Self {
            levels: levels_or_all(levels),
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn all_levels() -> Self {
        Self::new(&LogLevel::ALL)
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.entries.lock().clone()
    }

    pub fn last(&self) -> Option<Entry> {
        self.entries.lock().last().cloned()
    }

    /// Levels of the recorded entries, in firing order
    pub fn fired_levels(&self) -> Vec<LogLevel> {
        self.entries.lock().iter().map(Entry::level).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Hook for RecordingHook {
    fn fire(&self, entry: &Entry) -> Result<()> {
        self.entries.lock().push(entry.clone());
        Ok(())
    }

    fn levels(&self) -> &[LogLevel] {
        &self.levels
    }

    fn name(&self) -> &str {
        "recording"
    }
}
