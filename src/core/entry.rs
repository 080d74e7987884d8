//! Finalized log entry handed to the sink and to hooks

use super::field::FieldValue;
use super::log_level::{parse_level, LogLevel};
use serde::Serialize;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Reserved key holding the level name
pub const LEVEL_KEY: &str = "level";
/// Reserved key holding the formatted timestamp
pub const TIME_KEY: &str = "time";
/// Reserved key holding the message text
pub const MESSAGE_KEY: &str = "message";
/// Key written by [`Event::err`](super::Event::err)
pub const ERROR_KEY: &str = "error";

/// One finalized log record: every accumulated field plus the reserved
/// `level`, `time` and `message` keys.
///
/// Keys are kept sorted so the serialized line is stable. Hooks only ever see
/// an `&Entry`, so no hook can change what the next one observes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Entry {
    fields: BTreeMap<String, FieldValue>,
}

impl Entry {
    /// Finalize an entry from accumulated fields.
    ///
    /// The reserved keys are inserted last and overwrite any field of the
    /// same name.
    pub(crate) fn finalize(
        mut fields: BTreeMap<String, FieldValue>,
        level: LogLevel,
        time: String,
        message: String,
    ) -> Self {
        fields.insert(LEVEL_KEY.to_string(), FieldValue::from(level.as_str()));
        fields.insert(TIME_KEY.to_string(), FieldValue::String(time));
        fields.insert(MESSAGE_KEY.to_string(), FieldValue::String(message));
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// The value under `key` if it is string-typed.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(FieldValue::as_str)
    }

    pub fn level(&self) -> LogLevel {
        self.get_str(LEVEL_KEY).map(parse_level).unwrap_or_default()
    }

    pub fn message(&self) -> &str {
        self.get_str(MESSAGE_KEY).unwrap_or_default()
    }

    pub fn time(&self) -> &str {
        self.get_str(TIME_KEY).unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldValue> {
        self.fields.iter()
    }

    /// Serialize to a single-line JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to JSON bytes
    pub fn to_json_vec(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

impl<'a> IntoIterator for &'a Entry {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
