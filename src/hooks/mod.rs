//! Hook implementations
//!
//! - [`NatsHook`]: publishes entries to a message bus subject built from a template
//! - [`FnHook`]: wraps a closure
//! - [`RecordingHook`]: keeps every entry it receives

pub mod func;
pub mod nats;
pub mod recording;

pub use func::FnHook;
pub use nats::{NatsHook, Publisher};
pub use recording::RecordingHook;

pub use crate::core::Hook;

use crate::core::LogLevel;

/// Empty level lists subscribe to every level.
pub(crate) fn levels_or_all(levels: &[LogLevel]) -> Vec<LogLevel> {
    if levels.is_empty() {
        LogLevel::ALL.to_vec()
    } else {
        levels.to_vec()
    }
}
