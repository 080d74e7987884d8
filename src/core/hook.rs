//! Hook trait for side effects triggered by emitted entries

use super::{entry::Entry, error::Result, log_level::LogLevel};

/// A side-effect handler registered on a [`Logger`](super::Logger).
///
/// The logger calls [`fire`](Hook::fire) once for every written entry whose
/// level appears in [`levels`](Hook::levels). A returned error is reported on
/// stderr and never retried. Implementations may filter further inside
/// `fire`.
///
/// Hooks run while the logger's lock is held, and that lock is not
/// reentrant. From inside `fire`, calling any method of the same logger that
/// takes the lock deadlocks: logging, `level`, `set_level`, `add_hook`,
/// `remove_hook`, `hook_count` and its `Debug` output. Derived loggers have
/// their own lock.
pub trait Hook: Send + Sync {
    fn fire(&self, entry: &Entry) -> Result<()>;

    fn levels(&self) -> &[LogLevel];

    /// Name used in diagnostics
    fn name(&self) -> &str {
        "hook"
    }

    fn subscribes_to(&self, level: LogLevel) -> bool {
        self.levels().contains(&level)
    }
}
