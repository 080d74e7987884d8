//! Logger metrics for observability
//!
//! Counters for the emission path: entries written, entries filtered out by
//! level, and the three best-effort failure kinds (serialization, sink write,
//! hook).

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use hooklog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_written();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.entries_written(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries written to the sink without error
    entries_written: AtomicU64,

    /// Events created below the minimum level
    entries_suppressed: AtomicU64,

    /// Entries abandoned because they could not be serialized
    serialization_failures: AtomicU64,

    /// Sink writes that returned an error
    write_failures: AtomicU64,

    /// Calls to `Hook::fire`
    hook_invocations: AtomicU64,

    /// Hook calls that returned an error or panicked
    hook_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            entries_written: AtomicU64::new(0),
            entries_suppressed: AtomicU64::new(0),
            serialization_failures: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            hook_invocations: AtomicU64::new(0),
            hook_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn entries_written(&self) -> u64 {
        self.entries_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn entries_suppressed(&self) -> u64 {
        self.entries_suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn serialization_failures(&self) -> u64 {
        self.serialization_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn hook_invocations(&self) -> u64 {
        self.hook_invocations.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn hook_failures(&self) -> u64 {
        self.hook_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.entries_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.entries_suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_serialization_failure(&self) -> u64 {
        self.serialization_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_hook_invocation(&self) -> u64 {
        self.hook_invocations.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_hook_failure(&self) -> u64 {
        self.hook_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of emission attempts that failed before or at the sink, as a
    /// percentage (0.0 - 100.0).
    ///
    /// Returns 0.0 if nothing has been emitted.
    pub fn failure_rate(&self) -> f64 {
        let failed = (self.serialization_failures() + self.write_failures()) as f64;
        let total = self.entries_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.entries_written.store(0, Ordering::Relaxed);
        self.entries_suppressed.store(0, Ordering::Relaxed);
        self.serialization_failures.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.hook_invocations.store(0, Ordering::Relaxed);
        self.hook_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            entries_written: AtomicU64::new(self.entries_written()),
            entries_suppressed: AtomicU64::new(self.entries_suppressed()),
            serialization_failures: AtomicU64::new(self.serialization_failures()),
            write_failures: AtomicU64::new(self.write_failures()),
            hook_invocations: AtomicU64::new(self.hook_invocations()),
            hook_failures: AtomicU64::new(self.hook_failures()),
        }
    }
}
