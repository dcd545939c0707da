//! Logger metrics for observability
//!
//! Emission never reports errors to the caller, so these counters are the
//! only place where failed writes show up. They also tally the access
//! outcomes seen on the error stream.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use proxy_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_dropped();
/// metrics.record_logged();
/// metrics.record_denied();
///
/// assert_eq!(metrics.dropped_count(), 1);
/// assert_eq!(metrics.total_logged(), 1);
/// assert_eq!(metrics.denied_outcomes(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records that reached the sink but could not be written, or arrived
    /// after shutdown
    dropped_count: AtomicU64,

    /// Records written to the sink
    total_logged: AtomicU64,

    /// Records discarded because their level was below the minimum
    filtered_count: AtomicU64,

    /// Error-stream lines classified as success
    success_outcomes: AtomicU64,

    /// Error-stream lines classified as denied
    denied_outcomes: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            dropped_count: AtomicU64::new(0),
            total_logged: AtomicU64::new(0),
            filtered_count: AtomicU64::new(0),
            success_outcomes: AtomicU64::new(0),
            denied_outcomes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn success_outcomes(&self) -> u64 {
        self.success_outcomes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn denied_outcomes(&self) -> u64 {
        self.denied_outcomes.load(Ordering::Relaxed)
    }

    /// Record a dropped log, returning the previous count
    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a successfully written entry
    #[inline]
    pub fn record_logged(&self) -> u64 {
        self.total_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_success(&self) -> u64 {
        self.success_outcomes.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_denied(&self) -> u64 {
        self.denied_outcomes.fetch_add(1, Ordering::Relaxed)
    }

    /// Get drop rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has reached the sink yet.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let total = self.total_logged() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
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
            dropped_count: AtomicU64::new(self.dropped_count()),
            total_logged: AtomicU64::new(self.total_logged()),
            filtered_count: AtomicU64::new(self.filtered_count()),
            success_outcomes: AtomicU64::new(self.success_outcomes()),
            denied_outcomes: AtomicU64::new(self.denied_outcomes()),
        }
    }
}
