// Process uptime tracking
// One authoritative start timestamp per tracker, snapshots on demand

pub mod snapshot;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::clock::{Clock, MonotonicClock, SystemClock};
use crate::config::{ClockSource, TrackerConfig};

pub use snapshot::UptimeSnapshot;

/// Start-timestamp value marking the uninitialized state
const UNSET: u64 = 0;

/// Tracks when the process started and answers uptime queries
///
/// One instance per process, created at the composition root and shared
/// (by reference or `Arc`) with every consumer that reports uptime.
/// `initialize()` and `shutdown()` belong to the host lifecycle;
/// consumers only ever call `snapshot()`.
pub struct UptimeTracker {
    /// Recorded start time in microseconds since the clock epoch, 0 = unset
    start_micros: AtomicU64,

    /// Time source for both the start timestamp and every elapsed read
    clock: Arc<dyn Clock>,

    /// Warn when initialize() overwrites an existing start time
    warn_on_reinit: bool,
}

impl UptimeTracker {
    /// Create a tracker backed by the system wall clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a tracker backed by an explicit clock source
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            start_micros: AtomicU64::new(UNSET),
            clock,
            warn_on_reinit: true,
        }
    }

    /// Create a tracker according to configuration
    pub fn from_config(config: &TrackerConfig) -> Self {
        let clock: Arc<dyn Clock> = match config.clock_source {
            ClockSource::Wall => Arc::new(SystemClock),
            ClockSource::Monotonic => Arc::new(MonotonicClock::new()),
        };

        Self {
            start_micros: AtomicU64::new(UNSET),
            clock,
            warn_on_reinit: config.warn_on_reinit,
        }
    }

    /// Record the current time as the process start time
    ///
    /// Call once, as early as possible in startup, before the first
    /// snapshot is requested. A repeated call overwrites the previous
    /// value (last write wins).
    pub fn initialize(&self) {
        let now = self.clock.now_micros();
        let previous = self.start_micros.swap(now, Ordering::Relaxed);

        if previous == UNSET {
            debug!(start_micros = now, "process start time recorded");
        } else if self.warn_on_reinit {
            warn!(
                previous_start_micros = previous,
                start_micros = now,
                "process start time already recorded, overwriting"
            );
        }
    }

    /// Clear the recorded start time, returning to the uninitialized state
    pub fn shutdown(&self) {
        self.start_micros.store(UNSET, Ordering::Relaxed);
        debug!("process start time cleared");
    }

    /// Whether a start time is currently recorded
    pub fn is_running(&self) -> bool {
        self.start_micros.load(Ordering::Relaxed) != UNSET
    }

    /// Take a point-in-time snapshot of the start time and elapsed uptime
    ///
    /// Before `initialize()` has run, the unset start time is treated as
    /// equal to "now": the snapshot reports zero uptime rather than a
    /// negative or undefined one.
    pub fn snapshot(&self) -> UptimeSnapshot {
        let now = self.clock.now_micros();
        let start = match self.start_micros.load(Ordering::Relaxed) {
            UNSET => now,
            micros => micros,
        };

        UptimeSnapshot {
            start_time: Duration::from_micros(start),
            // Clamped so a stepped-back wall clock cannot yield negative uptime
            uptime: Duration::from_micros(now.saturating_sub(start)),
        }
    }
}

impl Default for UptimeTracker {
    fn default() -> Self {
        Self::new()
    }
}
