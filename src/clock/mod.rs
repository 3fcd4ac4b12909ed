// Clock sources for uptime measurement
// A tracker records and compares times from exactly one source to avoid skew

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

/// A time source with sub-second resolution
/// Reports the current time as a duration since the source's fixed epoch
pub trait Clock: Send + Sync {
    /// Current time, measured from this source's epoch
    fn now(&self) -> Duration;

    /// Current time in whole microseconds since the epoch
    fn now_micros(&self) -> u64 {
        self.now().as_micros() as u64
    }
}

/// Wall clock backed by the operating system
/// Epoch is `UNIX_EPOCH`, so recorded start times line up with calendar time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        // A system time before 1970 collapses to the epoch itself
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
    }
}

/// Monotonic clock immune to wall-clock adjustments
/// Epoch is the construction instant, so times from this source are only
/// comparable against the same clock instance
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually stepped clock for tests and simulations
pub struct ManualClock {
    now: Mutex<Duration>,
}

impl ManualClock {
    /// Create a clock frozen at the given time
    pub fn starting_at(now: Duration) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Jump to an absolute time; may move backwards
    pub fn set(&self, now: Duration) {
        *self.now.lock() = now;
    }

    /// Advance the clock by the given amount
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_reads_past_epoch() {
        let clock = SystemClock;
        assert!(clock.now() > Duration::ZERO);
    }

    #[test]
    fn test_monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();

        let first = clock.now();
        let second = clock.now();

        assert!(second >= first);
    }

    #[test]
    fn test_manual_clock_set_and_advance() {
        let clock = ManualClock::starting_at(Duration::from_secs(100));
        assert_eq!(clock.now(), Duration::from_secs(100));

        clock.advance(Duration::from_millis(2500));
        assert_eq!(clock.now(), Duration::from_millis(102_500));

        clock.set(Duration::from_secs(50));
        assert_eq!(clock.now(), Duration::from_secs(50));
    }

    #[test]
    fn test_now_micros_matches_now() {
        let clock = ManualClock::starting_at(Duration::from_micros(1_234_567));
        assert_eq!(clock.now_micros(), 1_234_567);
    }
}
