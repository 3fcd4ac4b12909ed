// Point-in-time uptime snapshot handed to consumers

use std::time::Duration;

use serde::Serialize;

/// Immutable record of the start timestamp and elapsed uptime at one instant
///
/// Each snapshot is an independent value with no tie back to the tracker
/// that produced it; callers may keep, copy, or serialize it freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UptimeSnapshot {
    /// Recorded process start time, measured from the clock epoch
    pub start_time: Duration,

    /// Elapsed time between the start and the moment the snapshot was taken
    pub uptime: Duration,
}

impl UptimeSnapshot {
    /// Start time as fractional seconds since the clock epoch
    pub fn start_time_secs(&self) -> f64 {
        self.start_time.as_secs_f64()
    }

    /// Uptime as fractional seconds
    pub fn uptime_secs(&self) -> f64 {
        self.uptime.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractional_second_accessors() {
        let snap = UptimeSnapshot {
            start_time: Duration::from_millis(1_000_250),
            uptime: Duration::from_micros(5_500_000),
        };

        assert_eq!(snap.start_time_secs(), 1000.25);
        assert_eq!(snap.uptime_secs(), 5.5);
    }

    #[test]
    fn test_snapshots_are_independent_copies() {
        let snap = UptimeSnapshot {
            start_time: Duration::from_secs(10),
            uptime: Duration::from_secs(2),
        };

        let copy = snap;
        assert_eq!(copy, snap);
    }
}
