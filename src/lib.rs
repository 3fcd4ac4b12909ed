//! Process uptime tracking for health checks and status reporting.
//!
//! One `UptimeTracker` per process, created at the composition root:
//! the host records the start time with `initialize()`, hands the tracker
//! to every subsystem that reports uptime, and each of them takes
//! independent, immutable `UptimeSnapshot` values on demand.
//!
//! The tracker never formats or transmits anything - serializing a
//! snapshot into a health response or status report is the consumer's job.

pub mod clock;
pub mod config;
pub mod observability;
pub mod tracker;

pub use clock::{Clock, ManualClock, MonotonicClock, SystemClock};
pub use config::{ClockSource, TrackerConfig};
pub use tracker::{UptimeSnapshot, UptimeTracker};
