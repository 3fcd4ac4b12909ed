// Configuration Management Module
// Handles uptime.toml loading and defaults

use serde::{Deserialize, Serialize};
use std::path::Path;
use anyhow::{Result, Context};
use tracing::{info, warn};

/// Which time source backs a tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockSource {
    /// System wall clock; start times line up with calendar time
    Wall,

    /// Instant-based clock, immune to wall-clock adjustments
    Monotonic,
}

/// Uptime tracker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_clock_source")]
    pub clock_source: ClockSource,

    #[serde(default = "default_true")]
    pub warn_on_reinit: bool,
}

// Default value functions
fn default_clock_source() -> ClockSource { ClockSource::Wall }
fn default_true() -> bool { true }

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            clock_source: default_clock_source(),
            warn_on_reinit: default_true(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from file or use defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            info!("Loading uptime configuration from {}", path.display());
            let contents = std::fs::read_to_string(path)
                .context("Failed to read uptime configuration file")?;

            let config: TrackerConfig = toml::from_str(&contents)
                .context("Failed to parse uptime configuration file")?;

            Ok(config)
        } else {
            warn!("Uptime configuration file not found, using defaults");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.clock_source, ClockSource::Wall);
        assert!(config.warn_on_reinit);
    }

    #[test]
    fn test_parse_full_config() {
        let config: TrackerConfig = toml::from_str(
            "clock_source = \"monotonic\"\nwarn_on_reinit = false\n",
        )
        .unwrap();

        assert_eq!(config.clock_source, ClockSource::Monotonic);
        assert!(!config.warn_on_reinit);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: TrackerConfig = toml::from_str("").unwrap();
        assert_eq!(config.clock_source, ClockSource::Wall);
        assert!(config.warn_on_reinit);
    }

    #[test]
    fn test_unknown_clock_source_is_rejected() {
        let result = toml::from_str::<TrackerConfig>("clock_source = \"sundial\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = TrackerConfig::load("/nonexistent/uptime.toml").unwrap();
        assert_eq!(config.clock_source, ClockSource::Wall);
    }
}
