//! Global configuration model for LogiTrack.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_RECENT_REQUESTS, DEFAULT_TICK_RATE_MS, DEFAULT_UTILIZATION_PERCENT};
use crate::error::{LogitrackError, Result};

/// Root configuration for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogitrackConfig {
    /// JSON catalog to load. The built-in sample catalog is used when unset.
    pub catalog_file: Option<PathBuf>,
    /// Utilization figure displayed on the dashboard (0-100).
    pub utilization_percent: u8,
    /// Number of requests in the dashboard's recent-requests panel.
    pub recent_requests: usize,
    /// TUI refresh interval in milliseconds.
    pub tick_rate_ms: u64,
    /// First day (a Monday) of the planning calendar. Defaults to the
    /// Monday of the current week.
    pub calendar_start: Option<NaiveDate>,
}

impl Default for LogitrackConfig {
    fn default() -> Self {
        Self {
            catalog_file: None,
            utilization_percent: DEFAULT_UTILIZATION_PERCENT,
            recent_requests: DEFAULT_RECENT_REQUESTS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            calendar_start: None,
        }
    }
}

impl LogitrackConfig {
    /// Loads and validates a JSON configuration file.
    ///
    /// Fields absent from the file take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds out-of-range values.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading configuration");
        let raw = std::fs::read_to_string(path).map_err(|e| LogitrackError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`LogitrackError::Config`] for the first out-of-range field.
    pub fn validate(&self) -> Result<()> {
        if self.utilization_percent > 100 {
            return Err(LogitrackError::Config {
                message: format!(
                    "utilization_percent must be within 0-100, got {}",
                    self.utilization_percent
                ),
            });
        }
        if self.tick_rate_ms == 0 {
            return Err(LogitrackError::Config {
                message: "tick_rate_ms must be positive".into(),
            });
        }
        Ok(())
    }
}
