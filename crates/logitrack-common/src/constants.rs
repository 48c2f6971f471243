//! System-wide constants and defaults.

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "LOGITRACK_CONFIG";

/// Utilization figure shown on the dashboard when none is configured.
///
/// This is a display value, not derived from the catalog.
pub const DEFAULT_UTILIZATION_PERCENT: u8 = 78;

/// Number of requests shown in the dashboard's "recent requests" panel.
pub const DEFAULT_RECENT_REQUESTS: usize = 3;

/// Default TUI refresh interval in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Number of weeks shown by the slot-planning calendar.
pub const CALENDAR_WEEKS: usize = 5;

/// Number of day cells in the slot-planning calendar grid.
pub const CALENDAR_CELLS: usize = CALENDAR_WEEKS * 7;
