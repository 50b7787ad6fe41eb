//! Detector configuration.

use std::time::Duration;

/// Default quiet window after the last resize notification (in milliseconds).
///
/// Browsers fire resize in rapid bursts during rotation; 200ms is long
/// enough for the burst to settle.
pub const DEFAULT_QUIET_WINDOW_MS: u64 = 200;

/// Configuration for [`ScreenDetector`](crate::detector::ScreenDetector).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Quiet period that must elapse after the last resize notification
    /// before screen state is recomputed.
    pub quiet_window: Duration,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            quiet_window: Duration::from_millis(DEFAULT_QUIET_WINDOW_MS),
        }
    }
}

impl DetectorConfig {
    /// Create a configuration with the given quiet window.
    pub fn new(quiet_window: Duration) -> Self {
        Self { quiet_window }
    }

    /// Set the quiet window.
    pub fn with_quiet_window(mut self, quiet_window: Duration) -> Self {
        self.quiet_window = quiet_window;
        self
    }
}
