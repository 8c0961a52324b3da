//! Timer state structure and formatting

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Whether a timer is counting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// Snapshot of a timer, published to subscribers after every change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerState {
    pub seconds: u64,
    pub run_state: RunState,
    /// `seconds` rendered as `MM:SS`
    pub display: String,
    /// When the current run started
    pub started_at: Option<DateTime<Utc>>,
}

impl TimerState {
    /// Create a stopped timer state at zero
    pub fn new() -> Self {
        Self {
            seconds: 0,
            run_state: RunState::Stopped,
            display: format_elapsed(0),
            started_at: None,
        }
    }

    /// Check if the timer is running
    pub fn is_active(&self) -> bool {
        self.run_state == RunState::Running
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render seconds as `MM:SS`. Minutes are not capped, so an hour is `60:00`.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(59), "00:59");
        assert_eq!(format_elapsed(60), "01:00");
        assert_eq!(format_elapsed(3661), "61:01");
    }

    #[test]
    fn minutes_grow_past_two_digits() {
        assert_eq!(format_elapsed(3600), "60:00");
        assert_eq!(format_elapsed(6000), "100:00");
    }

    #[test]
    fn serializes_run_state_lowercase() {
        let state = TimerState::new();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["run_state"], "stopped");
        assert_eq!(json["display"], "00:00");
        assert!(json["started_at"].is_null());
    }
}
