//! Timer state structure

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle phase of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Idle,
    Running,
    Completed,
}

impl fmt::Display for TimerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Running => "running",
            TimerPhase::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Countdown state for a single widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub remaining_seconds: u32,
    pub phase: TimerPhase,
}

impl TimerState {
    /// Create an idle timer with a full countdown
    pub fn idle(remaining_seconds: u32) -> Self {
        Self {
            remaining_seconds,
            phase: TimerPhase::Idle,
        }
    }

    /// Check if the countdown is actively ticking
    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }
}
