//! Progress presentation derived from timer state

use serde::{Deserialize, Serialize};

use super::{TimerConfig, TimerState};

/// Length of the indicator animation between two ticks
pub const TICK_ANIMATION_MS: u32 = 1000;

/// Fraction of the configured duration that has elapsed, in `[0, 1]`.
///
/// A zero duration is treated as fully elapsed.
pub fn progress_fraction(state: &TimerState, config: &TimerConfig) -> f32 {
    let duration = config.duration_seconds();
    if duration == 0 {
        return 1.0;
    }

    let remaining = state.remaining_seconds.min(duration) as f32;
    (1.0 - remaining / duration as f32).clamp(0.0, 1.0)
}

/// One animated step of the indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationFrame {
    pub from: f32,
    pub to: f32,
    pub duration_ms: u32,
}

/// Tracks the indicator level (1.0 = full, 0.0 = empty) shown to the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressAnimation {
    level: f32,
}

impl ProgressAnimation {
    pub fn new() -> Self {
        Self { level: 1.0 }
    }

    /// Currently displayed level
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Snap back to a full indicator after the duration changes
    pub fn reset_baseline(&mut self) {
        self.level = 1.0;
    }

    /// Move the indicator towards the level implied by the current state
    pub fn advance(&mut self, state: &TimerState, config: &TimerConfig) -> AnimationFrame {
        let from = self.level;
        self.level = 1.0 - progress_fraction(state, config);
        AnimationFrame {
            from,
            to: self.level,
            duration_ms: TICK_ANIMATION_MS,
        }
    }
}

impl Default for ProgressAnimation {
    fn default() -> Self {
        Self::new()
    }
}
