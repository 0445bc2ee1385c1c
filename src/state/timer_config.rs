//! Timer configuration drawn from the fixed option sets

use serde::{Deserialize, Serialize};

use crate::errors::TimerError;

/// Selectable countdown lengths in seconds
pub const DURATION_OPTIONS: [u32; 5] = [30, 60, 90, 120, 180];

/// Selectable repetition targets
pub const REPETITION_OPTIONS: [u32; 6] = [5, 10, 15, 20, 25, 30];

pub const DEFAULT_DURATION_SECONDS: u32 = 60;
pub const DEFAULT_REPETITIONS: u32 = 10;

/// Duration and repetition target for one run.
///
/// Only values from [`DURATION_OPTIONS`] and [`REPETITION_OPTIONS`] can be
/// constructed, so a zero-length countdown never exists. Deserialization
/// goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimerConfig")]
pub struct TimerConfig {
    duration_seconds: u32,
    repetitions: u32,
}

impl TimerConfig {
    /// Build a config, rejecting values outside the option sets
    pub fn new(duration_seconds: u32, repetitions: u32) -> Result<Self, TimerError> {
        if !DURATION_OPTIONS.contains(&duration_seconds) {
            return Err(TimerError::InvalidDuration(duration_seconds));
        }
        if !REPETITION_OPTIONS.contains(&repetitions) {
            return Err(TimerError::InvalidRepetitions(repetitions));
        }

        Ok(Self {
            duration_seconds,
            repetitions,
        })
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }
}

/// Unchecked wire form of [`TimerConfig`]
#[derive(Deserialize)]
struct RawTimerConfig {
    duration_seconds: u32,
    repetitions: u32,
}

impl TryFrom<RawTimerConfig> for TimerConfig {
    type Error = TimerError;

    fn try_from(raw: RawTimerConfig) -> Result<Self, Self::Error> {
        Self::new(raw.duration_seconds, raw.repetitions)
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            duration_seconds: DEFAULT_DURATION_SECONDS,
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}
