//! State management module
//!
//! This module contains the countdown state machine, its progress
//! presentation, and the shared application state wrapping them.

pub mod app_state;
pub mod controller;
pub mod progress;
pub mod timer_config;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppState, ExerciseView, SessionContext, TimerEvent, TimerSnapshot};
pub use controller::{RunId, TickOutcome, TimerController};
pub use progress::{progress_fraction, AnimationFrame, ProgressAnimation};
pub use timer_config::{TimerConfig, DURATION_OPTIONS, REPETITION_OPTIONS};
pub use timer_state::{TimerPhase, TimerState};
