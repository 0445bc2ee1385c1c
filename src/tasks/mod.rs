//! Background tasks module
//!
//! This module contains the tasks that run alongside user actions: the
//! one-second countdown schedule, detached log submission and the one-shot
//! exercise details fetch.

pub mod countdown_timer;
pub mod exercise_loader;
pub mod log_recorder;

// Re-export main functions
pub use countdown_timer::{countdown_task, TICK_PERIOD};
pub use exercise_loader::load_exercise_task;
pub use log_recorder::LogRecorder;
