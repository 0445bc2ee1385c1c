//! Rep Timer - countdown timer widget for timed exercise sets
//!
//! This library provides the countdown state machine, its progress
//! presentation and the best-effort exercise log submission, together with
//! the storage and notification collaborators and an HTTP surface.

pub mod api;
pub mod config;
pub mod errors;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use errors::{StoreError, TimerError};
pub use state::{AppState, SessionContext, TimerConfig, TimerPhase, TimerSnapshot};
pub use utils::signals::shutdown_signal;
