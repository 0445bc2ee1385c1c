//! Error types shared across the timer and its collaborators

use thiserror::Error;

use crate::state::TimerPhase;

/// Rejected timer transitions and invalid option selections
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("{0} seconds is not one of the available durations")]
    InvalidDuration(u32),

    #[error("{0} is not one of the available repetition targets")]
    InvalidRepetitions(u32),

    #[error("timer is already running")]
    AlreadyRunning,

    #[error("timer is not running (currently {0})")]
    NotRunning(TimerPhase),

    #[error("cannot change the timer while it is running; stop or reset first")]
    Busy,

    #[error("no time left to count down; reset the timer first")]
    NothingToRun,
}

/// Failures reported by the remote storage collaborator
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("exercise {0} not found")]
    NotFound(String),

    #[error("request to storage backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("storage backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}
