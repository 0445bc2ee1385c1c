//! API request and response structures

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    errors::TimerError,
    state::{TimerPhase, TimerSnapshot, DURATION_OPTIONS, REPETITION_OPTIONS},
    utils::format_clock,
};

/// Body of POST /timer/configure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigureRequest {
    pub duration_seconds: u32,
    pub repetitions: u32,
}

/// API response structure for timer actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: TimerPhase,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub clock: String,
    pub timer: TimerSnapshot,
}

impl ApiResponse {
    pub fn new(message: impl Into<String>, timer: TimerSnapshot) -> Self {
        Self {
            status: timer.phase,
            message: message.into(),
            timestamp: Utc::now(),
            clock: format_clock(timer.remaining_seconds),
            timer,
        }
    }
}

/// Selectable duration with its display label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationOption {
    pub seconds: u32,
    pub label: String,
    pub selected: bool,
}

/// Full timer status with option sets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerSnapshot,
    pub clock: String,
    pub duration_options: Vec<DurationOption>,
    pub repetition_options: Vec<u32>,
    pub user_id: String,
    pub exercise_id: String,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

impl StatusResponse {
    pub fn duration_options(selected: u32) -> Vec<DurationOption> {
        DURATION_OPTIONS
            .iter()
            .map(|&seconds| DurationOption {
                seconds,
                label: format_clock(seconds),
                selected: seconds == selected,
            })
            .collect()
    }

    pub fn repetition_options() -> Vec<u32> {
        REPETITION_OPTIONS.to_vec()
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Error body returned for rejected actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Rejected timer action rendered as an HTTP error
#[derive(Debug)]
pub struct ApiError(pub TimerError);

impl From<TimerError> for ApiError {
    fn from(error: TimerError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            TimerError::InvalidDuration(_) | TimerError::InvalidRepetitions(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            TimerError::AlreadyRunning
            | TimerError::NotRunning(_)
            | TimerError::Busy
            | TimerError::NothingToRun => StatusCode::CONFLICT,
        };

        let body = ErrorResponse {
            status: "error".to_string(),
            message: self.0.to_string(),
            timestamp: Utc::now(),
        };
        (status, Json(body)).into_response()
    }
}
