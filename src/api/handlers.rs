//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{extract::State, response::Json};
use tracing::{info, warn};

use crate::{
    state::{AppState, ExerciseView, TimerConfig},
    utils::format_clock,
};
use super::responses::{
    ApiError, ApiResponse, ConfigureRequest, HealthResponse, StatusResponse,
};

/// Handle GET /exercise - Exercise details, or a loading placeholder
pub async fn exercise_handler(State(state): State<Arc<AppState>>) -> Json<ExerciseView> {
    Json(state.exercise_view())
}

/// Handle GET /timer - Current timer status and options
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let timer = state.snapshot();
    let (last_action, last_action_time) = match state.get_last_action() {
        Some((action, time)) => (Some(action), Some(time)),
        None => (None, None),
    };

    Json(StatusResponse {
        timer,
        clock: format_clock(timer.remaining_seconds),
        duration_options: StatusResponse::duration_options(timer.duration_seconds),
        repetition_options: StatusResponse::repetition_options(),
        user_id: state.session.user_id.clone(),
        exercise_id: state.session.exercise_id.clone(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle POST /timer/configure - Select duration and repetition target
pub async fn configure_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConfigureRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    let config = TimerConfig::new(request.duration_seconds, request.repetitions)
        .inspect_err(|e| warn!("Rejected timer options: {}", e))?;

    let timer = state
        .configure(config)
        .inspect_err(|e| warn!("Configure rejected: {}", e))?;

    Ok(Json(ApiResponse::new(
        format!(
            "Timer set to {} for {} reps",
            format_clock(config.duration_seconds()),
            config.repetitions()
        ),
        timer,
    )))
}

/// Handle POST /timer/start - Start or resume the countdown
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, ApiError> {
    let timer = state
        .start()
        .inspect_err(|e| warn!("Start rejected: {}", e))?;

    info!("Start endpoint called - timer running");
    Ok(Json(ApiResponse::new("Timer started", timer)))
}

/// Handle POST /timer/stop - Pause the countdown
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, ApiError> {
    let timer = state
        .stop()
        .inspect_err(|e| warn!("Stop rejected: {}", e))?;

    info!("Stop endpoint called - timer paused");
    Ok(Json(ApiResponse::new("Timer paused", timer)))
}

/// Handle POST /timer/reset - Restore the full duration
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let timer = state.reset();
    info!("Reset endpoint called");
    Json(ApiResponse::new("Timer reset", timer))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
