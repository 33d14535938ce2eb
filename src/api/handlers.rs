//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::{
    state::AppState,
    timer::{TimeParts, TimerStatus},
};
use super::responses::{ApiResponse, DurationRequest, HealthResponse, StatusResponse};

/// Handle POST /toggle - Start, pause or resume the countdown
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.toggle().await {
        Ok(timer) => {
            let message = match timer.status {
                TimerStatus::Running => "Countdown running",
                TimerStatus::Paused => "Countdown paused",
                TimerStatus::Idle => "Countdown finished",
            };
            info!("Toggle endpoint called - timer now {}", timer.status.as_str());
            Ok(Json(ApiResponse::new(message.to_string(), timer, state.view())))
        }
        Err(e) => {
            error!("Failed to toggle timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /cancel - Abandon the countdown
pub async fn cancel_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.cancel().await {
        Ok(timer) => {
            info!("Cancel endpoint called");
            Ok(Json(ApiResponse::new(
                "Countdown cancelled".to_string(),
                timer,
                state.view(),
            )))
        }
        Err(e) => {
            error!("Failed to cancel timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle PUT /duration - Set the countdown length used by the next start
pub async fn duration_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DurationRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let seconds = match state.set_duration(request.seconds) {
        Ok(seconds) => seconds,
        Err(e) => {
            warn!("Rejected duration: {}", e);
            return Err(StatusCode::UNPROCESSABLE_ENTITY);
        }
    };

    match state.snapshot().await {
        Ok(timer) => Ok(Json(ApiResponse::new(
            format!("Duration set to {}", TimeParts::from_seconds(seconds)),
            timer,
            state.view(),
        ))),
        Err(e) => {
            error!("Failed to read timer after duration change: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return current timer and screen state
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.snapshot().await {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
        view: state.view(),
        selected_duration_seconds: state.selected_duration(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
