//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{state::ViewState, timer::TimerSnapshot};

/// API response structure for the intent endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerSnapshot,
    pub view: ViewState,
}

impl ApiResponse {
    /// Create a new API response; `status` mirrors the timer status
    pub fn new(message: String, timer: TimerSnapshot, view: ViewState) -> Self {
        Self {
            status: timer.status.as_str().to_string(),
            message,
            timestamp: Utc::now(),
            timer,
            view,
        }
    }
}

/// Body of `PUT /duration`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationRequest {
    pub seconds: u64,
}

/// Full status with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerSnapshot,
    pub view: ViewState,
    pub selected_duration_seconds: u64,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
