//! Shared application state handed to the HTTP handlers

use std::{sync::Mutex, time::Instant};

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::info;

use super::ViewState;
use crate::{
    config::MAX_DURATION_SECONDS,
    tasks::{TimerCommand, TimerLink},
    timer::{TimeParts, TimerSnapshot},
};

/// Front door to the timer loop plus server metadata
#[derive(Debug)]
pub struct AppState {
    commands: mpsc::Sender<TimerCommand>,
    duration_tx: watch::Sender<u64>,
    view_rx: watch::Receiver<ViewState>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<String>>,
    last_action_time: Mutex<Option<DateTime<Utc>>>,
}

impl AppState {
    pub fn new(link: TimerLink, port: u16, host: String) -> Self {
        Self {
            commands: link.commands,
            duration_tx: link.duration_tx,
            view_rx: link.view_rx,
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
        }
    }

    /// Start, pause or resume the countdown
    pub async fn toggle(&self) -> Result<TimerSnapshot, String> {
        let snapshot = self.request(TimerCommand::Toggle).await?;
        self.record_action("toggle");
        Ok(snapshot)
    }

    /// Cancel the countdown, if any
    pub async fn cancel(&self) -> Result<TimerSnapshot, String> {
        let snapshot = self.request(TimerCommand::Cancel).await?;
        self.record_action("cancel");
        Ok(snapshot)
    }

    pub async fn snapshot(&self) -> Result<TimerSnapshot, String> {
        self.request(TimerCommand::Snapshot).await
    }

    /// Set the picker value used by the next start
    pub fn set_duration(&self, seconds: u64) -> Result<u64, String> {
        if seconds > MAX_DURATION_SECONDS {
            return Err(format!(
                "Duration {}s exceeds the maximum of {}s",
                seconds, MAX_DURATION_SECONDS
            ));
        }

        self.duration_tx.send_replace(seconds);
        self.record_action("duration");
        info!("Selected duration set to {}", TimeParts::from_seconds(seconds));
        Ok(seconds)
    }

    pub fn selected_duration(&self) -> u64 {
        *self.duration_tx.borrow()
    }

    /// Latest rendered screen
    pub fn view(&self) -> ViewState {
        self.view_rx.borrow().clone()
    }

    async fn request(
        &self,
        make: fn(oneshot::Sender<TimerSnapshot>) -> TimerCommand,
    ) -> Result<TimerSnapshot, String> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(make(reply_tx))
            .await
            .map_err(|e| format!("Failed to reach timer loop: {}", e))?;
        reply_rx
            .await
            .map_err(|e| format!("Timer loop dropped the reply: {}", e))
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
