//! Focus Timer - A single-session Pomodoro countdown
//!
//! This library provides the countdown state machine, its tokio tick
//! source and a small HTTP control surface for starting, pausing,
//! resuming and cancelling one focus session at a time.

pub mod config;
pub mod timer;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
pub use api::create_router;
pub use tasks::spawn_timer;
pub use timer::{TimerController, TimerStatus};
pub use utils::signals::shutdown_signal;
