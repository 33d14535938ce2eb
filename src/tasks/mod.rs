//! Background tasks module
//!
//! This module contains the timer loop that runs alongside the HTTP server.

pub mod timer_loop;

// Re-export main items
pub use timer_loop::{spawn_timer, timer_loop_task, FocusTimer, TimerCommand, TimerLink};
