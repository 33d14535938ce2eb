//! Countdown timer core
//!
//! The state machine, its tick source and the collaborator traits it
//! renders through. Nothing in here knows about HTTP.

pub mod controller;
pub mod format;
pub mod presenter;
pub mod scheduler;
pub mod session;

// Re-export main types
pub use controller::TimerController;
pub use format::{progress, TimeParts};
pub use presenter::{DurationSource, Presenter};
pub use scheduler::{IntervalScheduler, ScheduleHandle, TickScheduler, TICK_PERIOD};
pub use session::{Session, TimerSnapshot, TimerStatus};
