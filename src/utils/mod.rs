//! Utility functions module
//!
//! This module contains process-level helpers such as shutdown signals.

pub mod signals;

// Re-export main functions
pub use signals::shutdown_signal;
