//! External side effects module
//!
//! Platform bindings the timer fires and forgets, currently the
//! completion cue.

pub mod cue;

// Re-export main types
pub use cue::CuePlayer;
