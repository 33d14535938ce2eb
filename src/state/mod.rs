//! State management module
//!
//! This module contains the rendered view state and the shared state
//! the HTTP layer works through.

pub mod app_state;
pub mod view_state;

// Re-export main types
pub use app_state::AppState;
pub use view_state::{ViewState, WatchPresenter};
