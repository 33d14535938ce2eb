//! Collaborators consumed by the timer controller

use tokio::sync::watch;

use super::format::TimeParts;

/// Rendering sink for controller state changes
pub trait Presenter {
    fn set_countdown_visible(&mut self, visible: bool);
    fn set_duration_picker_visible(&mut self, visible: bool);
    fn set_cancel_enabled(&mut self, enabled: bool);
    fn set_toggle_selected(&mut self, selected: bool);
    fn render_time(&mut self, time: TimeParts);
    /// `fraction` is in `0.0..=1.0`
    fn render_progress(&mut self, fraction: f64);
    /// One-shot audible cue at natural completion
    fn play_completion_cue(&mut self);
}

/// Supplies the countdown length selected by the user, in seconds
pub trait DurationSource {
    fn selected_seconds(&self) -> u64;
}

impl DurationSource for u64 {
    fn selected_seconds(&self) -> u64 {
        *self
    }
}

impl DurationSource for watch::Receiver<u64> {
    fn selected_seconds(&self) -> u64 {
        *self.borrow()
    }
}
