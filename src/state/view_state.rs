//! Rendered screen state and the presenter that maintains it

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{
    services::CuePlayer,
    timer::{Presenter, TimeParts},
};

/// Everything a client needs to draw the timer screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Toggle control shows "Pause" when selected, "Start" otherwise
    pub toggle_selected: bool,
    pub toggle_title: String,
    pub duration_picker_visible: bool,
    /// Label and progress bar visibility
    pub countdown_visible: bool,
    pub cancel_enabled: bool,
    /// Remaining time as `HH:MM:SS`
    pub label: String,
    pub progress: f64,
    /// Completion cues played since startup
    pub completion_cues: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            toggle_selected: false,
            toggle_title: toggle_title(false).to_string(),
            duration_picker_visible: true,
            countdown_visible: false,
            cancel_enabled: false,
            label: TimeParts::from_seconds(0).to_string(),
            progress: 0.0,
            completion_cues: 0,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

fn toggle_title(selected: bool) -> &'static str {
    if selected {
        "Pause"
    } else {
        "Start"
    }
}

/// Presenter that publishes every change on a watch channel
#[derive(Debug)]
pub struct WatchPresenter {
    view: ViewState,
    view_tx: watch::Sender<ViewState>,
    cue: CuePlayer,
}

impl WatchPresenter {
    pub fn new(cue: CuePlayer) -> (Self, watch::Receiver<ViewState>) {
        let (view_tx, view_rx) = watch::channel(ViewState::new());
        let presenter = Self {
            view: ViewState::new(),
            view_tx,
            cue,
        };
        (presenter, view_rx)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    fn update<F>(&mut self, updater: F)
    where
        F: FnOnce(&mut ViewState),
    {
        updater(&mut self.view);
        // send_replace keeps working with no live receivers
        self.view_tx.send_replace(self.view.clone());
    }
}

impl Presenter for WatchPresenter {
    fn set_countdown_visible(&mut self, visible: bool) {
        self.update(|view| view.countdown_visible = visible);
    }

    fn set_duration_picker_visible(&mut self, visible: bool) {
        self.update(|view| view.duration_picker_visible = visible);
    }

    fn set_cancel_enabled(&mut self, enabled: bool) {
        self.update(|view| view.cancel_enabled = enabled);
    }

    fn set_toggle_selected(&mut self, selected: bool) {
        self.update(|view| {
            view.toggle_selected = selected;
            view.toggle_title = toggle_title(selected).to_string();
        });
    }

    fn render_time(&mut self, time: TimeParts) {
        debug!("Rendering {}", time);
        self.update(|view| view.label = time.to_string());
    }

    fn render_progress(&mut self, fraction: f64) {
        self.update(|view| view.progress = fraction.clamp(0.0, 1.0));
    }

    fn play_completion_cue(&mut self) {
        self.update(|view| view.completion_cues += 1);
        info!("Time's up, playing completion cue");

        if self.cue.is_silent() {
            return;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let cue = self.cue.clone();
                runtime.spawn(async move {
                    if let Err(e) = cue.play().await {
                        warn!("Failed to play completion cue: {}", e);
                    }
                });
            }
            Err(e) => warn!("No runtime to play completion cue on: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_view_shows_picker_only() {
        let view = ViewState::new();
        assert!(view.duration_picker_visible);
        assert!(!view.countdown_visible);
        assert!(!view.cancel_enabled);
        assert_eq!(view.toggle_title, "Start");
        assert_eq!(view.label, "00:00:00");
    }

    #[test]
    fn changes_are_published() {
        let (mut presenter, rx) = WatchPresenter::new(CuePlayer::Silent);

        presenter.set_toggle_selected(true);
        presenter.render_time(TimeParts::from_seconds(125));
        presenter.render_progress(0.5);

        let view = rx.borrow().clone();
        assert_eq!(view, *presenter.view());
        assert!(view.toggle_selected);
        assert_eq!(view.toggle_title, "Pause");
        assert_eq!(view.label, "00:02:05");
        assert_eq!(view.progress, 0.5);
    }

    #[test]
    fn progress_is_clamped() {
        let (mut presenter, _rx) = WatchPresenter::new(CuePlayer::Silent);
        presenter.render_progress(1.5);
        assert_eq!(presenter.view().progress, 1.0);
    }

    #[test]
    fn completion_cue_is_counted_without_a_runtime() {
        let (mut presenter, rx) = WatchPresenter::new(CuePlayer::Bell);
        presenter.play_completion_cue();
        presenter.play_completion_cue();
        assert_eq!(rx.borrow().completion_cues, 2);
    }

    #[test]
    fn publishing_survives_dropped_receivers() {
        let (mut presenter, rx) = WatchPresenter::new(CuePlayer::Silent);
        drop(rx);
        presenter.set_cancel_enabled(true);
        assert!(presenter.view().cancel_enabled);
    }
}
