//! Countdown state machine

use tracing::{debug, info};

use super::{
    format::{progress, TimeParts},
    presenter::{DurationSource, Presenter},
    scheduler::{TickScheduler, TICK_PERIOD},
    session::{Session, TimerSnapshot, TimerStatus},
};

/// Owns the countdown session and its tick schedule.
///
/// Driven by two user intents, [`toggle`](Self::toggle) and
/// [`cancel`](Self::cancel), plus [`tick`](Self::tick) from the schedule.
/// The schedule is released when the countdown ends and when the
/// controller is dropped.
pub struct TimerController<S, P, D>
where
    S: TickScheduler,
    P: Presenter,
    D: DurationSource,
{
    session: Session<S::Handle>,
    scheduler: S,
    presenter: P,
    durations: D,
}

impl<S, P, D> TimerController<S, P, D>
where
    S: TickScheduler,
    P: Presenter,
    D: DurationSource,
{
    pub fn new(scheduler: S, presenter: P, durations: D) -> Self {
        Self {
            session: Session::Idle,
            scheduler,
            presenter,
            durations,
        }
    }

    pub fn status(&self) -> TimerStatus {
        self.session.status()
    }

    pub fn remaining(&self) -> Option<u64> {
        self.session.remaining()
    }

    pub fn total(&self) -> Option<u64> {
        self.session.total()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot::from(&self.session)
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Access for the event loop that waits on the schedule
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Start, pause or resume depending on the current status
    pub fn toggle(&mut self) {
        self.session = match std::mem::take(&mut self.session) {
            Session::Idle => self.start(),
            Session::Running { remaining, total, handle } => {
                self.scheduler.suspend(&handle);
                self.presenter.set_toggle_selected(false);
                info!("Countdown paused with {}s remaining", remaining);
                Session::Paused { remaining, total, handle }
            }
            Session::Paused { remaining, total, handle } => {
                self.scheduler.resume(&handle);
                self.presenter.set_toggle_selected(true);
                info!("Countdown resumed with {}s remaining", remaining);
                Session::Running { remaining, total, handle }
            }
        };
    }

    /// Abandon the countdown. Does nothing when idle.
    pub fn cancel(&mut self) {
        match self.session.status() {
            TimerStatus::Idle => debug!("Cancel ignored, no countdown active"),
            TimerStatus::Running | TimerStatus::Paused => {
                let remaining = self.session.remaining().unwrap_or_default();
                self.stop();
                info!("Countdown cancelled with {}s remaining", remaining);
            }
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Ticks outside a running countdown are dropped.
    pub fn tick(&mut self) {
        let (remaining, total) = match &mut self.session {
            Session::Running { remaining, total, .. } => {
                *remaining = remaining.saturating_sub(1);
                (*remaining, *total)
            }
            other => {
                debug!("Tick dropped while {}", other.status().as_str());
                return;
            }
        };

        let time = TimeParts::from_seconds(remaining);
        debug!("Tick: {} remaining", time);
        self.presenter.render_time(time);
        self.presenter.render_progress(progress(remaining, total));

        if remaining == 0 {
            self.stop();
            info!("Countdown of {}s complete", total);
            self.presenter.play_completion_cue();
        }
    }

    /// Release any live schedule without touching the presenter
    pub fn teardown(&mut self) {
        if let Some(handle) = std::mem::take(&mut self.session).into_handle() {
            self.scheduler.cancel(handle);
            debug!("Timer controller torn down, schedule released");
        }
    }

    fn start(&mut self) -> Session<S::Handle> {
        let total = self.durations.selected_seconds();

        self.presenter.set_countdown_visible(true);
        self.presenter.set_duration_picker_visible(false);
        self.presenter.set_toggle_selected(true);
        self.presenter.set_cancel_enabled(true);

        let handle = self.scheduler.create(TICK_PERIOD);
        info!("Countdown started for {}", TimeParts::from_seconds(total));
        Session::Running { remaining: total, total, handle }
    }

    fn stop(&mut self) {
        if let Some(handle) = std::mem::take(&mut self.session).into_handle() {
            self.scheduler.cancel(handle);
        }

        self.presenter.set_countdown_visible(false);
        self.presenter.set_duration_picker_visible(true);
        self.presenter.set_cancel_enabled(false);
        self.presenter.set_toggle_selected(false);
    }
}

impl<S, P, D> Drop for TimerController<S, P, D>
where
    S: TickScheduler,
    P: Presenter,
    D: DurationSource,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
