//! Timer event loop background task

use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
};
use tracing::{debug, info};

use crate::{
    services::CuePlayer,
    state::{ViewState, WatchPresenter},
    timer::{IntervalScheduler, TimerController, TimerSnapshot},
};

/// Controller wired to its production collaborators
pub type FocusTimer = TimerController<IntervalScheduler, WatchPresenter, watch::Receiver<u64>>;

/// User intents forwarded to the timer loop.
///
/// Each carries a reply slot for the resulting snapshot.
#[derive(Debug)]
pub enum TimerCommand {
    Toggle(oneshot::Sender<TimerSnapshot>),
    Cancel(oneshot::Sender<TimerSnapshot>),
    Snapshot(oneshot::Sender<TimerSnapshot>),
}

/// Endpoints the API layer uses to talk to a running timer loop
#[derive(Debug)]
pub struct TimerLink {
    pub commands: mpsc::Sender<TimerCommand>,
    pub duration_tx: watch::Sender<u64>,
    pub view_rx: watch::Receiver<ViewState>,
}

/// Build the controller and spawn its loop on the current runtime
pub fn spawn_timer(default_duration_seconds: u64, cue: CuePlayer) -> (TimerLink, JoinHandle<()>) {
    let (presenter, view_rx) = WatchPresenter::new(cue);
    let (duration_tx, duration_rx) = watch::channel(default_duration_seconds);
    let (commands, command_rx) = mpsc::channel(32);

    let controller = TimerController::new(IntervalScheduler::new(), presenter, duration_rx);
    let task = tokio::spawn(timer_loop_task(controller, command_rx));

    let link = TimerLink {
        commands,
        duration_tx,
        view_rx,
    };
    (link, task)
}

/// Owns the controller and feeds it commands and ticks one at a time.
///
/// Returns once every command sender is gone, releasing the schedule.
pub async fn timer_loop_task(mut controller: FocusTimer, mut commands: mpsc::Receiver<TimerCommand>) {
    info!("Starting timer loop task");

    loop {
        tokio::select! {
            command = commands.recv() => match command {
                Some(command) => handle_command(&mut controller, command),
                None => break,
            },
            _ = controller.scheduler_mut().next_tick() => controller.tick(),
        }
    }

    controller.teardown();
    info!("Timer loop stopped");
}

fn handle_command(controller: &mut FocusTimer, command: TimerCommand) {
    let reply = match command {
        TimerCommand::Toggle(reply) => {
            controller.toggle();
            reply
        }
        TimerCommand::Cancel(reply) => {
            controller.cancel();
            reply
        }
        TimerCommand::Snapshot(reply) => reply,
    };

    if reply.send(controller.snapshot()).is_err() {
        debug!("Command requester went away before the reply");
    }
}
