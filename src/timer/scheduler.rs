//! Repeating tick source driving the countdown

use std::time::Duration;

use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{debug, error, warn};

/// Period between countdown ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A cancellable, suspendable repeating tick.
///
/// Only one schedule may be alive at a time. `create` starts firing
/// immediately and then once per period. `cancel` must accept a
/// suspended schedule.
pub trait TickScheduler {
    type Handle;

    fn create(&mut self, period: Duration) -> Self::Handle;
    fn suspend(&mut self, handle: &Self::Handle);
    fn resume(&mut self, handle: &Self::Handle);
    fn cancel(&mut self, handle: Self::Handle);
}

/// Opaque token for the schedule created by [`IntervalScheduler`]
#[derive(Debug, PartialEq, Eq)]
pub struct ScheduleHandle(u64);

#[derive(Debug)]
struct ActiveSchedule {
    id: u64,
    interval: Interval,
    suspended: bool,
}

/// Tick scheduler backed by a tokio [`Interval`].
///
/// Ticks are pulled with [`IntervalScheduler::next_tick`] by the task
/// that owns the controller, so a suspended or released schedule
/// simply never resolves.
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    active: Option<ActiveSchedule>,
    next_id: u64,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a schedule currently exists, suspended or not
    pub fn is_scheduled(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_suspended(&self) -> bool {
        self.active.as_ref().is_some_and(|s| s.suspended)
    }

    /// Wait for the next tick of the live schedule.
    ///
    /// Pending forever while no schedule exists or it is suspended.
    /// Cancel safe.
    pub async fn next_tick(&mut self) {
        match self.active.as_mut() {
            Some(schedule) if !schedule.suspended => {
                schedule.interval.tick().await;
            }
            _ => std::future::pending::<()>().await,
        }
    }

    fn live(&mut self, handle: &ScheduleHandle, op: &str) -> Option<&mut ActiveSchedule> {
        match self.active.as_mut() {
            Some(schedule) if schedule.id == handle.0 => Some(schedule),
            _ => {
                error!("{} called with stale schedule handle {}", op, handle.0);
                None
            }
        }
    }
}

impl TickScheduler for IntervalScheduler {
    type Handle = ScheduleHandle;

    fn create(&mut self, period: Duration) -> ScheduleHandle {
        if let Some(existing) = &self.active {
            warn!("Tick schedule {} already exists, not creating another", existing.id);
            return ScheduleHandle(existing.id);
        }

        self.next_id += 1;
        let mut ticks = interval(period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.active = Some(ActiveSchedule {
            id: self.next_id,
            interval: ticks,
            suspended: false,
        });

        debug!("Created tick schedule {} every {:?}", self.next_id, period);
        ScheduleHandle(self.next_id)
    }

    fn suspend(&mut self, handle: &ScheduleHandle) {
        if let Some(schedule) = self.live(handle, "suspend") {
            schedule.suspended = true;
            debug!("Suspended tick schedule {}", schedule.id);
        }
    }

    fn resume(&mut self, handle: &ScheduleHandle) {
        if let Some(schedule) = self.live(handle, "resume") {
            schedule.suspended = false;
            // Next tick lands one full period from now; nothing missed while paused is replayed
            schedule.interval.reset();
            debug!("Resumed tick schedule {}", schedule.id);
        }
    }

    fn cancel(&mut self, handle: ScheduleHandle) {
        if self.live(&handle, "cancel").is_some() {
            self.active = None;
            debug!("Released tick schedule {}", handle.0);
        }
    }
}
