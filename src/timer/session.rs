//! Timer status and the countdown session record

use serde::{Deserialize, Serialize};

/// Coarse status of the countdown, derived from [`Session`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
}

impl TimerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerStatus::Idle => "idle",
            TimerStatus::Running => "running",
            TimerStatus::Paused => "paused",
        }
    }
}

/// The active countdown, if any.
///
/// Remaining time and the schedule handle only exist alongside a
/// running or paused status, so they live inside those variants.
#[derive(Debug)]
pub enum Session<H> {
    Idle,
    Running { remaining: u64, total: u64, handle: H },
    Paused { remaining: u64, total: u64, handle: H },
}

impl<H> Default for Session<H> {
    fn default() -> Self {
        Session::Idle
    }
}

impl<H> Session<H> {
    pub fn status(&self) -> TimerStatus {
        match self {
            Session::Idle => TimerStatus::Idle,
            Session::Running { .. } => TimerStatus::Running,
            Session::Paused { .. } => TimerStatus::Paused,
        }
    }

    pub fn remaining(&self) -> Option<u64> {
        match self {
            Session::Idle => None,
            Session::Running { remaining, .. } | Session::Paused { remaining, .. } => {
                Some(*remaining)
            }
        }
    }

    pub fn total(&self) -> Option<u64> {
        match self {
            Session::Idle => None,
            Session::Running { total, .. } | Session::Paused { total, .. } => Some(*total),
        }
    }

    /// Give up the schedule handle, leaving the session idle
    pub fn into_handle(self) -> Option<H> {
        match self {
            Session::Idle => None,
            Session::Running { handle, .. } | Session::Paused { handle, .. } => Some(handle),
        }
    }
}

/// Read-only view of the controller handed out to the API layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub status: TimerStatus,
    pub remaining_seconds: Option<u64>,
    pub total_seconds: Option<u64>,
}

impl TimerSnapshot {
    pub fn idle() -> Self {
        Self {
            status: TimerStatus::Idle,
            remaining_seconds: None,
            total_seconds: None,
        }
    }
}

impl<H> From<&Session<H>> for TimerSnapshot {
    fn from(session: &Session<H>) -> Self {
        Self {
            status: session.status(),
            remaining_seconds: session.remaining(),
            total_seconds: session.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_session_has_no_countdown_fields() {
        let session: Session<u32> = Session::default();
        assert_eq!(session.status(), TimerStatus::Idle);
        assert_eq!(session.remaining(), None);
        assert_eq!(session.total(), None);
        assert_eq!(session.into_handle(), None);
    }

    #[test]
    fn paused_session_keeps_handle_and_counts() {
        let session = Session::Paused { remaining: 7, total: 10, handle: 3u32 };
        let snapshot = TimerSnapshot::from(&session);
        assert_eq!(snapshot.status, TimerStatus::Paused);
        assert_eq!(snapshot.remaining_seconds, Some(7));
        assert_eq!(snapshot.total_seconds, Some(10));
        assert_eq!(session.into_handle(), Some(3));
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&TimerStatus::Running).unwrap();
        assert_eq!(json, "\"running\"");
    }
}
