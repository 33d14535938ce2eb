//! Countdown label and progress helpers

use std::fmt;

use serde::{Deserialize, Serialize};

/// Remaining time split into clock fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeParts {
    pub fn from_seconds(remaining: u64) -> Self {
        Self {
            hours: remaining / 3600,
            minutes: (remaining % 3600) / 60,
            seconds: remaining % 60,
        }
    }
}

impl fmt::Display for TimeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Fraction of the countdown still left, in `0.0..=1.0`.
///
/// A zero-length countdown reports 0.
pub fn progress(remaining: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (remaining.min(total) as f64) / (total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_hours_minutes_seconds() {
        let parts = TimeParts::from_seconds(3 * 3600 + 25 * 60 + 9);
        assert_eq!(parts, TimeParts { hours: 3, minutes: 25, seconds: 9 });
        assert_eq!(parts.to_string(), "03:25:09");
    }

    #[test]
    fn zero_pads_small_values() {
        assert_eq!(TimeParts::from_seconds(0).to_string(), "00:00:00");
        assert_eq!(TimeParts::from_seconds(59).to_string(), "00:00:59");
        assert_eq!(TimeParts::from_seconds(60).to_string(), "00:01:00");
        assert_eq!(TimeParts::from_seconds(86_399).to_string(), "23:59:59");
    }

    #[test]
    fn hours_widen_past_two_digits() {
        assert_eq!(TimeParts::from_seconds(100 * 3600).to_string(), "100:00:00");
    }

    #[test]
    fn progress_guards_zero_total() {
        assert_eq!(progress(0, 0), 0.0);
        assert_eq!(progress(5, 0), 0.0);
    }

    #[test]
    fn progress_stays_in_unit_range_and_never_grows() {
        let total = 7;
        let mut last = 1.0;
        for remaining in (0..=total).rev() {
            let p = progress(remaining, total);
            assert!((0.0..=1.0).contains(&p));
            assert!(p <= last);
            last = p;
        }
        assert_eq!(progress(total, total), 1.0);
        assert_eq!(progress(0, total), 0.0);
    }
}
