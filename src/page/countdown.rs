use std::fmt;
use std::time::{Duration, SystemTime};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_DAY: u64 = 86_400;

/// Remaining time split into the four display fields
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeParts {
    pub fn from_duration(remaining: Duration) -> Self {
        let total = remaining.as_secs();
        Self {
            days: total / SECS_PER_DAY,
            hours: total % SECS_PER_DAY / SECS_PER_HOUR,
            minutes: total % SECS_PER_HOUR / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        }
    }
}

impl fmt::Display for TimeParts {
    /// Zero-padded, e.g. "89d 23:59:07"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}d {:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownStatus {
    Running(TimeParts),
    Complete,
}

/// Counts down to a launch deadline.
///
/// The current time is always an argument, never read ambiently, so the
/// arithmetic stays deterministic under test.
pub struct Countdown {
    deadline: SystemTime,
}

impl Countdown {
    pub fn new(deadline: SystemTime) -> Self {
        Self { deadline }
    }

    /// Deadline a whole number of days after `start`
    pub fn days_after(start: SystemTime, days: u64) -> Self {
        Self::new(start + Duration::from_secs(days * SECS_PER_DAY))
    }

    /// `Running` until the deadline passes; exactly at the deadline the
    /// countdown still shows all zeros
    pub fn status(&self, now: SystemTime) -> CountdownStatus {
        match self.deadline.duration_since(now) {
            Ok(remaining) => CountdownStatus::Running(TimeParts::from_duration(remaining)),
            Err(_) => CountdownStatus::Complete,
        }
    }
}
