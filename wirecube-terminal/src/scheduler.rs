/// Fixed-rate tick deadlines
use std::time::{Duration, Instant};

/// Deadline tracker for a handler that runs every `period`, forever.
///
/// Missed deadlines are skipped rather than replayed back to back.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next: Instant,
}

impl Interval {
    /// The first deadline is one period after `start`
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period,
            next: start + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// How long to wait from `now` until the next deadline
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Move past the deadline that just fired. Returns how many further deadlines were
    /// already behind `now` and got dropped.
    pub fn advance(&mut self, now: Instant) -> u32 {
        self.next += self.period;
        let mut skipped = 0;
        while self.next <= now {
            self.next += self.period;
            skipped += 1;
        }
        skipped
    }
}
