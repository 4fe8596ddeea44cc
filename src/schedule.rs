//! src/schedule.rs
//!
//! Recurring tasks on the single UI thread.
//!
//! A `Ticker` only answers "is it time yet?". The app loop owns one per task
//! (field animation, clock refresh) and polls input until the earliest deadline.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    /// First firing is one `interval` after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_deadline(&self) -> Instant {
        self.next
    }

    /// True at most once per interval. A loop that fell behind fires once and
    /// resumes a full interval later instead of bursting to catch up.
    pub fn due(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let start = Instant::now();
        let mut t = Ticker::new(Duration::from_millis(50), start);
        assert!(!t.due(start));
        assert!(!t.due(start + Duration::from_millis(49)));
        assert!(t.due(start + Duration::from_millis(50)));
        assert!(!t.due(start + Duration::from_millis(60)));
        assert!(t.due(start + Duration::from_millis(100)));
    }

    #[test]
    fn does_not_burst_after_a_stall() {
        let start = Instant::now();
        let mut t = Ticker::new(Duration::from_millis(50), start);
        let late = start + Duration::from_millis(500);
        assert!(t.due(late));
        assert!(!t.due(late));
        assert_eq!(t.next_deadline(), late + Duration::from_millis(50));
    }
}
