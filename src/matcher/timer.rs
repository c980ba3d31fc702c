use std::time::{Duration, Instant};

/// Cancellable one-shot timer driven by explicit time.
///
/// Starting it again replaces any pending deadline, so at most one firing
/// happens per quiet period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    /// Cancel any pending deadline and schedule a new one at `now + delay`.
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the deadline, if one is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns `true` exactly once when the deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
