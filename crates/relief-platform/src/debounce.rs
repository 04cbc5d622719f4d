//! Trailing-edge debounce with a single pending deadline.

use std::time::{Duration, Instant};

/// Holds at most one pending deadline. Scheduling replaces the previous
/// deadline; the deadline fires once, on the first poll at or after it.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// A zero delay means callers should act immediately instead of scheduling.
    pub fn is_immediate(&self) -> bool {
        self.delay.is_zero()
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Cancel any pending deadline and schedule a new one `delay` after `now`.
    pub fn schedule(&mut self, now: Instant) {
        self.cancel();
        self.deadline = Some(now + self.delay);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` exactly once when the pending deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    #[test]
    fn nothing_pending_initially() {
        let mut d = Debouncer::new(DELAY);
        assert!(!d.is_pending());
        assert!(!d.poll(Instant::now()));
    }

    #[test]
    fn fires_once_after_delay() {
        let mut d = Debouncer::new(DELAY);
        let t0 = Instant::now();
        d.schedule(t0);
        assert!(!d.poll(t0 + Duration::from_millis(50)));
        assert!(d.poll(t0 + DELAY));
        assert!(!d.is_pending());
        assert!(!d.poll(t0 + DELAY * 2));
    }

    #[test]
    fn rescheduling_replaces_deadline() {
        let mut d = Debouncer::new(DELAY);
        let t0 = Instant::now();
        d.schedule(t0);
        d.schedule(t0 + Duration::from_millis(80));
        assert_eq!(d.deadline(), Some(t0 + Duration::from_millis(180)));
        // The first deadline no longer fires.
        assert!(!d.poll(t0 + DELAY));
        assert!(d.poll(t0 + Duration::from_millis(180)));
    }

    #[test]
    fn cancel_clears_pending() {
        let mut d = Debouncer::new(DELAY);
        let t0 = Instant::now();
        d.schedule(t0);
        d.cancel();
        assert!(!d.is_pending());
        assert!(!d.poll(t0 + DELAY * 10));
    }

    #[test]
    fn zero_delay_is_immediate() {
        assert!(Debouncer::new(Duration::ZERO).is_immediate());
        assert!(!Debouncer::new(DELAY).is_immediate());
    }
}
