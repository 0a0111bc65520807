//! Trailing-edge debouncing against caller-supplied time.
//!
//! A [`Debouncer`] never owns a real timer. Callers report invocations with
//! [`Debouncer::call`] and drive settlement with [`Debouncer::poll`], passing
//! the current `Instant` each time. This keeps every burst reproducible under
//! virtual time and means dropping the debouncer cancels whatever was pending.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending<T> {
    deadline: Instant,
    value: T,
}

/// Collapses rapid repeated calls into one deferred call carrying the
/// latest value, fired once `wait` has elapsed without further calls.
#[derive(Debug)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Schedule `value` for `now + wait`, replacing any not-yet-fired call.
    pub fn call(&mut self, now: Instant, value: T) {
        self.pending = Some(Pending {
            deadline: now + self.wait,
            value,
        });
    }

    /// Take the pending value if its quiet period has fully elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if due {
            self.pending.take().map(|pending| pending.value)
        } else {
            None
        }
    }

    /// Drop the pending call, returning whether one existed.
    #[cfg(test)]
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn burst_collapses_to_single_call_with_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(10));
        let mut fired = Vec::new();

        for step in 0..5u64 {
            let now = start + ms(step * 5);
            debouncer.call(now, step);
            if let Some(value) = debouncer.poll(now) {
                fired.push(value);
            }
        }
        assert!(fired.is_empty());

        // Last call at 20ms, so nothing before 30ms.
        assert_eq!(debouncer.poll(start + ms(29)), None);
        assert_eq!(debouncer.poll(start + ms(30)), Some(4));
        assert_eq!(debouncer.poll(start + ms(100)), None);
    }

    #[test]
    fn spaced_calls_each_fire() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(10));

        debouncer.call(start, "a");
        assert_eq!(debouncer.poll(start + ms(10)), Some("a"));
        debouncer.call(start + ms(20), "b");
        assert_eq!(debouncer.poll(start + ms(35)), Some("b"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn cancel_discards_pending_call() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(150));
        debouncer.call(start, ());
        assert_eq!(debouncer.deadline(), Some(start + ms(150)));
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());
        assert_eq!(debouncer.poll(start + ms(500)), None);
    }

    #[test]
    fn reusable_after_firing() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(10));
        for round in 0..3u64 {
            let base = start + ms(round * 100);
            debouncer.call(base, round);
            assert_eq!(debouncer.poll(base + ms(10)), Some(round));
        }
    }
}
