//! Fake clock implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::pal::abstractions::Clock;

/// Fake implementation of the clock abstraction for testing.
///
/// This implementation lets tests control the flow of time instead of relying
/// on the operating system. Multiple clones of the same `FakeClock` share the
/// same underlying reading, allowing tests to advance time while a profiler
/// holds its own handle to the clock.
#[derive(Clone, Debug)]
pub(crate) struct FakeClock {
    now: Arc<Mutex<Duration>>,
}

impl FakeClock {
    /// Creates a new fake clock at time zero.
    pub(crate) fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Advances the clock reading by the given amount.
    ///
    /// This affects all clones of this clock, allowing tests to simulate time
    /// passing inside an open span.
    pub(crate) fn advance(&self, by: Duration) {
        let mut now = self
            .now
            .lock()
            .expect("FakeClock state lock should not be poisoned");
        *now = now
            .checked_add(by)
            .expect("fake clock advanced beyond the maximum Duration value");
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Duration {
        *self
            .now
            .lock()
            .expect("FakeClock state lock should not be poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let clock = FakeClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
    }

    #[test]
    fn advance_is_cumulative() {
        let clock = FakeClock::new();
        clock.advance(Duration::from_secs(2));
        clock.advance(Duration::from_millis(500));
        assert_eq!(clock.now(), Duration::from_millis(2500));
    }

    #[test]
    fn clones_share_the_same_reading() {
        let clock = FakeClock::new();
        let other = clock.clone();
        clock.advance(Duration::from_secs(1));
        assert_eq!(other.now(), Duration::from_secs(1));
    }
}
