//! Real clock implementation backed by the operating system.

use std::time::{Duration, Instant};

use crate::pal::abstractions::Clock;

/// Monotonic wall-clock readings via [`std::time::Instant`].
///
/// The origin is the moment the clock was created; spans only ever look at
/// differences between readings, so the origin itself is irrelevant.
#[derive(Clone, Debug)]
pub(crate) struct RealClock {
    origin: Instant,
}

impl RealClock {
    pub(crate) fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for RealClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
