//! Facade that selects between the real and fake clock.

use std::time::Duration;

use crate::pal::abstractions::Clock;
#[cfg(test)]
use crate::pal::fake::FakeClock;
use crate::pal::real::RealClock;

/// Clock selector handed to profilers and their spans.
///
/// Production code always uses the real variant; tests inject a fake clock
/// through `Profiler::with_clock`.
#[derive(Clone, Debug)]
pub(crate) enum ClockFacade {
    Real(RealClock),
    #[cfg(test)]
    Fake(FakeClock),
}

impl ClockFacade {
    /// Creates a facade over the real monotonic clock.
    pub(crate) fn real() -> Self {
        Self::Real(RealClock::new())
    }

    /// Creates a facade over a fake clock controlled by the test.
    #[cfg(test)]
    pub(crate) fn fake(clock: FakeClock) -> Self {
        Self::Fake(clock)
    }
}

impl Clock for ClockFacade {
    fn now(&self) -> Duration {
        match self {
            Self::Real(real) => real.now(),
            #[cfg(test)]
            Self::Fake(fake) => fake.now(),
        }
    }
}
