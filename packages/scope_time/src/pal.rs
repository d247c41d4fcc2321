//! Platform abstraction layer for wall-clock readings.
//!
//! This module provides a clock abstraction that allows switching between the
//! real monotonic clock (backed by `std::time::Instant`) and a fake
//! implementation for testing purposes.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Clock;
pub(crate) use facade::ClockFacade;
#[cfg(test)]
pub(crate) use fake::FakeClock;
