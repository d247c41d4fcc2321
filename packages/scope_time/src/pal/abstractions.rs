//! Clock abstraction trait definitions.

use std::fmt::Debug;
use std::time::Duration;

/// Provides wall-clock readings for span measurement.
///
/// This trait abstracts the underlying time source, allowing for both the
/// real monotonic clock and fake implementations that tests can steer
/// deterministically.
pub(crate) trait Clock: Debug + Send + Sync + 'static {
    /// Gets the time elapsed since an arbitrary fixed origin.
    ///
    /// Only differences between two readings are meaningful. Readings are
    /// monotonically non-decreasing.
    fn now(&self) -> Duration;
}
