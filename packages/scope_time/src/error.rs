//! Error types.

use thiserror::Error;

/// The profiler still had open scopes when a settled state was required.
///
/// Returned only by [`Profiler::check_settled`](crate::Profiler::check_settled).
/// Building a report never requires settlement; this error exists for callers
/// that want to refuse partial data.
#[derive(Debug, Error)]
#[error("profiler is not settled: {open_scopes} scope(s) still open")]
pub struct NotSettledError {
    pub(crate) open_scopes: usize,
}

impl NotSettledError {
    /// Number of enters not yet matched by an exit when the check ran.
    #[must_use]
    pub fn open_scopes(&self) -> usize {
        self.open_scopes
    }
}
