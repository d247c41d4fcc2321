//! Named scope handles.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ScopeSpan;
use crate::pal::ClockFacade;
use crate::profiler::ProfilerCore;

/// A named measurement scope bound to one profiler.
///
/// Creating a handle performs no bookkeeping; the scope tree only changes
/// when a span is acquired. A handle is cheap to clone and can be reused for
/// any number of measurement cycles.
///
/// # Examples
///
/// ```
/// use scope_time::Profiler;
///
/// let profiler = Profiler::new();
/// let scope = profiler.scope("parse");
///
/// for input in ["a", "bb", "ccc"] {
///     let _span = scope.measure();
///     std::hint::black_box(input.len());
/// }
///
/// assert_eq!(profiler.report().entries()[0].num(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Scope {
    core: Rc<RefCell<ProfilerCore>>,
    clock: ClockFacade,
    name: String,
}

impl Scope {
    pub(crate) fn new(core: Rc<RefCell<ProfilerCore>>, clock: ClockFacade, name: String) -> Self {
        Self { core, clock, name }
    }

    pub(crate) fn core(&self) -> Rc<RefCell<ProfilerCore>> {
        Rc::clone(&self.core)
    }

    pub(crate) fn clock(&self) -> &ClockFacade {
        &self.clock
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Starts one measurement cycle, entering the scope now and recording
    /// the elapsed wall-clock time when the returned guard drops.
    ///
    /// Guards on the same profiler must be dropped in reverse order of
    /// creation; Rust's block scoping produces that order naturally.
    pub fn measure(&self) -> ScopeSpan {
        ScopeSpan::new(self)
    }

    /// Runs `f` inside this scope and returns its result.
    ///
    /// The scope is released before a panic from `f` continues unwinding, so
    /// the measurement is recorded and the tree position restored even on the
    /// error path.
    ///
    /// # Examples
    ///
    /// ```
    /// use scope_time::Profiler;
    ///
    /// let profiler = Profiler::new();
    /// let total = profiler.scope("sum").time(|| (0..100_u64).sum::<u64>());
    /// assert_eq!(total, 4950);
    /// ```
    pub fn time<T>(&self, f: impl FnOnce() -> T) -> T {
        let _span = self.measure();
        f()
    }

    /// Wraps a callable so that every invocation runs inside this scope.
    ///
    /// Functionally identical to calling [`time`](Self::time) around each
    /// invocation: arguments, results and panics pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use scope_time::Profiler;
    ///
    /// let profiler = Profiler::new();
    /// let mut fibonacci = profiler.scope("fibonacci").wrap(|| {
    ///     let (mut a, mut b) = (0_u64, 1_u64);
    ///     for _ in 0..90 {
    ///         (a, b) = (b, a.wrapping_add(b));
    ///     }
    ///     a
    /// });
    ///
    /// for _ in 0..5 {
    ///     std::hint::black_box(fibonacci());
    /// }
    ///
    /// assert_eq!(profiler.report().entries()[0].num(), 5);
    /// ```
    pub fn wrap<T>(self, mut f: impl FnMut() -> T) -> impl FnMut() -> T {
        move || {
            let _span = self.measure();
            f()
        }
    }
}
