//! The scoped measurement guard.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;
use std::time::Duration;

use crate::Scope;
use crate::pal::{Clock, ClockFacade};
use crate::profiler::ProfilerCore;

/// RAII guard for one measurement cycle of a scope.
///
/// The scope is entered when the guard is created and the elapsed wall-clock
/// time is recorded when it drops — on every path out of the guarded block,
/// including panic unwind. The drop never suppresses a propagating panic; it
/// finishes the bookkeeping and lets the failure continue.
///
/// # Examples
///
/// ```
/// use scope_time::Profiler;
///
/// let profiler = Profiler::new();
/// {
///     let _span = profiler.scope("work").measure();
///     let mut sum = 0_u64;
///     for i in 0..1000 {
///         sum = sum.wrapping_add(i);
///     }
///     std::hint::black_box(sum);
/// } // Elapsed time is recorded here.
/// ```
#[derive(Debug)]
#[must_use = "measurements are taken between creation and drop"]
pub struct ScopeSpan {
    core: Rc<RefCell<ProfilerCore>>,
    clock: ClockFacade,
    start: Duration,

    _single_threaded: PhantomData<*const ()>,
}

impl ScopeSpan {
    pub(crate) fn new(scope: &Scope) -> Self {
        let clock = scope.clock().clone();
        let start = clock.now();

        let core = scope.core();
        core.borrow_mut().enter(scope.name());

        Self {
            core,
            clock,
            start,
            _single_threaded: PhantomData,
        }
    }
}

impl Drop for ScopeSpan {
    fn drop(&mut self) {
        let elapsed = self.clock.now().saturating_sub(self.start);
        self.core.borrow_mut().exit(elapsed);
    }
}
