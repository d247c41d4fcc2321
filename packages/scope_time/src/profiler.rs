//! Profiler state and the scope tree.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::pal::ClockFacade;
use crate::stat::Stat;
use crate::{NotSettledError, Report, Scope};

/// Index of a node in the profiler's arena.
pub(crate) type NodeId = usize;

/// The root of the scope tree. It carries no statistics of its own.
pub(crate) const ROOT: NodeId = 0;

/// One position in the scope tree.
///
/// A node's name is the edge label held by its parent; the node itself only
/// stores accumulated statistics and child edges. The statistics stay absent
/// until the scope completes for the first time, which is how report
/// construction tells a still-open scope apart from a measured one.
#[derive(Debug, Default)]
pub(crate) struct ScopeNode {
    pub(crate) stat: Option<Stat>,
    /// Child edges in creation order. Creation order breaks ties when report
    /// siblings have equal sums, so this stays a `Vec` rather than a map.
    pub(crate) children: Vec<(String, NodeId)>,
}

/// Mutable profiler state shared between a profiler, its scopes and spans.
///
/// Nodes live in an arena addressed by stable index; the ancestor stack holds
/// indices only, so ownership stays acyclic with no parent back-pointers.
#[derive(Debug)]
pub(crate) struct ProfilerCore {
    arena: Vec<ScopeNode>,
    current: NodeId,
    stack: Vec<NodeId>,
    open_count: usize,
}

impl ProfilerCore {
    pub(crate) fn new() -> Self {
        Self {
            arena: vec![ScopeNode::default()],
            current: ROOT,
            stack: Vec::new(),
            open_count: 0,
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &ScopeNode {
        self.arena
            .get(id)
            .expect("node ids are handed out by this arena and nodes are never removed")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut ScopeNode {
        self.arena
            .get_mut(id)
            .expect("node ids are handed out by this arena and nodes are never removed")
    }

    /// Descends into the named child of the current node, creating the child
    /// on first use of this tree position.
    pub(crate) fn enter(&mut self, name: &str) {
        let parent = self.current;

        let child = match self
            .node(parent)
            .children
            .iter()
            .find(|(child_name, _)| child_name == name)
        {
            Some((_, id)) => *id,
            None => {
                let id = self.arena.len();
                self.arena.push(ScopeNode::default());
                self.node_mut(parent).children.push((name.to_owned(), id));
                id
            }
        };

        self.stack.push(parent);
        self.current = child;
        self.open_count = self
            .open_count
            .checked_add(1)
            .expect("open scope count overflows usize - this indicates an unrealistic scenario");
    }

    /// Records the elapsed time at the current node and ascends to its
    /// parent.
    ///
    /// # Panics
    ///
    /// Panics if no scope is open. That state is unreachable through the
    /// public span API, which pairs every enter with exactly one exit.
    pub(crate) fn exit(&mut self, elapsed: Duration) {
        let parent = self
            .stack
            .pop()
            .expect("scope exited without a matching enter");

        let current = self.current;
        self.node_mut(current)
            .stat
            .get_or_insert_with(Stat::default)
            .update(elapsed.as_secs_f64());

        self.current = parent;
        self.open_count = self
            .open_count
            .checked_sub(1)
            .expect("open scope count always matches the ancestor stack depth");
    }

    pub(crate) fn open_count(&self) -> usize {
        self.open_count
    }
}

/// Measures wall-clock time spent in named, possibly nested, scopes and
/// produces a hierarchical statistical report.
///
/// A profiler instance belongs to one logically-sequential execution flow.
/// Genuinely parallel work should give each flow its own profiler and combine
/// the finished [`Report`]s afterwards; the type is `!Send` so the compiler
/// enforces the single-flow rule.
///
/// # Examples
///
/// ```
/// use scope_time::Profiler;
///
/// let profiler = Profiler::new();
///
/// {
///     let _span = profiler.scope("outer").measure();
///     {
///         let _span = profiler.scope("inner").measure();
///         let mut sum = 0_u64;
///         for i in 0..10_000 {
///             sum = sum.wrapping_add(i);
///         }
///         std::hint::black_box(sum);
///     }
/// }
///
/// assert!(profiler.is_settled());
/// profiler.print_to_stdout();
/// ```
///
/// Closures can be timed without explicit bracketing:
///
/// ```
/// use scope_time::Profiler;
///
/// let profiler = Profiler::new();
/// let total = profiler.scope("sum").time(|| (0..1000_u64).sum::<u64>());
/// assert_eq!(total, 499_500);
/// ```
#[derive(Debug)]
pub struct Profiler {
    core: Rc<RefCell<ProfilerCore>>,
    clock: ClockFacade,
}

impl Profiler {
    /// Creates a new profiler with an empty scope tree, in the settled state.
    #[expect(
        clippy::new_without_default,
        reason = "to avoid ambiguity with the notion of a 'default profiler' that is not actually a default profiler"
    )]
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: Rc::new(RefCell::new(ProfilerCore::new())),
            clock: ClockFacade::real(),
        }
    }

    /// Creates a new profiler with a specific clock.
    ///
    /// This is primarily used for testing purposes to inject a fake clock
    /// that tests advance deterministically.
    #[cfg(test)]
    pub(crate) fn with_clock(clock: ClockFacade) -> Self {
        Self {
            core: Rc::new(RefCell::new(ProfilerCore::new())),
            clock,
        }
    }

    /// Creates a handle for the named scope.
    ///
    /// Creating the handle performs no bookkeeping; the tree only changes
    /// when a span is acquired from it. The same name at the same nesting
    /// position always accumulates into the same statistics, while the same
    /// name at a different position is an independent scope.
    pub fn scope(&self, name: impl Into<String>) -> Scope {
        Scope::new(Rc::clone(&self.core), self.clock.clone(), name.into())
    }

    /// Builds a report for the current tree state.
    ///
    /// This never fails, even while scopes are open: an open scope that has
    /// never completed shows up as a zero-valued placeholder entry, with any
    /// completed descendants nested beneath it. Use [`check_settled`] first
    /// when only complete data is acceptable.
    ///
    /// [`check_settled`]: Self::check_settled
    #[must_use]
    pub fn report(&self) -> Report {
        Report::from_tree(&self.core.borrow())
    }

    /// Whether every enter has been matched by an exit.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.core.borrow().open_count() == 0
    }

    /// Fails if any scope is still open anywhere in this profiler.
    ///
    /// # Errors
    ///
    /// Returns [`NotSettledError`] carrying the number of open scopes.
    pub fn check_settled(&self) -> Result<(), NotSettledError> {
        let open_scopes = self.core.borrow().open_count();
        if open_scopes == 0 {
            Ok(())
        } else {
            Err(NotSettledError { open_scopes })
        }
    }

    /// Prints the formatted report table to stdout.
    ///
    /// This is a convenience method equivalent to
    /// `self.report().print_to_stdout()`.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        self.report().print_to_stdout();
    }
}

impl fmt::Display for Profiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate to Report's Display implementation for consistency.
        write!(f, "{}", self.report())
    }
}
