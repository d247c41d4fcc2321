//! Hierarchical statistical reports.

use std::cmp::Ordering;

use crate::profiler::{NodeId, ProfilerCore, ROOT};
use crate::stat::{Stat, StatSnapshot};

/// Nested, ordered snapshot of a profiler's scope tree.
///
/// A `Report` is plain data: it can be cloned, compared, sent to other
/// threads and rendered long after the profiler that produced it is gone.
/// Siblings are ordered by total time descending; ties keep the order in
/// which the scopes were first entered.
///
/// # Examples
///
/// ```
/// use scope_time::Profiler;
///
/// let profiler = Profiler::new();
/// profiler.scope("work").time(|| {
///     std::hint::black_box((0..1000_u64).sum::<u64>());
/// });
///
/// let report = profiler.report();
/// for flat in &report {
///     println!("{} depth={}", flat.entry().name(), flat.depth());
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

/// Statistics for one scope position in a [`Report`].
///
/// All durations are in seconds. `avg`, `dev`, `min` and `max` are `None`
/// when undefined: the deviation needs at least two completed cycles, and a
/// placeholder entry for a scope that never completed has no statistics at
/// all.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportEntry {
    pub(crate) name: String,
    pub(crate) sum: f64,
    pub(crate) num: u64,
    pub(crate) avg: Option<f64>,
    pub(crate) dev: Option<f64>,
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
    pub(crate) percent: f64,
    pub(crate) nested: Vec<ReportEntry>,
}

impl Report {
    /// Builds a report from the current state of a scope tree.
    pub(crate) fn from_tree(core: &ProfilerCore) -> Self {
        Self {
            entries: build_entries(core, ROOT),
        }
    }

    /// Top-level entries, ordered by total time descending.
    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Whether the report contains no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Combines the top-level entries of two reports into a new report.
    ///
    /// Merging concatenates: entries keep their own statistics even when
    /// both reports contain the same scope name, because deviation and
    /// extremes cannot be reconstructed from two finished snapshots. The
    /// combined top level is re-ordered and its percentages recomputed over
    /// the new sibling total.
    ///
    /// This is the caller-side collaborator for combining per-worker
    /// profilers; the profilers themselves never share state.
    ///
    /// # Examples
    ///
    /// ```
    /// use scope_time::{Profiler, Report};
    ///
    /// let first = Profiler::new();
    /// first.scope("parse").time(|| std::hint::black_box(1));
    ///
    /// let second = Profiler::new();
    /// second.scope("render").time(|| std::hint::black_box(2));
    ///
    /// let merged = Report::merge(&first.report(), &second.report());
    /// assert_eq!(merged.entries().len(), 2);
    /// ```
    #[must_use]
    pub fn merge(a: &Self, b: &Self) -> Self {
        let mut entries = a.entries.clone();
        entries.extend(b.entries.iter().cloned());
        rank(&mut entries);
        Self { entries }
    }
}

impl ReportEntry {
    /// The scope name (the edge label from the parent position).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total seconds across all completed cycles.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Number of completed cycles.
    #[must_use]
    pub fn num(&self) -> u64 {
        self.num
    }

    /// Mean seconds per cycle, if at least one cycle completed.
    #[must_use]
    pub fn avg(&self) -> Option<f64> {
        self.avg
    }

    /// Sample standard deviation, if at least two cycles completed.
    #[must_use]
    pub fn dev(&self) -> Option<f64> {
        self.dev
    }

    /// Shortest completed cycle in seconds.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Longest completed cycle in seconds.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// This entry's share of its sibling group's total time, in percent.
    ///
    /// Zero for every sibling when the group total is exactly zero.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Child entries, ordered by total time descending. Empty for a leaf.
    #[must_use]
    pub fn nested(&self) -> &[ReportEntry] {
        &self.nested
    }
}

fn build_entries(core: &ProfilerCore, id: NodeId) -> Vec<ReportEntry> {
    let mut entries: Vec<ReportEntry> = core
        .node(id)
        .children
        .iter()
        .map(|(name, child)| {
            // A node that never completed a cycle has no statistics yet and
            // becomes a zero-valued placeholder.
            let snapshot = core
                .node(*child)
                .stat
                .as_ref()
                .map_or_else(StatSnapshot::default, Stat::snapshot);

            ReportEntry {
                name: name.clone(),
                sum: snapshot.sum,
                num: snapshot.num,
                avg: snapshot.avg,
                dev: snapshot.dev,
                min: snapshot.min,
                max: snapshot.max,
                percent: 0.0,
                nested: build_entries(core, *child),
            }
        })
        .collect();

    rank(&mut entries);
    entries
}

/// Assigns sibling percentages and orders by sum descending.
///
/// The sort is stable, so siblings with equal sums keep their creation order.
fn rank(entries: &mut [ReportEntry]) {
    let total: f64 = entries.iter().map(|entry| entry.sum).sum();

    for entry in entries.iter_mut() {
        entry.percent = if total > 0.0 {
            100.0 * entry.sum / total
        } else {
            0.0
        };
    }

    // Durations are never negative, so the comparison cannot see NaN.
    entries.sort_by(|a, b| b.sum.partial_cmp(&a.sum).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::Profiler;
    use crate::pal::{ClockFacade, FakeClock};

    fn create_test_profiler() -> (Profiler, FakeClock) {
        let clock = FakeClock::new();
        let profiler = Profiler::with_clock(ClockFacade::fake(clock.clone()));
        (profiler, clock)
    }

    #[test]
    fn zero_activity_report_is_empty() {
        let (profiler, _clock) = create_test_profiler();
        assert!(profiler.report().is_empty());
    }

    #[test]
    fn zero_sum_siblings_all_get_zero_percent() {
        let (profiler, _clock) = create_test_profiler();
        profiler.scope("a").time(|| ());
        profiler.scope("b").time(|| ());
        profiler.scope("c").time(|| ());

        let report = profiler.report();
        assert_eq!(report.entries().len(), 3);
        for entry in report.entries() {
            assert_eq!(entry.percent(), 0.0);
            assert!(entry.percent().is_finite());
        }
    }

    #[test]
    fn percent_is_relative_to_the_sibling_group() {
        let (profiler, clock) = create_test_profiler();

        {
            let _outer = profiler.scope("p").measure();
            profiler.scope("a").time(|| clock.advance(Duration::from_secs(3)));
        }
        profiler.scope("q").time(|| clock.advance(Duration::from_secs(1)));

        let report = profiler.report();
        let p = &report.entries()[0];
        assert_eq!(p.name(), "p");
        assert!((p.percent() - 75.0).abs() < 1e-9);

        // "a" is alone in its sibling group and owns all of it.
        let a = &p.nested()[0];
        assert!((a.percent() - 100.0).abs() < 1e-9);

        let q = &report.entries()[1];
        assert!((q.percent() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn merge_concatenates_and_reranks() {
        let (first, clock_a) = create_test_profiler();
        first.scope("slow").time(|| clock_a.advance(Duration::from_secs(1)));

        let (second, clock_b) = create_test_profiler();
        second.scope("fast").time(|| clock_b.advance(Duration::from_secs(3)));

        let merged = Report::merge(&first.report(), &second.report());
        let names: Vec<&str> = merged.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["fast", "slow"]);

        assert!((merged.entries()[0].percent() - 75.0).abs() < 1e-9);
        assert!((merged.entries()[1].percent() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn merge_keeps_duplicate_names_separate() {
        let (first, clock_a) = create_test_profiler();
        first.scope("work").time(|| clock_a.advance(Duration::from_secs(1)));

        let (second, clock_b) = create_test_profiler();
        second.scope("work").time(|| clock_b.advance(Duration::from_secs(2)));

        let merged = Report::merge(&first.report(), &second.report());
        assert_eq!(merged.entries().len(), 2);
        assert_eq!(merged.entries()[0].name(), "work");
        assert_eq!(merged.entries()[1].name(), "work");
        assert!((merged.entries()[0].sum() - 2.0).abs() < 1e-9);
        assert!((merged.entries()[1].sum() - 1.0).abs() < 1e-9);
    }

    // Finished reports are plain data and may cross threads.
    static_assertions::assert_impl_all!(Report: Send, Sync, Clone);
    static_assertions::assert_impl_all!(ReportEntry: Send, Sync, Clone);
}
