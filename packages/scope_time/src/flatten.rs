//! Depth-first linearization of a nested report.

use std::slice;

use crate::report::{Report, ReportEntry};

/// One report entry annotated with its nesting depth.
///
/// Top-level entries have depth 0.
#[derive(Clone, Copy, Debug)]
pub struct FlatEntry<'a> {
    depth: usize,
    entry: &'a ReportEntry,
}

impl<'a> FlatEntry<'a> {
    /// Nesting depth of the entry; top-level entries are at depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The report entry at this position.
    #[must_use]
    pub fn entry(&self) -> &'a ReportEntry {
        self.entry
    }
}

/// Pre-order iterator over a report: each entry is yielded before its nested
/// subtree, which is yielded before the following sibling.
///
/// Purely a traversal of the already-built report; every call to
/// [`Report::iter`] restarts from the top.
#[derive(Debug)]
pub struct FlatIter<'a> {
    stack: Vec<(usize, slice::Iter<'a, ReportEntry>)>,
}

impl Report {
    /// Iterates the report in flattened pre-order with explicit depth.
    #[must_use]
    pub fn iter(&self) -> FlatIter<'_> {
        FlatIter {
            stack: vec![(0, self.entries().iter())],
        }
    }
}

impl<'a> Iterator for FlatIter<'a> {
    type Item = FlatEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (depth, entries) = self.stack.last_mut()?;
            let depth = *depth;

            match entries.next() {
                Some(entry) => {
                    if !entry.nested.is_empty() {
                        self.stack.push((depth.saturating_add(1), entry.nested.iter()));
                    }
                    return Some(FlatEntry { depth, entry });
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = FlatEntry<'a>;
    type IntoIter = FlatIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::Profiler;
    use crate::pal::{ClockFacade, FakeClock};

    fn create_test_profiler() -> (Profiler, FakeClock) {
        let clock = FakeClock::new();
        let profiler = Profiler::with_clock(ClockFacade::fake(clock.clone()));
        (profiler, clock)
    }

    fn nested_fixture() -> Profiler {
        let (profiler, clock) = create_test_profiler();
        {
            let _p = profiler.scope("p").measure();
            {
                let _a = profiler.scope("a").measure();
                profiler.scope("b").time(|| clock.advance(Duration::from_secs(3)));
            }
        }
        profiler.scope("q").time(|| clock.advance(Duration::from_secs(1)));
        profiler
    }

    #[test]
    fn preorder_with_depths() {
        let report = nested_fixture().report();

        let flattened: Vec<(usize, String)> = report
            .iter()
            .map(|flat| (flat.depth(), flat.entry().name().to_owned()))
            .collect();

        assert_eq!(
            flattened,
            [
                (0, "p".to_owned()),
                (1, "a".to_owned()),
                (2, "b".to_owned()),
                (0, "q".to_owned()),
            ]
        );
    }

    #[test]
    fn iteration_is_restartable() {
        let report = nested_fixture().report();

        let first: Vec<usize> = report.iter().map(|flat| flat.depth()).collect();
        let second: Vec<usize> = report.iter().map(|flat| flat.depth()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_report_yields_nothing() {
        let (profiler, _clock) = create_test_profiler();
        assert_eq!(profiler.report().iter().count(), 0);
    }

    #[test]
    fn for_loop_over_a_report_reference() {
        let report = nested_fixture().report();

        let mut count = 0;
        for flat in &report {
            assert!(flat.depth() <= 2);
            count += 1;
        }
        assert_eq!(count, 4);
    }
}
