//! Wall-clock profiling of named code scopes for instrumentation and analysis.
//!
//! This package measures the wall-clock time spent in named, possibly nested,
//! scopes and accumulates running statistics per distinct tree position. The
//! result is a hierarchical report with totals, means, extremes, standard
//! deviations and per-level percentages, rendered as a fixed-width table.
//!
//! The core functionality includes:
//! - [`Profiler`] - Owns one scope tree and tracks the current position
//! - [`Scope`] - A named, reusable handle for one tree position
//! - [`ScopeSpan`] - RAII guard measuring one cycle of a scope
//! - [`Report`] - Ordered, percentage-annotated snapshot of the tree
//! - [`FlatEntry`] - Depth-annotated entry of a flattened report
//!
//! This package is a development and instrumentation tool, not a sampling
//! profiler.
//!
//! # Simple usage
//!
//! Bracket a block with a span, or time a closure directly:
//!
//! ```
//! use scope_time::Profiler;
//!
//! let profiler = Profiler::new();
//!
//! {
//!     let _span = profiler.scope("format").measure();
//!     let text = format!("{}-{}", 1, 2);
//!     std::hint::black_box(text);
//! }
//!
//! let parsed = profiler.scope("parse").time(|| "42".parse::<u32>().unwrap());
//! assert_eq!(parsed, 42);
//!
//! profiler.print_to_stdout();
//! ```
//!
//! # Nesting
//!
//! Spans opened while another span is open become children of that scope.
//! The same name used at two different nesting positions is two independent
//! scopes; re-entering the same position accumulates into one entry:
//!
//! ```
//! use scope_time::Profiler;
//!
//! let profiler = Profiler::new();
//!
//! for _ in 0..3 {
//!     let _request = profiler.scope("request").measure();
//!     profiler.scope("decode").time(|| std::hint::black_box(1));
//!     profiler.scope("respond").time(|| std::hint::black_box(2));
//! }
//!
//! let report = profiler.report();
//! assert_eq!(report.entries().len(), 1);
//! assert_eq!(report.entries()[0].nested().len(), 2);
//! ```
//!
//! # Partial reports and settlement
//!
//! A report can be taken at any moment, even while scopes are open; a scope
//! that never completed shows as a zero-valued placeholder. Callers that only
//! accept complete data ask first:
//!
//! ```
//! use scope_time::Profiler;
//!
//! let profiler = Profiler::new();
//! let span = profiler.scope("open").measure();
//!
//! assert!(!profiler.is_settled());
//! assert!(profiler.check_settled().is_err());
//! let partial = profiler.report(); // still works
//!
//! drop(span);
//! assert!(profiler.is_settled());
//! # drop(partial);
//! ```
//!
//! # Threading
//!
//! A profiler instance serves exactly one logically-sequential execution
//! flow and is `!Send`. Parallel work gives each flow its own profiler;
//! finished [`Report`]s are plain data that can cross threads and be combined
//! with [`Report::merge`].

mod error;
mod flatten;
mod format;
mod pal;
mod profiler;
mod report;
mod scope;
mod span;
mod stat;

pub use error::NotSettledError;
pub use flatten::{FlatEntry, FlatIter};
pub use profiler::Profiler;
pub use report::{Report, ReportEntry};
pub use scope::Scope;
pub use span::ScopeSpan;
