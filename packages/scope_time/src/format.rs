//! Fixed-width table rendering of reports.

use std::fmt;

use crate::report::Report;

/// Marker printed for a statistic that is undefined: the deviation of fewer
/// than two cycles, or any statistic of a placeholder entry. One token is
/// used uniformly so it is distinguishable from every real value.
const UNDEFINED: &str = "nan";

/// Two-character marker repeated once per nesting level in the name column.
const INDENT: &str = ". ";

/// Minimum width of the name column, applied even when every indented name is
/// shorter.
const NAME_WIDTH_FLOOR: usize = 5;

impl Report {
    /// Renders the report as table lines: a header, a separator, then one
    /// row per flattened entry in flattened order.
    ///
    /// All durations are printed in seconds with two decimals.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let rows: Vec<(String, crate::FlatEntry<'_>)> = self
            .iter()
            .map(|flat| {
                let indented = format!("{}{}", INDENT.repeat(flat.depth()), flat.entry().name());
                (indented, flat)
            })
            .collect();

        let longest = rows
            .iter()
            .map(|(name, _)| name.len())
            .fold(NAME_WIDTH_FLOOR, usize::max);
        let name_width = longest.saturating_add(2);

        let mut lines = Vec::with_capacity(rows.len().saturating_add(2));
        lines.push(format!(
            "name{:pad$} perc    sum   n    avg    min    max    dev",
            "",
            pad = longest.saturating_sub(2),
        ));
        lines.push(format!(
            "{:-<name_width$} ---- ------ --- ------ ------ ------ ------",
            "",
        ));

        for (name, flat) in rows {
            let entry = flat.entry();
            lines.push(format!(
                "{name:.<name_width$} {percent:>3.0}% {sum:>6.2} {num:>3} {avg} {min} {max} {dev}",
                percent = entry.percent(),
                sum = entry.sum(),
                num = entry.num(),
                avg = cell(entry.avg()),
                min = cell(entry.min()),
                max = cell(entry.max()),
                dev = cell(entry.dev()),
            ));
        }

        lines
    }

    /// Feeds each rendered table line to `sink`.
    ///
    /// The sink is any single-line consumer, such as a structured logger's
    /// info method or a collecting vector in tests.
    ///
    /// # Examples
    ///
    /// ```
    /// use scope_time::Profiler;
    ///
    /// let profiler = Profiler::new();
    /// profiler.scope("work").time(|| std::hint::black_box(42));
    ///
    /// let mut captured = Vec::new();
    /// profiler.report().print_to(|line| captured.push(line.to_owned()));
    /// assert!(captured[0].starts_with("name"));
    /// ```
    pub fn print_to(&self, mut sink: impl FnMut(&str)) {
        for line in self.lines() {
            sink(&line);
        }
    }

    /// Prints the table to stdout, one line at a time.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        self.print_to(|line| println!("{line}"));
    }
}

/// Renders an optional statistic right-aligned in a six-character field.
fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| format!("{UNDEFINED:>6}"), |value| format!("{value:>6.2}"))
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
