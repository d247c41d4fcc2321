//! Running statistics over one sample stream.

/// Online aggregator for the samples recorded at one scope position.
///
/// Keeps just enough running state (count, sum, sum of squares, extremes) to
/// derive the mean and standard deviation later, without retaining any
/// individual sample.
#[derive(Clone, Debug, Default)]
pub(crate) struct Stat {
    count: u64,
    sum: f64,
    sum_of_squares: f64,
    min: Option<f64>,
    max: Option<f64>,
}

/// Derived summary of a [`Stat`] at one point in time.
///
/// The default value doubles as the placeholder for a scope that has been
/// entered but never completed: zero sum, zero count, everything else
/// undefined.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct StatSnapshot {
    pub(crate) sum: f64,
    pub(crate) num: u64,
    pub(crate) avg: Option<f64>,
    pub(crate) dev: Option<f64>,
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
}

impl Stat {
    /// Folds one sample into the running state.
    pub(crate) fn update(&mut self, value: f64) {
        if self.count == 0 {
            self.min = Some(value);
            self.max = Some(value);
        } else {
            self.min = self.min.map(|min| min.min(value));
            self.max = self.max.map(|max| max.max(value));
        }

        self.sum += value;
        self.sum_of_squares += value * value;
        self.count = self
            .count
            .checked_add(1)
            .expect("sample count overflows u64 - this indicates an unrealistic scenario");
    }

    /// Derives the summary statistics from the running state.
    ///
    /// The mean is defined for at least one sample and the standard deviation
    /// for at least two (Bessel's denominator `count - 1`). The deviation
    /// uses the textbook sum-of-squares formula, which can cancel for large,
    /// close-valued samples; that trade-off is deliberate for a lightweight
    /// instrumentation tool.
    #[expect(
        clippy::cast_precision_loss,
        reason = "sample counts stay far below the 2^53 precision limit of f64"
    )]
    pub(crate) fn snapshot(&self) -> StatSnapshot {
        let n = self.count as f64;

        let avg = (self.count > 0).then(|| self.sum / n);
        let dev = (self.count > 1)
            .then(|| ((self.sum_of_squares - self.sum * self.sum / n) / (n - 1.0)).sqrt());

        StatSnapshot {
            sum: self.sum,
            num: self.count,
            avg,
            dev,
            min: self.min,
            max: self.max,
        }
    }
}
