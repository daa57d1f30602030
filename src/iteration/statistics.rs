//! Numeric reductions shared by the `sum_of_*`, `sum_by_*` and
//! `summarize_*` operations.
//!
//! Floating-point sums use compensated (Kahan) summation in iteration order.
//! The result therefore depends only on the iteration order of the source,
//! and the same order always produces the same bits.

/// Running compensated sum of `f64` values.
///
/// # Examples
///
/// ```rust
/// use rich_collections::iteration::CompensatedSum;
///
/// let mut sum = CompensatedSum::new();
/// for _ in 0..10 {
///     sum.add(0.1);
/// }
/// assert!((sum.value() - 1.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    /// An empty sum.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sum: 0.0,
            compensation: 0.0,
        }
    }

    /// Adds one value.
    pub fn add(&mut self, value: f64) {
        let adjusted = value - self.compensation;
        let next = self.sum + adjusted;
        self.compensation = (next - self.sum) - adjusted;
        self.sum = next;
    }

    /// The sum so far.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.sum
    }
}

/// Count, sum, minimum and maximum of integral values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerSummaryStatistics {
    count: usize,
    sum: i64,
    min: i64,
    max: i64,
}

impl Default for IntegerSummaryStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegerSummaryStatistics {
    /// Statistics over no values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            sum: 0,
            min: i64::MAX,
            max: i64::MIN,
        }
    }

    /// Records one value.
    pub fn accept(&mut self, value: i64) {
        self.count += 1;
        self.sum = self.sum.wrapping_add(value);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Number of recorded values.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Sum of recorded values.
    #[must_use]
    pub const fn sum(&self) -> i64 {
        self.sum
    }

    /// Smallest value, or `None` when nothing was recorded.
    #[must_use]
    pub const fn min(&self) -> Option<i64> {
        if self.count == 0 { None } else { Some(self.min) }
    }

    /// Largest value, or `None` when nothing was recorded.
    #[must_use]
    pub const fn max(&self) -> Option<i64> {
        if self.count == 0 { None } else { Some(self.max) }
    }

    /// Arithmetic mean, `0.0` when nothing was recorded.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }
}

/// Count, compensated sum, minimum and maximum of floating-point values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleSummaryStatistics {
    count: usize,
    sum: CompensatedSum,
    min: f64,
    max: f64,
}

impl Default for DoubleSummaryStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl DoubleSummaryStatistics {
    /// Statistics over no values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            sum: CompensatedSum::new(),
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Records one value.
    pub fn accept(&mut self, value: f64) {
        self.count += 1;
        self.sum.add(value);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Number of recorded values.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Compensated sum of recorded values.
    #[must_use]
    pub const fn sum(&self) -> f64 {
        self.sum.value()
    }

    /// Smallest value, or `None` when nothing was recorded.
    #[must_use]
    pub const fn min(&self) -> Option<f64> {
        if self.count == 0 { None } else { Some(self.min) }
    }

    /// Largest value, or `None` when nothing was recorded.
    #[must_use]
    pub const fn max(&self) -> Option<f64> {
        if self.count == 0 { None } else { Some(self.max) }
    }

    /// Arithmetic mean, `0.0` when nothing was recorded.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum() / self.count as f64
        }
    }
}
