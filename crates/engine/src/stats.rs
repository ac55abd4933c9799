//! Descriptive statistics over sample series
//!
//! Percentiles use linear interpolation between order statistics:
//! `rank = p / 100 * (n - 1)`, so p = 0 is the minimum and p = 100 the
//! maximum. An empty series has no percentile; callers decide how to
//! display that (tables show 0).

/// A series sorted once for repeated percentile queries.
#[derive(Debug, Clone)]
pub struct SortedSeries {
    sorted: Vec<f64>,
}

impl SortedSeries {
    /// Sort `samples`, dropping NaN and infinities. `None` when nothing
    /// remains.
    pub fn new(samples: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);
        Some(Self { sorted })
    }

    /// The p-th percentile, p clamped to [0, 100].
    pub fn percentile(&self, p: f64) -> f64 {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 100.0) };
        let last = self.sorted.len() - 1;
        let rank = p / 100.0 * last as f64;
        let lo = rank.floor() as usize;
        let hi = (rank.ceil() as usize).min(last);
        let (a, b) = (self.sorted[lo], self.sorted[hi]);
        let value = a + (b - a) * (rank - lo as f64);
        value.clamp(a, b)
    }

    /// Smallest sample.
    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    /// Largest sample.
    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Always false; empty series are not representable.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

/// The p-th percentile of `samples`, or `None` ("no data") when empty.
pub fn percentile(samples: &[f64], p: f64) -> Option<f64> {
    SortedSeries::new(samples).map(|s| s.percentile(p))
}

/// The p-th percentile of `samples`, 0 when empty.
pub fn percentile_or_zero(samples: &[f64], p: f64) -> f64 {
    percentile(samples, p).unwrap_or(0.0)
}

/// `(p, value)` points for p in `0..limit`; empty when there is no data.
pub fn percentile_curve(samples: &[f64], limit: u32) -> Vec<(f64, f64)> {
    match SortedSeries::new(samples) {
        Some(sorted) => (0..limit)
            .map(|p| (p as f64, sorted.percentile(p as f64)))
            .collect(),
        None => Vec::new(),
    }
}

/// Geometric mean of value/baseline ratios.
///
/// Pairs where either side is zero are skipped and do not count, so a
/// benchmark missing from one configuration does not drag the mean to 0.
#[derive(Debug, Clone, Copy)]
pub struct GeometricMean {
    product: f64,
    count: u32,
}

impl Default for GeometricMean {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometricMean {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self {
            product: 1.0,
            count: 0,
        }
    }

    /// Add one benchmark's value against its baseline.
    pub fn push(&mut self, value: f64, baseline: f64) {
        if value != 0.0 && baseline != 0.0 {
            self.product *= value / baseline;
            self.count += 1;
        }
    }

    /// Number of contributing benchmarks.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The mean ratio, `None` when nothing contributed.
    pub fn finish(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.product.powf(1.0 / self.count as f64))
        }
    }
}

/// Geometric mean over `(value, baseline)` pairs.
pub fn geometric_mean(pairs: &[(f64, f64)]) -> Option<f64> {
    let mut mean = GeometricMean::new();
    for &(value, baseline) in pairs {
        mean.push(value, baseline);
    }
    mean.finish()
}

/// `(x / b - 1) * 100`, `None` when the baseline is zero.
pub fn percent_difference(x: f64, baseline: f64) -> Option<f64> {
    if baseline == 0.0 {
        None
    } else {
        Some((x / baseline - 1.0) * 100.0)
    }
}

/// Percentile of the element-wise mark/total ratio.
///
/// Collections with a zero total are skipped.
pub fn mark_share_percentile(marks: &[f64], totals: &[f64], p: f64) -> Option<f64> {
    let ratios: Vec<f64> = marks
        .iter()
        .zip(totals)
        .filter(|(_, total)| **total != 0.0)
        .map(|(mark, total)| mark / total)
        .collect();
    percentile(&ratios, p)
}

/// percentile(mark) / percentile(total), each taken separately.
///
/// Differs from [`mark_share_percentile`] in general; both are reported.
pub fn mark_over_total_percentile(marks: &[f64], totals: &[f64], p: f64) -> Option<f64> {
    let mark = percentile(marks, p)?;
    let total = percentile(totals, p)?;
    if total == 0.0 {
        None
    } else {
        Some(mark / total)
    }
}
