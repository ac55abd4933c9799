//! Baseline-relative comparison values
//!
//! A [`PercentileTable`] holds one scalar per (benchmark, configuration) at
//! a fixed percentile. Column 0 is the baseline; every other column is
//! compared against it.

use crate::stats::{percent_difference, GeometricMean};
use benchkit_core::{Benchmark, Error, Result};
use std::fmt;

/// Percent-difference text:
/// `+50.00%` when above baseline, `__-50.00%__` otherwise, `N/A` when
/// there is no baseline.
pub fn format_percent(diff: Option<f64>) -> String {
    match diff {
        None => "N/A".to_string(),
        Some(d) if d > 0.0 => format!("+{:.2}%", d),
        Some(d) => format!("__{:.2}%__", d),
    }
}

/// Four-decimal value text used in tables.
pub fn format_value(value: f64) -> String {
    format!("{:.4}", value)
}

/// A value compared against its baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonCell {
    /// Comparand
    pub value: f64,
    /// Baseline value for the same benchmark
    pub baseline: f64,
}

impl ComparisonCell {
    /// Compare `value` against `baseline`.
    pub fn new(value: f64, baseline: f64) -> Self {
        Self { value, baseline }
    }

    /// Percent difference, `None` when the baseline is zero.
    pub fn percent_diff(&self) -> Option<f64> {
        percent_difference(self.value, self.baseline)
    }

    /// True when the baseline is zero.
    pub fn is_not_applicable(&self) -> bool {
        self.percent_diff().is_none()
    }
}

impl fmt::Display for ComparisonCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_percent(self.percent_diff()))
    }
}

/// One row of a [`PercentileTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Benchmark this row describes
    pub benchmark: Benchmark,
    /// One value per configuration, baseline first; 0 for "no data"
    pub values: Vec<f64>,
}

impl TableRow {
    /// Baseline value.
    pub fn baseline(&self) -> f64 {
        self.values.first().copied().unwrap_or(0.0)
    }

    /// Comparison cells for every non-baseline configuration.
    pub fn cells(&self) -> Vec<ComparisonCell> {
        let baseline = self.baseline();
        self.values
            .iter()
            .skip(1)
            .map(|v| ComparisonCell::new(*v, baseline))
            .collect()
    }
}

/// Values of every (benchmark, configuration) pair at one percentile.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentileTable {
    /// Percentile threshold
    pub percentile: u8,
    /// Configuration ids, baseline first
    pub configurations: Vec<String>,
    /// One row per benchmark
    pub rows: Vec<TableRow>,
}

impl PercentileTable {
    /// Empty table for `configurations`.
    pub fn new(percentile: u8, configurations: Vec<String>) -> Self {
        Self {
            percentile,
            configurations,
            rows: Vec::new(),
        }
    }

    /// Append a benchmark row.
    ///
    /// # Errors
    ///
    /// Fails when `values` does not hold one value per configuration.
    pub fn push(&mut self, benchmark: Benchmark, values: Vec<f64>) -> Result<()> {
        if values.len() != self.configurations.len() {
            return Err(Error::invalid_input(format!(
                "row for {} has {} values, expected {}",
                benchmark,
                values.len(),
                self.configurations.len()
            )));
        }
        self.rows.push(TableRow { benchmark, values });
        Ok(())
    }

    /// Baseline configuration id.
    pub fn baseline(&self) -> Option<&str> {
        self.configurations.first().map(String::as_str)
    }

    /// Per non-baseline configuration: geometric mean of value/baseline
    /// across benchmarks, `None` when no benchmark has both values.
    pub fn geometric_means(&self) -> Vec<Option<f64>> {
        (1..self.configurations.len())
            .map(|column| {
                let mut mean = GeometricMean::new();
                for row in &self.rows {
                    if let Some(value) = row.values.get(column) {
                        mean.push(*value, row.baseline());
                    }
                }
                mean.finish()
            })
            .collect()
    }

    /// Geometric means as comparison cells against a ratio of 1.0.
    pub fn geometric_mean_cells(&self) -> Vec<Option<ComparisonCell>> {
        self.geometric_means()
            .into_iter()
            .map(|mean| mean.map(|m| ComparisonCell::new(m, 1.0)))
            .collect()
    }
}
