//! Raw per-run timing files
//!
//! One duration in nanoseconds per line, in emission order.

use crate::units::nanos_to_millis;
use tracing::debug;

/// Samples of one (configuration, benchmark, run) in milliseconds.
///
/// Emission order is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSeries {
    samples: Vec<f64>,
}

impl RunSeries {
    /// Wrap already-normalized samples.
    pub fn from_millis(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    /// Parse timing-file content. Blank lines are skipped, as are lines
    /// that are not numbers.
    pub fn parse(content: &str) -> Self {
        let mut samples = Vec::new();
        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line.parse::<f64>() {
                Ok(raw) if raw.is_finite() => samples.push(nanos_to_millis(raw)),
                _ => debug!(line = lineno + 1, content = line, "Skipping non-numeric sample"),
            }
        }
        Self { samples }
    }

    /// All samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// The last `window` samples (steady state), or all if fewer.
    pub fn tail(&self, window: usize) -> &[f64] {
        let start = self.samples.len().saturating_sub(window);
        &self.samples[start..]
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the run produced no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
