//! Chart descriptions and the rendering seam
//!
//! Charts are plain data. A [`ChartBackend`] turns one into an image file;
//! the report only needs the file name it was written to.

use benchkit_core::Result;
use std::path::Path;

/// A bar series. Series sharing a `slot` are drawn at the same position,
/// later ones over earlier ones (stacked look).
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// Legend label
    pub label: String,
    /// Position within each category group
    pub slot: usize,
    /// One height per category
    pub values: Vec<f64>,
}

/// A line series of `(x, y)` points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    /// Legend label
    pub label: String,
    /// Points in drawing order
    pub points: Vec<(f64, f64)>,
}

/// What to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartKind {
    /// Grouped bars, one group per category
    Bars {
        /// Category labels along the x axis
        categories: Vec<String>,
        /// Bar series
        series: Vec<BarSeries>,
    },
    /// Line plot
    Lines {
        /// Line series
        series: Vec<LineSeries>,
    },
}

/// A titled chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// Title above the plot
    pub title: String,
    /// X axis label
    pub x_label: String,
    /// Y axis label
    pub y_label: String,
    /// Contents
    pub kind: ChartKind,
}

impl Chart {
    /// Grouped bar chart.
    pub fn bars(title: impl Into<String>, categories: Vec<String>, series: Vec<BarSeries>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            kind: ChartKind::Bars { categories, series },
        }
    }

    /// Line chart.
    pub fn lines(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        series: Vec<LineSeries>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            kind: ChartKind::Lines { series },
        }
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        match &self.kind {
            ChartKind::Bars { categories, series } => categories.is_empty() || series.is_empty(),
            ChartKind::Lines { series } => series.iter().all(|s| s.points.is_empty()),
        }
    }
}

/// Renders charts to image files.
pub trait ChartBackend {
    /// File extension of produced images, without the dot.
    fn extension(&self) -> &'static str;

    /// Write `chart` to `path`.
    fn render(&self, chart: &Chart, path: &Path) -> Result<()>;
}
