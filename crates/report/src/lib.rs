//! Report generation for benchkit
//!
//! - chart: chart descriptions and the [`ChartBackend`] seam
//! - svg: the SVG backend
//! - table: markdown and CSV tables
//! - output: report directory naming
//! - assembler: the summary document
//! - pipeline: discover, select, load and write in one call

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assembler;
pub mod chart;
pub mod output;
pub mod pipeline;
pub mod svg;
pub mod table;

pub use assembler::{ReportAssembler, ReportOptions};
pub use chart::{BarSeries, Chart, ChartBackend, ChartKind, LineSeries};
pub use output::{create_report_dir, default_comment, report_dir_name, README_NAME};
pub use pipeline::{generate_report, generate_report_at, ReportRequest};
pub use svg::{render_svg, SvgBackend};
pub use table::{csv_table, markdown_gc_table, markdown_table};
