//! Aggregation engine for benchkit
//!
//! - stats: percentiles, geometric means, percent differences
//! - compare: baseline-relative cells and percentile tables
//! - discovery: configurations, size sweeps, benchmarks, selection
//! - aggregate: loading the selected series and reducing them to tables

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregate;
pub mod compare;
pub mod discovery;
pub mod stats;

pub use aggregate::{size_sweep_points, GcRelative, GcTables, ResultSet};
pub use compare::{format_percent, format_value, ComparisonCell, PercentileTable, TableRow};
pub use discovery::{
    discover_benchmarks, discover_configurations, example_run_index, filter_benchmarks,
    ResultTree, SizeSweep, ALL,
};
pub use stats::{
    geometric_mean, mark_over_total_percentile, mark_share_percentile, percent_difference,
    percentile, percentile_curve, percentile_or_zero, GeometricMean, SortedSeries,
};
