//! benchkit - benchmark result aggregation and comparative reporting
//!
//! benchkit reads the results tree written by a benchmark driver
//! (`<results>/<configuration>/<benchmark>/<run>`), reduces each
//! configuration's samples to percentiles and writes a markdown summary
//! with charts comparing every configuration against the first one.
//!
//! # Quick Start
//!
//! ```ignore
//! use benchkit::{generate_report, ReportRequest, ReportSettings, SvgBackend};
//!
//! let settings = ReportSettings::default();
//! let request = ReportRequest {
//!     configurations: vec!["stable".into(), "latest".into()],
//!     ..ReportRequest::default()
//! };
//! let dir = generate_report(&settings, &request, &SvgBackend)?;
//! ```

pub use benchkit_core::{Benchmark, Configuration, Error, ReportSettings, Result, SizeRange};
pub use benchkit_engine::{discover_benchmarks, discover_configurations, ResultSet, ResultTree};
pub use benchkit_report::{
    generate_report, generate_report_at, ChartBackend, ReportRequest, SvgBackend,
};
pub use benchkit_storage::ResultStore;
