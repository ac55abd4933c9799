//! Result-file storage for benchkit
//!
//! This crate reads what the benchmark driver wrote:
//! - ResultStore: directory layout, run enumeration, soft-fail loading
//! - RunSeries: per-run timing samples, normalized to milliseconds
//! - GcEventSeries: per-run GC mark/sweep records
//! - units: column unit suffixes (`ms`, `us`, `ns`) and GC CSV headers
//! - settings: per-configuration `settings.properties`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod gc;
pub mod settings;
pub mod store;
pub mod timing;
pub mod units;

pub use gc::{GcEvent, GcEventSeries};
pub use settings::{ConfigurationSettings, DEFAULT_BATCHES, DEFAULT_RUNS, SETTINGS_FILE_NAME};
pub use store::{parse_run_index, subdirectories, ResultStore, GC_SUFFIX};
pub use timing::RunSeries;
pub use units::{nanos_to_millis, parse_column, GcHeader, HeaderError, TimeUnit};
