//! Core types for benchkit
//!
//! This crate defines the foundational types shared by every other crate:
//! - Configuration: a named benchmark setup, optionally a size-sweep child
//! - Benchmark: fully-qualified benchmark name plus its short display name
//! - SizeRange: the `size_<min>-<max>` naming convention, in gigabytes
//! - ReportSettings: `benchkit.toml` defaults passed through the pipeline
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod size;
pub mod types;

pub use config::{ReportSettings, CONFIG_FILE_NAME, DEFAULT_BENCHMARKS};
pub use error::{Error, Result};
pub use size::{parse_size_gb, SizeRange, SIZE_PREFIX};
pub use types::{Benchmark, Configuration};
