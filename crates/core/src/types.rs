//! Core entities: configurations and benchmarks
//!
//! Both are read-only projections of the results tree. Discovery always
//! materializes them before they reach aggregation.

use crate::size::SizeRange;
use std::fmt;
use std::path::{Path, PathBuf};

/// A named benchmark-execution setup whose results live under its own
/// directory.
///
/// Top-level configurations sit directly under the results root.
/// Size-sweep children sit one level below their parent, in a
/// `size_<min>-<max>` directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    name: String,
    parent: Option<String>,
    size: Option<SizeRange>,
}

impl Configuration {
    /// A top-level configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            size: None,
        }
    }

    /// A size-sweep child of `parent`, stored in directory `dir_name`.
    pub fn size_child(
        parent: impl Into<String>,
        dir_name: impl Into<String>,
        size: SizeRange,
    ) -> Self {
        Self {
            name: dir_name.into(),
            parent: Some(parent.into()),
            size: Some(size),
        }
    }

    /// Directory name (for children, the `size_…` part only).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent configuration name, if this is a size-sweep child.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Size range, if this is a size-sweep child.
    pub fn size(&self) -> Option<SizeRange> {
        self.size
    }

    /// Identifier relative to the results root (`conf` or `conf/size_1g-1g`).
    pub fn id(&self) -> String {
        match &self.parent {
            Some(parent) => format!("{}/{}", parent, self.name),
            None => self.name.clone(),
        }
    }

    /// Directory holding this configuration's results.
    pub fn results_dir(&self, root: &Path) -> PathBuf {
        match &self.parent {
            Some(parent) => root.join(parent).join(&self.name),
            None => root.join(&self.name),
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// A benchmark program, identified by its fully-qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Benchmark {
    name: String,
}

impl Benchmark {
    /// Create a benchmark from its fully-qualified name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Fully-qualified name, e.g. `bounce.BounceBenchmark`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display name: everything before the first `.`.
    pub fn short_name(&self) -> &str {
        self.name.split('.').next().unwrap_or(&self.name)
    }

    /// Markdown heading anchor for this benchmark's section.
    pub fn anchor(&self) -> String {
        self.name.replace('.', "").to_lowercase()
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
