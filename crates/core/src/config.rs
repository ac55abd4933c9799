//! Report settings via `benchkit.toml`
//!
//! Every field has a default, so the file is optional. The CLI layer loads
//! it (or the defaults), applies flag overrides, and passes the result
//! explicitly into discovery and aggregation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "benchkit.toml";

/// Canonical benchmark suite, used to seed discovery order.
pub const DEFAULT_BENCHMARKS: &[&str] = &[
    "bounce.BounceBenchmark",
    "list.ListBenchmark",
    "queens.QueensBenchmark",
    "richards.RichardsBenchmark",
    "permute.PermuteBenchmark",
    "deltablue.DeltaBlueBenchmark",
    "tracer.TracerBenchmark",
    "json.JsonBenchmark",
    "sudoku.SudokuBenchmark",
    "brainfuck.BrainfuckBenchmark",
    "cd.CDBenchmark",
    "kmeans.KmeansBenchmark",
    "nbody.NbodyBenchmark",
    "rsc.RscBenchmark",
    "gcbench.GCBenchBenchmark",
    "mandelbrot.MandelbrotBenchmark",
];

/// Settings loaded from `benchkit.toml`.
///
/// # Example
///
/// ```toml
/// results_dir = "results"
/// percentiles = [50, 90, 99]
///
/// [aliases]
/// stable = "scala-native-0.3.9"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportSettings {
    /// Root of the results tree.
    pub results_dir: PathBuf,
    /// Directory that receives `summary_*` report directories.
    pub reports_dir: PathBuf,
    /// Percentile thresholds reported in the summary tables.
    pub percentiles: Vec<u8>,
    /// Samples kept from the end of each timing run.
    pub lookback: usize,
    /// Preferred run index for example plots.
    pub example_run: u32,
    /// Seed for benchmark discovery order.
    pub benchmarks: Vec<String>,
    /// Name prefixes expanded to full configuration names
    /// (`latest-gc` becomes `<aliases.latest>-gc`).
    pub aliases: BTreeMap<String, String>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        let mut aliases = BTreeMap::new();
        aliases.insert("stable".to_string(), "scala-native-0.3.9".to_string());
        aliases.insert(
            "latest".to_string(),
            "scala-native-0.4.0-SNAPSHOT".to_string(),
        );
        Self {
            results_dir: PathBuf::from("results"),
            reports_dir: PathBuf::from("reports"),
            percentiles: vec![50, 90, 99],
            lookback: 1000,
            example_run: 3,
            benchmarks: DEFAULT_BENCHMARKS.iter().map(|s| s.to_string()).collect(),
            aliases,
        }
    }
}

impl ReportSettings {
    /// Check that the settings describe a report that can be produced.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty percentile list, a percentile above
    /// 100, or a zero lookback window.
    pub fn validate(&self) -> Result<()> {
        if self.percentiles.is_empty() {
            return Err(Error::invalid_input("percentiles must not be empty"));
        }
        if let Some(p) = self.percentiles.iter().find(|p| **p > 100) {
            return Err(Error::invalid_input(format!(
                "percentile {} is outside 0..=100",
                p
            )));
        }
        if self.lookback == 0 {
            return Err(Error::invalid_input("lookback must be at least 1"));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# benchkit report configuration
#
# Root of the results tree written by the benchmark driver.
results_dir = "results"

# Reports are written to <reports_dir>/summary_<timestamp>_<comment>/
reports_dir = "reports"

# Percentiles shown in the comparison tables.
percentiles = [50, 90, 99]

# Only the last N samples of each run count towards percentiles.
lookback = 1000

# Run index used for example plots (falls back to lower indices).
example_run = 3

# Seed for benchmark ordering; discovered benchmarks not listed here
# are appended in the order they are found.
# benchmarks = ["bounce.BounceBenchmark", "list.ListBenchmark"]

# Configuration-name prefixes expanded on the command line.
[aliases]
stable = "scala-native-0.3.9"
latest = "scala-native-0.4.0-SNAPSHOT"
"#
    }

    /// Read and parse settings from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let settings: ReportSettings = toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load `path` when it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Expand an alias prefix (`latest-gc` becomes `<latest>-gc`).
    pub fn expand_alias(&self, name: &str) -> String {
        for (alias, target) in &self.aliases {
            if let Some(rest) = name.strip_prefix(alias.as_str()) {
                return format!("{}{}", target, rest);
            }
        }
        name.to_string()
    }
}
