//! ResultStore: read access to the results tree
//!
//! Layout:
//!
//! ```text
//! <root>/<configuration>/<benchmark>/<run>          timing samples (ns per line)
//! <root>/<configuration>/<benchmark>/<run>.gc.csv   GC stats
//! <root>/<configuration>/settings.properties        run parameters
//! ```
//!
//! Nothing here fails on missing data. Absent directories list as
//! empty, absent run files load as `None`, and unreadable or malformed
//! files are logged and contribute no samples.

use crate::gc::GcEventSeries;
use crate::settings::{ConfigurationSettings, SETTINGS_FILE_NAME};
use crate::timing::RunSeries;
use benchkit_core::{Benchmark, Configuration, SIZE_PREFIX};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Suffix of GC stats files.
pub const GC_SUFFIX: &str = ".gc.csv";

/// Read-only view over a results directory.
#[derive(Debug, Clone)]
pub struct ResultStore {
    root: PathBuf,
    lookback: usize,
}

impl ResultStore {
    /// Open a results tree. `lookback` is the number of trailing samples
    /// per run used for statistics.
    pub fn new(root: impl Into<PathBuf>, lookback: usize) -> Self {
        Self {
            root: root.into(),
            lookback,
        }
    }

    /// Root of the results tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Trailing window applied by [`timing_samples`](Self::timing_samples).
    pub fn lookback(&self) -> usize {
        self.lookback
    }

    /// Directory of one (configuration, benchmark) pair.
    pub fn benchmark_dir(&self, conf: &Configuration, bench: &Benchmark) -> PathBuf {
        conf.results_dir(&self.root).join(bench.name())
    }

    /// Benchmark directories of a configuration, sorted by name.
    ///
    /// Size-sweep children are not benchmarks and are skipped.
    pub fn benchmarks(&self, conf: &Configuration) -> Vec<Benchmark> {
        subdirectories(&conf.results_dir(&self.root))
            .into_iter()
            .filter(|name| !name.starts_with(SIZE_PREFIX))
            .map(Benchmark::new)
            .collect()
    }

    /// Indices of timing files (bare numeric names), ascending.
    pub fn run_indices(&self, conf: &Configuration, bench: &Benchmark) -> Vec<u32> {
        self.indices(conf, bench, parse_run_index)
    }

    /// Indices of `<run>.gc.csv` files, ascending.
    pub fn gc_run_indices(&self, conf: &Configuration, bench: &Benchmark) -> Vec<u32> {
        self.indices(conf, bench, |name| parse_run_index(name.strip_suffix(GC_SUFFIX)?))
    }

    fn indices<F>(&self, conf: &Configuration, bench: &Benchmark, parse: F) -> Vec<u32>
    where
        F: Fn(&str) -> Option<u32>,
    {
        let mut indices: Vec<u32> = files(&self.benchmark_dir(conf, bench))
            .iter()
            .filter_map(|name| parse(name))
            .collect();
        indices.sort_unstable();
        indices
    }

    /// True when the timing file for `run` exists.
    pub fn has_run(&self, conf: &Configuration, bench: &Benchmark, run: u32) -> bool {
        self.benchmark_dir(conf, bench)
            .join(run.to_string())
            .is_file()
    }

    /// Load one timing file, untruncated. `None` when it does not exist.
    pub fn load_run(&self, conf: &Configuration, bench: &Benchmark, run: u32) -> Option<RunSeries> {
        let path = self.benchmark_dir(conf, bench).join(run.to_string());
        read_optional(&path).map(|content| RunSeries::parse(&content))
    }

    /// Steady-state samples of every run: each run truncated to its last
    /// `lookback` samples, runs concatenated in index order.
    pub fn timing_samples(&self, conf: &Configuration, bench: &Benchmark) -> Vec<f64> {
        let mut out = Vec::new();
        for run in self.run_indices(conf, bench) {
            if let Some(series) = self.load_run(conf, bench, run) {
                out.extend_from_slice(series.tail(self.lookback));
            }
        }
        out
    }

    /// Load one GC stats file. `None` when it does not exist; an empty
    /// series when its header is not recognized.
    pub fn load_gc_run(
        &self,
        conf: &Configuration,
        bench: &Benchmark,
        run: u32,
    ) -> Option<GcEventSeries> {
        let path = self
            .benchmark_dir(conf, bench)
            .join(format!("{}{}", run, GC_SUFFIX));
        let content = read_optional(&path)?;
        match GcEventSeries::parse(&content) {
            Ok(series) => Some(series),
            Err(e) => {
                warn!(
                    target: "benchkit::store",
                    path = %path.display(),
                    error = %e,
                    "Unrecognized GC stats header, ignoring file"
                );
                Some(GcEventSeries::default())
            }
        }
    }

    /// GC events of every run concatenated (no truncation).
    pub fn gc_samples(&self, conf: &Configuration, bench: &Benchmark) -> GcEventSeries {
        let mut out = GcEventSeries::default();
        for run in self.gc_run_indices(conf, bench) {
            if let Some(series) = self.load_gc_run(conf, bench, run) {
                out.extend(series);
            }
        }
        out
    }

    /// Run parameters from `settings.properties`, defaults when absent.
    pub fn read_settings(&self, conf: &Configuration) -> ConfigurationSettings {
        let path = conf.results_dir(&self.root).join(SETTINGS_FILE_NAME);
        match read_optional(&path) {
            Some(content) => ConfigurationSettings::parse(&conf.id(), &content),
            None => ConfigurationSettings::defaults(conf.id()),
        }
    }

    /// Benchmarks for which every run `0..runs` is present.
    pub fn finished_benchmarks(&self, conf: &Configuration) -> Vec<Benchmark> {
        let runs = self.read_settings(conf).runs;
        self.benchmarks(conf)
            .into_iter()
            .filter(|bench| (0..runs).all(|run| self.has_run(conf, bench, run)))
            .collect()
    }
}

/// Run index of a file name written as `run.to_string()` would write it.
///
/// Signs and leading zeros are rejected, so every index maps back to
/// exactly one file.
pub fn parse_run_index(name: &str) -> Option<u32> {
    let canonical = !name.is_empty()
        && name.bytes().all(|b| b.is_ascii_digit())
        && (name == "0" || !name.starts_with('0'));
    if !canonical {
        return None;
    }
    name.parse().ok()
}

/// Sorted names of the subdirectories of `dir`; empty when `dir` is
/// missing.
pub fn subdirectories(dir: &Path) -> Vec<String> {
    list_dir(dir, true)
}

fn files(dir: &Path) -> Vec<String> {
    list_dir(dir, false)
}

fn list_dir(dir: &Path, want_dirs: bool) -> Vec<String> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(
                    target: "benchkit::store",
                    path = %dir.display(),
                    error = %e,
                    "Cannot list directory"
                );
            }
            return Vec::new();
        }
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_type()
                .map(|t| t.is_dir() == want_dirs)
                .unwrap_or(false)
        })
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    names
}

fn read_optional(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(target: "benchkit::store", path = %path.display(), "No such result file");
            None
        }
        Err(e) => {
            warn!(
                target: "benchkit::store",
                path = %path.display(),
                error = %e,
                "Cannot read result file"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn lines(values: impl IntoIterator<Item = u64>) -> String {
        values
            .into_iter()
            .map(|v| format!("{}\n", v))
            .collect()
    }

    #[test]
    fn missing_tree_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = ResultStore::new(dir.path().join("results"), 1000);
        let conf = Configuration::new("a");
        let bench = Benchmark::new("x.X");
        assert!(store.benchmarks(&conf).is_empty());
        assert!(store.run_indices(&conf, &bench).is_empty());
        assert!(store.load_run(&conf, &bench, 0).is_none());
        assert!(store.timing_samples(&conf, &bench).is_empty());
        assert!(store.gc_samples(&conf, &bench).is_empty());
    }

    #[test]
    fn run_indices_ignore_other_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a/x.X/0", "1\n");
        write(dir.path(), "a/x.X/10", "1\n");
        write(dir.path(), "a/x.X/2", "1\n");
        write(dir.path(), "a/x.X/2.gc.csv", "mark_time_us,sweep_time_us\n");
        write(dir.path(), "a/x.X/notes.txt", "hi\n");
        let store = ResultStore::new(dir.path(), 1000);
        let conf = Configuration::new("a");
        let bench = Benchmark::new("x.X");
        assert_eq!(store.run_indices(&conf, &bench), vec![0, 2, 10]);
        assert_eq!(store.gc_run_indices(&conf, &bench), vec![2]);
    }

    #[test]
    fn run_index_names_are_canonical() {
        assert_eq!(parse_run_index("0"), Some(0));
        assert_eq!(parse_run_index("17"), Some(17));
        assert_eq!(parse_run_index("03"), None);
        assert_eq!(parse_run_index("+3"), None);
        assert_eq!(parse_run_index("00"), None);
        assert_eq!(parse_run_index(""), None);
        assert_eq!(parse_run_index("99999999999"), None);
    }

    #[test]
    fn equivalent_numeric_names_are_not_double_counted() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a/x.X/3", &lines([1_000_000]));
        write(dir.path(), "a/x.X/03", &lines([9_000_000]));
        write(dir.path(), "a/x.X/+3", &lines([9_000_000]));
        write(dir.path(), "a/x.X/03.gc.csv", "mark_time_ms,sweep_time_ms\n1,1\n");
        let store = ResultStore::new(dir.path(), 1000);
        let conf = Configuration::new("a");
        let bench = Benchmark::new("x.X");

        assert_eq!(store.run_indices(&conf, &bench), vec![3]);
        assert_eq!(store.timing_samples(&conf, &bench), vec![1.0]);
        assert!(store.gc_run_indices(&conf, &bench).is_empty());
    }

    #[test]
    fn timing_samples_truncate_each_run() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a/x.X/0", &lines((0..1500).map(|i| i * 1_000_000)));
        write(dir.path(), "a/x.X/1", &lines([7_000_000]));
        let store = ResultStore::new(dir.path(), 1000);
        let conf = Configuration::new("a");
        let bench = Benchmark::new("x.X");

        let samples = store.timing_samples(&conf, &bench);
        assert_eq!(samples.len(), 1001);
        assert_eq!(samples[0], 500.0);
        assert_eq!(samples[999], 1499.0);
        assert_eq!(samples[1000], 7.0);

        // The untruncated run is still available for example plots.
        assert_eq!(store.load_run(&conf, &bench, 0).unwrap().len(), 1500);
    }

    #[test]
    fn malformed_gc_file_contributes_nothing() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a/x.X/0.gc.csv", "when,what\n1,2\n");
        write(
            dir.path(),
            "a/x.X/1.gc.csv",
            "timestamp_us,collection,mark_time_us,sweep_time_us\n0,1,1000,3000\n",
        );
        let store = ResultStore::new(dir.path(), 1000);
        let conf = Configuration::new("a");
        let bench = Benchmark::new("x.X");

        assert!(store.load_gc_run(&conf, &bench, 0).unwrap().is_empty());
        let all = store.gc_samples(&conf, &bench);
        assert_eq!(all.totals(), vec![4.0]);
    }

    #[test]
    fn benchmarks_skip_size_children() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a/b.B/0", "1\n");
        write(dir.path(), "a/a.A/0", "1\n");
        write(dir.path(), "a/size_1g-1g/a.A/0", "1\n");
        write(dir.path(), "a/settings.properties", "name=a\n");
        let store = ResultStore::new(dir.path(), 1000);
        let names: Vec<String> = store
            .benchmarks(&Configuration::new("a"))
            .iter()
            .map(|b| b.name().to_string())
            .collect();
        assert_eq!(names, vec!["a.A", "b.B"]);
    }

    #[test]
    fn finished_benchmarks_require_all_runs() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a/settings.properties", "name=a\nruns=2\n");
        write(dir.path(), "a/done.D/0", "1\n");
        write(dir.path(), "a/done.D/1", "1\n");
        write(dir.path(), "a/partial.P/0", "1\n");
        let store = ResultStore::new(dir.path(), 1000);
        let conf = Configuration::new("a");

        assert_eq!(store.read_settings(&conf).runs, 2);
        let finished = store.finished_benchmarks(&conf);
        assert_eq!(finished, vec![Benchmark::new("done.D")]);
    }

    #[test]
    fn settings_default_when_missing() {
        let dir = TempDir::new().unwrap();
        let store = ResultStore::new(dir.path(), 1000);
        let settings = store.read_settings(&Configuration::new("a"));
        assert_eq!(settings.name, "a");
        assert_eq!(settings.full_name(), "a");
    }
}
