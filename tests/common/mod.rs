//! Shared test utilities for integration test suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use benchkit::ReportSettings;
use tempfile::TempDir;

// ============================================================================
// ResultsFixture - results tree in a temporary directory
// ============================================================================

/// A results tree and a reports directory under one temp dir.
pub struct ResultsFixture {
    pub dir: TempDir,
}

impl ResultsFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn results(&self) -> PathBuf {
        self.dir.path().join("results")
    }

    pub fn reports(&self) -> PathBuf {
        self.dir.path().join("reports")
    }

    /// Settings pointing at this fixture.
    pub fn settings(&self) -> ReportSettings {
        ReportSettings {
            results_dir: self.results(),
            reports_dir: self.reports(),
            ..ReportSettings::default()
        }
    }

    /// Write a timing file; `millis` are stored as nanoseconds.
    pub fn run(&self, conf: &str, bench: &str, run: u32, millis: &[f64]) -> &Self {
        let content: String = millis
            .iter()
            .map(|ms| format!("{}\n", (ms * 1e6) as u64))
            .collect();
        self.write(&format!("{}/{}/{}", conf, bench, run), &content);
        self
    }

    /// Write a GC stats file in milliseconds: `(timestamp, mark, sweep)`.
    pub fn gc_run(&self, conf: &str, bench: &str, run: u32, events: &[(f64, f64, f64)]) -> &Self {
        let mut content = String::from("timestamp_ms,mark_time_ms,sweep_time_ms\n");
        for (ts, mark, sweep) in events {
            content.push_str(&format!("{},{},{}\n", ts, mark, sweep));
        }
        self.write(&format!("{}/{}/{}.gc.csv", conf, bench, run), &content);
        self
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.results().join(rel);
        fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
        fs::write(path, content).expect("write file");
    }
}

/// The report directories under `reports`, sorted.
pub fn report_dirs(reports: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(reports) else {
        return Vec::new();
    };
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    dirs
}

/// Contents of `Readme.md` in `dir`.
pub fn readme(dir: &Path) -> String {
    fs::read_to_string(dir.join("Readme.md")).expect("read Readme.md")
}
