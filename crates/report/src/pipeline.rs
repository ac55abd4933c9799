//! End-to-end report generation
//!
//! discover -> select -> load -> create directory -> assemble. The
//! selection is resolved before any result file is read, so an unknown
//! configuration never leaves a half-written report behind.

use crate::assembler::{ReportAssembler, ReportOptions};
use crate::chart::ChartBackend;
use crate::output::{create_report_dir, default_comment};
use benchkit_core::{ReportSettings, Result};
use benchkit_engine::{discover_benchmarks, discover_configurations, filter_benchmarks, ResultSet};
use benchkit_storage::ResultStore;
use chrono::{DateTime, Local};
use std::path::PathBuf;
use tracing::{info, warn};

/// One report invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportRequest {
    /// Requested configuration names; empty or `all` selects everything
    pub configurations: Vec<String>,
    /// Directory name suffix; defaults to the selected ids
    pub comment: Option<String>,
    /// Include GC charts and tables
    pub gc: bool,
    /// Also write CSV tables
    pub csv: bool,
    /// Benchmark name prefixes to keep
    pub benchmark_prefixes: Vec<String>,
}

/// Generate a report stamped with the current local time.
///
/// Returns the report directory.
pub fn generate_report(
    settings: &ReportSettings,
    request: &ReportRequest,
    backend: &dyn ChartBackend,
) -> Result<PathBuf> {
    generate_report_at(settings, request, backend, &Local::now())
}

/// Generate a report stamped with `now`.
pub fn generate_report_at(
    settings: &ReportSettings,
    request: &ReportRequest,
    backend: &dyn ChartBackend,
    now: &DateTime<Local>,
) -> Result<PathBuf> {
    settings.validate()?;

    let tree = discover_configurations(&settings.results_dir);
    let selected = tree.resolve_selection(&request.configurations, settings)?;
    info!(
        target: "benchkit::report",
        configurations = %selected.iter().map(|c| c.id()).collect::<Vec<_>>().join(", "),
        "Selected configurations"
    );

    let store = ResultStore::new(&settings.results_dir, settings.lookback);
    let benchmarks = filter_benchmarks(
        discover_benchmarks(&store, &tree, &selected, &settings.benchmarks),
        &request.benchmark_prefixes,
    );
    if benchmarks.is_empty() {
        warn!(target: "benchkit::report", "No benchmarks found for the selection");
    }
    info!(
        target: "benchkit::report",
        benchmarks = benchmarks.len(),
        gc = request.gc,
        "Loading results"
    );
    let set = ResultSet::load(&store, &selected, &benchmarks, request.gc);

    let comment = request
        .comment
        .clone()
        .unwrap_or_else(|| default_comment(&selected));
    let dir = create_report_dir(&settings.reports_dir, now, &comment)?;
    info!(target: "benchkit::report", dir = %dir.display(), "Created report directory");

    let options = ReportOptions {
        gc: request.gc,
        csv: request.csv,
        percentiles: settings.percentiles.clone(),
        example_run: settings.example_run,
    };
    ReportAssembler::new(&store, &set, tree.selected_sweeps(&selected), backend, &options)
        .write(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::SvgBackend;
    use benchkit_core::Error;
    use chrono::TimeZone;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn settings(dir: &TempDir) -> ReportSettings {
        ReportSettings {
            results_dir: dir.path().join("results"),
            reports_dir: dir.path().join("reports"),
            ..ReportSettings::default()
        }
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).single().unwrap()
    }

    #[test]
    fn writes_readme_and_charts() {
        let dir = TempDir::new().unwrap();
        let results = dir.path().join("results");
        write(&results, "a/list.ListBenchmark/0", "1000000\n2000000\n3000000\n");
        write(&results, "b/list.ListBenchmark/0", "4000000\n5000000\n6000000\n");

        let request = ReportRequest {
            configurations: vec!["a".into(), "b".into()],
            csv: true,
            ..ReportRequest::default()
        };
        let out = generate_report_at(&settings(&dir), &request, &SvgBackend, &now()).unwrap();

        assert!(out.ends_with("summary_20240305_140709_a_vs_b"));
        let readme = fs::read_to_string(out.join("Readme.md")).unwrap();
        assert!(readme.starts_with("# Summary\n"));
        assert!(readme.contains(
            "|[list.ListBenchmark](#listlistbenchmark)|2.0000|5.0000|+150.00%|"
        ));
        assert!(readme.contains("![Chart](relative_percentile_50.svg)"));
        assert!(readme.contains("## list.ListBenchmark\n"));
        assert!(readme.contains("![Chart](example_run_0_list.ListBenchmark.svg)"));
        assert!(!readme.contains("GC time"));
        assert!(out.join("relative_percentile_50.svg").is_file());
        assert!(out.join("percentile_list.ListBenchmark.svg").is_file());
        assert!(out.join("percentile_50.csv").is_file());
    }

    #[test]
    fn unknown_configuration_creates_nothing() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("results"), "a/x.X/0", "1000000\n");

        let request = ReportRequest {
            configurations: vec!["missing".into()],
            ..ReportRequest::default()
        };
        let err = generate_report_at(&settings(&dir), &request, &SvgBackend, &now()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
        assert!(!dir.path().join("reports").exists());
    }

    #[test]
    fn comment_overrides_directory_suffix() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("results"), "a/x.X/0", "1000000\n");

        let request = ReportRequest {
            comment: Some("nightly".into()),
            ..ReportRequest::default()
        };
        let out = generate_report_at(&settings(&dir), &request, &SvgBackend, &now()).unwrap();
        assert!(out.ends_with("summary_20240305_140709_nightly"));
    }
}
