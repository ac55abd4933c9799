//! GC tables and charts.

use crate::common::*;
use benchkit::{generate_report, ReportRequest, SvgBackend};

fn gc_request() -> ReportRequest {
    ReportRequest {
        configurations: vec!["A".into(), "B".into()],
        gc: true,
        ..ReportRequest::default()
    }
}

#[test]
fn gc_tables_have_mark_sweep_and_total() {
    let fx = ResultsFixture::new();
    fx.run("A", "x.X", 0, &[1.0]);
    fx.run("B", "x.X", 0, &[1.0]);
    fx.gc_run("A", "x.X", 0, &[(0.0, 1.0, 1.0)]);
    fx.gc_run("B", "x.X", 0, &[(5.0, 2.0, 1.0)]);

    let dir = generate_report(&fx.settings(), &gc_request(), &SvgBackend).unwrap();
    let doc = readme(&dir);

    assert!(doc.contains("## GC time (ms) at 50 percentile"));
    assert!(doc.contains("|[x.X](#xx)|mark|1.0000|2.0000|+100.00%|"));
    assert!(doc.contains("||sweep|1.0000|1.0000|__0.00%__|"));
    assert!(doc.contains("||total|2.0000|3.0000|+50.00%|"));
    assert!(dir.join("relative_gc_percentile_50.svg").is_file());
    assert!(dir.join("gc_pause_times_x.X.svg").is_file());
    assert!(dir.join("example_gc_run_0_x.X.svg").is_file());
}

#[test]
fn missing_gc_files_show_zero() {
    let fx = ResultsFixture::new();
    fx.run("A", "x.X", 0, &[1.0]);
    fx.run("B", "x.X", 0, &[1.0]);
    fx.gc_run("A", "x.X", 0, &[(0.0, 1.0, 1.0)]);

    let doc = readme(&generate_report(&fx.settings(), &gc_request(), &SvgBackend).unwrap());
    assert!(doc.contains("||total|2.0000|0.0000|__-100.00%__|"));
}

#[test]
fn no_gc_sections_without_flag() {
    let fx = ResultsFixture::new();
    fx.run("A", "x.X", 0, &[1.0]);
    fx.gc_run("A", "x.X", 0, &[(0.0, 1.0, 1.0)]);

    let request = ReportRequest {
        configurations: vec!["A".into()],
        ..ReportRequest::default()
    };
    let dir = generate_report(&fx.settings(), &request, &SvgBackend).unwrap();
    assert!(!readme(&dir).contains("GC time"));
    assert!(!dir.join("example_gc_run_0_x.X.svg").exists());
}
