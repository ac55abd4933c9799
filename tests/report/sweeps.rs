//! Heap size sweeps.

use crate::common::*;
use benchkit::{generate_report, ReportRequest, SvgBackend};

#[test]
fn size_sweep_charts_for_fixed_sizes() {
    let fx = ResultsFixture::new();
    fx.run("immix/size_512m-512m", "x.X", 0, &[4.0]);
    fx.run("immix/size_1g-1g", "x.X", 0, &[2.0]);
    fx.run("immix/size_1g-2g", "x.X", 0, &[9.0]);

    let request = ReportRequest {
        configurations: vec!["immix".into()],
        ..ReportRequest::default()
    };
    let dir = generate_report(&fx.settings(), &request, &SvgBackend).unwrap();
    let doc = readme(&dir);

    assert!(doc.contains("# Size sweeps\n"));
    assert!(doc.contains("![Chart](size_x.X_50.svg)"));
    let svg = std::fs::read_to_string(dir.join("size_x.X_50.svg")).unwrap();
    assert!(svg.contains("Heap size (GB)"));
}

#[test]
fn no_size_sweep_section_without_sweeps() {
    let fx = ResultsFixture::new();
    fx.run("A", "x.X", 0, &[1.0]);

    let request = ReportRequest {
        configurations: vec!["A".into()],
        ..ReportRequest::default()
    };
    let doc = readme(&generate_report(&fx.settings(), &request, &SvgBackend).unwrap());
    assert!(!doc.contains("# Size sweeps"));
}
