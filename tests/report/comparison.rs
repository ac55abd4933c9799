//! Timing comparison tables and per-benchmark sections.

use crate::common::*;
use benchkit::{generate_report, ReportRequest, SvgBackend};

fn request(confs: &[&str]) -> ReportRequest {
    ReportRequest {
        configurations: confs.iter().map(|c| c.to_string()).collect(),
        ..ReportRequest::default()
    }
}

#[test]
fn two_configurations_at_median() {
    let fx = ResultsFixture::new();
    fx.run("A", "list.ListBenchmark", 0, &[1.0, 2.0, 3.0]);
    fx.run("B", "list.ListBenchmark", 0, &[4.0, 5.0, 6.0]);

    let dir = generate_report(&fx.settings(), &request(&["A", "B"]), &SvgBackend).unwrap();
    let doc = readme(&dir);

    assert!(doc.contains("## Benchmark run time (ms) at 50 percentile"));
    assert!(doc.contains("|[list.ListBenchmark](#listlistbenchmark)|2.0000|5.0000|+150.00%|"));
    assert!(doc.contains("|**Geometrical mean**|||+150.00%|"));
    assert!(dir
        .file_name()
        .unwrap()
        .to_string_lossy()
        .ends_with("_A_vs_B"));
}

#[test]
fn faster_configuration_is_emphasized() {
    let fx = ResultsFixture::new();
    fx.run("A", "x.X", 0, &[4.0]);
    fx.run("B", "x.X", 0, &[2.0]);

    let dir = generate_report(&fx.settings(), &request(&["A", "B"]), &SvgBackend).unwrap();
    assert!(readme(&dir).contains("|4.0000|2.0000|__-50.00%__|"));
}

#[test]
fn only_the_tail_of_each_run_counts() {
    let fx = ResultsFixture::new();
    // warm-up samples before the last two
    fx.run("A", "x.X", 0, &[100.0, 90.0, 1.0, 2.0]);
    fx.run("B", "x.X", 0, &[1.0, 2.0]);

    let mut settings = fx.settings();
    settings.lookback = 2;
    let dir = generate_report(&settings, &request(&["A", "B"]), &SvgBackend).unwrap();
    assert!(readme(&dir).contains("|1.5000|1.5000|__0.00%__|"));
}

#[test]
fn section_omitted_without_example_run() {
    let fx = ResultsFixture::new();
    fx.run("A", "kept.Kept", 1, &[1.0]);
    fx.run("A", "late.Late", 7, &[1.0]);

    let dir = generate_report(&fx.settings(), &request(&["A"]), &SvgBackend).unwrap();
    let doc = readme(&dir);

    assert!(doc.contains("## kept.Kept\n"));
    assert!(doc.contains("![Chart](example_run_1_kept.Kept.svg)"));
    assert!(dir.join("example_run_1_kept.Kept.svg").is_file());
    // still in the tables, no detail section
    assert!(doc.contains("[late.Late](#latelate)"));
    assert!(!doc.contains("## late.Late\n"));
}

#[test]
fn benchmark_prefix_filter() {
    let fx = ResultsFixture::new();
    fx.run("A", "list.ListBenchmark", 0, &[1.0]);
    fx.run("A", "bounce.BounceBenchmark", 0, &[1.0]);

    let request = ReportRequest {
        benchmark_prefixes: vec!["bounce".into()],
        ..ReportRequest::default()
    };
    let doc = readme(&generate_report(&fx.settings(), &request, &SvgBackend).unwrap());
    assert!(doc.contains("bounce.BounceBenchmark"));
    assert!(!doc.contains("list.ListBenchmark"));
}

#[test]
fn csv_tables_on_request() {
    let fx = ResultsFixture::new();
    fx.run("A", "x.X", 0, &[1.0]);
    fx.run("B", "x.X", 0, &[2.0]);

    let mut request = request(&["A", "B"]);
    request.csv = true;
    let dir = generate_report(&fx.settings(), &request, &SvgBackend).unwrap();
    let csv = std::fs::read_to_string(dir.join("percentile_90.csv")).unwrap();
    assert_eq!(csv, "name,A,B\nx.X,1,2\n");
}

#[test]
fn settings_properties_shown_in_configuration_table() {
    let fx = ResultsFixture::new();
    fx.run("A", "x.X", 0, &[1.0]);
    fx.write("A/settings.properties", "name=scala-native\nruns=5\n");

    let doc = readme(&generate_report(&fx.settings(), &request(&["A"]), &SvgBackend).unwrap());
    assert!(doc.contains("|A|scala-native-r5|5|4000|"));
}
