//! Configuration discovery and selection.

use crate::common::*;
use benchkit::{discover_configurations, generate_report, Error, ReportRequest, SvgBackend};

#[test]
fn unknown_configuration_fails_before_writing() {
    let fx = ResultsFixture::new();
    fx.run("A", "x.X", 0, &[1.0]);

    let request = ReportRequest {
        configurations: vec!["A".into(), "nope".into()],
        ..ReportRequest::default()
    };
    let err = generate_report(&fx.settings(), &request, &SvgBackend).unwrap_err();
    match err {
        Error::InvalidConfiguration { name, available } => {
            assert_eq!(name, "nope");
            assert!(available.contains('A'));
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert!(report_dirs(&fx.reports()).is_empty());
}

#[test]
fn empty_results_tree_is_an_error() {
    let fx = ResultsFixture::new();
    let err = generate_report(&fx.settings(), &ReportRequest::default(), &SvgBackend).unwrap_err();
    assert!(matches!(err, Error::NoConfigurations(_)));
}

#[test]
fn all_selects_every_configuration() {
    let fx = ResultsFixture::new();
    fx.run("b", "x.X", 0, &[1.0]);
    fx.run("a", "x.X", 0, &[1.0]);

    let request = ReportRequest {
        configurations: vec!["all".into()],
        ..ReportRequest::default()
    };
    let dir = generate_report(&fx.settings(), &request, &SvgBackend).unwrap();
    assert!(dir.to_string_lossy().ends_with("_a_vs_b"));
}

#[test]
fn aliases_expand_to_configuration_names() {
    let fx = ResultsFixture::new();
    fx.run("scala-native-0.3.9", "x.X", 0, &[1.0]);
    fx.run("scala-native-0.4.0-SNAPSHOT-gc", "x.X", 0, &[2.0]);

    let request = ReportRequest {
        configurations: vec!["stable".into(), "latest-gc".into()],
        ..ReportRequest::default()
    };
    let doc = readme(&generate_report(&fx.settings(), &request, &SvgBackend).unwrap());
    assert!(doc.contains("| scala-native-0.3.9 | scala-native-0.4.0-SNAPSHOT-gc |"));
}

#[test]
fn discovery_is_repeatable() {
    let fx = ResultsFixture::new();
    fx.run("A", "x.X", 0, &[1.0]);
    fx.run("B/size_1g-1g", "x.X", 0, &[1.0]);

    let first = discover_configurations(&fx.results());
    let second = discover_configurations(&fx.results());
    assert_eq!(first, second);
    assert_eq!(first.ids(), vec!["A", "B", "B/size_1g-1g"]);
}
