//! benchkit: summarize benchmark results into a markdown report.
//!
//! `benchkit [CONFIGURATION...] [--gc] [--comment C] [--benchmark PREFIX]...`
//! compares the listed configurations (baseline first) and prints the
//! report directory.

mod commands;
mod request;

use std::process;

use benchkit_report::{generate_report, SvgBackend};

use commands::build_cli;
use request::{load_settings, log_level, report_request};

fn main() {
    let matches = build_cli().get_matches();

    tracing_subscriber::fmt()
        .with_max_level(log_level(&matches))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(&matches) {
        eprintln!("(error) {:#}", e);
        process::exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> anyhow::Result<()> {
    let settings = load_settings(matches)?;
    let request = report_request(matches);
    let dir = generate_report(&settings, &request, &SvgBackend)?;
    println!("{}", dir.display());
    Ok(())
}
