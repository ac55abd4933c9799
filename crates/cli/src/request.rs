//! ArgMatches → settings and report request.

use std::path::{Path, PathBuf};

use benchkit_core::{ReportSettings, CONFIG_FILE_NAME};
use benchkit_report::ReportRequest;
use clap::ArgMatches;
use tracing::Level;

/// Log level from `-v` / `-q`; warnings by default.
pub fn log_level(matches: &ArgMatches) -> Level {
    if matches.get_flag("quiet") {
        return Level::ERROR;
    }
    match matches.get_count("verbose") {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Load settings from `--config`, else `benchkit.toml` in the working
/// directory if it exists, then apply directory overrides.
pub fn load_settings(matches: &ArgMatches) -> benchkit_core::Result<ReportSettings> {
    let mut settings = match matches.get_one::<String>("config") {
        Some(path) => ReportSettings::from_file(Path::new(path))?,
        None => ReportSettings::load_or_default(Path::new(CONFIG_FILE_NAME))?,
    };
    if let Some(results) = matches.get_one::<String>("results") {
        settings.results_dir = PathBuf::from(results);
    }
    if let Some(reports) = matches.get_one::<String>("reports") {
        settings.reports_dir = PathBuf::from(reports);
    }
    Ok(settings)
}

/// The report request described by the command line.
pub fn report_request(matches: &ArgMatches) -> ReportRequest {
    let strings = |id: &str| -> Vec<String> {
        matches
            .get_many::<String>(id)
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    };
    ReportRequest {
        configurations: strings("configurations"),
        comment: matches.get_one::<String>("comment").cloned(),
        gc: matches.get_flag("gc"),
        csv: matches.get_flag("csv"),
        benchmark_prefixes: strings("benchmark"),
    }
}
