//! Report directory layout
//!
//! `<reports>/summary_<YYYYmmdd_HHMMSS>_<comment>/Readme.md`, with chart
//! files next to `Readme.md`.

use benchkit_core::{Configuration, Result};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Name of the summary document.
pub const README_NAME: &str = "Readme.md";

/// Timestamp format used in report directory names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Configuration ids joined by `_vs_`, with `/` replaced by `-`.
pub fn default_comment(configurations: &[Configuration]) -> String {
    configurations
        .iter()
        .map(|c| c.id().replace('/', "-"))
        .collect::<Vec<_>>()
        .join("_vs_")
}

/// `summary_<timestamp>_<comment>`; path separators in the comment are
/// replaced so the report stays one directory.
pub fn report_dir_name(now: &DateTime<Local>, comment: &str) -> String {
    let comment: String = comment
        .chars()
        .map(|c| if c == '/' || c == '\\' { '-' } else { c })
        .collect();
    format!("summary_{}_{}", now.format(TIMESTAMP_FORMAT), comment)
}

/// Create the report directory under `reports_root`.
pub fn create_report_dir(
    reports_root: &Path,
    now: &DateTime<Local>,
    comment: &str,
) -> Result<PathBuf> {
    let dir = reports_root.join(report_dir_name(now, comment));
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// File name for a chart, with characters that do not belong in file
/// names replaced.
pub fn chart_file_name(stem: &str, extension: &str) -> String {
    let stem: String = stem
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | ' ' => '_',
            c => c,
        })
        .collect();
    format!("{}.{}", stem, extension)
}
