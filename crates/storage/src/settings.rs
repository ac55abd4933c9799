//! Per-configuration `settings.properties`
//!
//! The benchmark driver records the run parameters next to the results:
//!
//! ```text
//! name=scala-native-0.3.9
//! batches=4000
//! runs=20
//! ```

use tracing::debug;

/// File name inside a configuration's results directory.
pub const SETTINGS_FILE_NAME: &str = "settings.properties";

/// Batches per run when the file does not say otherwise.
pub const DEFAULT_BATCHES: u32 = 4000;

/// Runs per benchmark when the file does not say otherwise.
pub const DEFAULT_RUNS: u32 = 20;

/// Run parameters of one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationSettings {
    /// Configuration name as recorded by the driver
    pub name: String,
    /// Batches per run
    pub batches: u32,
    /// Runs per benchmark
    pub runs: u32,
}

impl ConfigurationSettings {
    /// Defaults for a configuration without a settings file.
    pub fn defaults(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            batches: DEFAULT_BATCHES,
            runs: DEFAULT_RUNS,
        }
    }

    /// Parse `key=value` lines; unknown keys and malformed lines are
    /// ignored, missing keys keep their defaults.
    pub fn parse(fallback_name: &str, content: &str) -> Self {
        let mut settings = Self::defaults(fallback_name);
        for line in content.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "name" if !value.is_empty() => settings.name = value.to_string(),
                "batches" => match value.parse() {
                    Ok(batches) => settings.batches = batches,
                    Err(_) => debug!(value, "Ignoring invalid batches setting"),
                },
                "runs" => match value.parse() {
                    Ok(runs) => settings.runs = runs,
                    Err(_) => debug!(value, "Ignoring invalid runs setting"),
                },
                _ => {}
            }
        }
        settings
    }

    /// Name with `-r<runs>` / `-b<batches>` suffixes for non-default values.
    pub fn full_name(&self) -> String {
        let mut full = self.name.clone();
        if self.runs != DEFAULT_RUNS {
            full.push_str(&format!("-r{}", self.runs));
        }
        if self.batches != DEFAULT_BATCHES {
            full.push_str(&format!("-b{}", self.batches));
        }
        full
    }
}
