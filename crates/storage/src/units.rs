//! Duration units and GC CSV headers
//!
//! GC stats files declare their units per column: a column name is a
//! quantity and a unit joined by the last underscore (`mark_time_us`).
//! Everything is converted to milliseconds.

use std::fmt;
use thiserror::Error;

/// Nanoseconds per millisecond; timing files are always in ns.
pub const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// A duration unit that can appear as a column suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// `ms`
    Milliseconds,
    /// `us`
    Microseconds,
    /// `ns`
    Nanoseconds,
}

impl TimeUnit {
    /// Parse a column suffix.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "ms" => Some(TimeUnit::Milliseconds),
            "us" => Some(TimeUnit::Microseconds),
            "ns" => Some(TimeUnit::Nanoseconds),
            _ => None,
        }
    }

    /// Raw values are divided by this to reach milliseconds.
    pub fn divisor(self) -> f64 {
        match self {
            TimeUnit::Milliseconds => 1.0,
            TimeUnit::Microseconds => 1_000.0,
            TimeUnit::Nanoseconds => 1_000_000.0,
        }
    }

    /// Convert a raw value in this unit to milliseconds.
    pub fn to_millis(self, raw: f64) -> f64 {
        raw / self.divisor()
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Microseconds => "us",
            TimeUnit::Nanoseconds => "ns",
        };
        f.write_str(s)
    }
}

/// Convert a raw timing-file value (ns) to milliseconds.
pub fn nanos_to_millis(raw: f64) -> f64 {
    raw / NANOS_PER_MILLI
}

/// Split a column name at its last underscore into quantity and unit.
///
/// Returns `None` when there is no underscore or the suffix is not a
/// known unit.
pub fn parse_column(name: &str) -> Option<(&str, TimeUnit)> {
    let (quantity, suffix) = name.trim().rsplit_once('_')?;
    Some((quantity, TimeUnit::from_suffix(suffix)?))
}

/// A located, unit-tagged column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Zero-based index in the CSV row
    pub index: usize,
    /// Unit of the stored values
    pub unit: TimeUnit,
}

/// Header of a GC stats CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcHeader {
    /// `mark_time_<unit>`
    pub mark: Column,
    /// `sweep_time_<unit>`
    pub sweep: Column,
    /// `timestamp_<unit>`, if present
    pub timestamp: Option<Column>,
}

/// Why a GC header was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// The file had no header line
    #[error("missing header row")]
    Empty,
    /// One of the required columns is not present
    #[error("missing column '{0}_<ms|us|ns>' in header '{1}'")]
    MissingColumn(&'static str, String),
}

impl GcHeader {
    /// Locate the mark, sweep and timestamp columns in a header line.
    pub fn parse(line: &str) -> Result<Self, HeaderError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(HeaderError::Empty);
        }
        let mut mark = None;
        let mut sweep = None;
        let mut timestamp = None;
        for (index, name) in line.split(',').enumerate() {
            let Some((quantity, unit)) = parse_column(name) else {
                continue;
            };
            let column = Some(Column { index, unit });
            match quantity {
                "mark_time" if mark.is_none() => mark = column,
                "sweep_time" if sweep.is_none() => sweep = column,
                "timestamp" if timestamp.is_none() => timestamp = column,
                _ => {}
            }
        }
        let mark = mark.ok_or_else(|| HeaderError::MissingColumn("mark_time", line.to_string()))?;
        let sweep =
            sweep.ok_or_else(|| HeaderError::MissingColumn("sweep_time", line.to_string()))?;
        Ok(Self {
            mark,
            sweep,
            timestamp,
        })
    }
}
