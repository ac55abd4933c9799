//! Size-sweep naming convention
//!
//! Size-sweep child configurations live in directories named
//! `size_<min>-<max>`. Each bound is a number with an optional binary unit
//! suffix (`k`, `m`, `g`, case-insensitive); a bare number is bytes. Bounds
//! are normalized to gigabytes (2^30 bytes).

use crate::error::{Error, Result};
use std::fmt;

/// Directory-name prefix that marks a size-sweep child.
pub const SIZE_PREFIX: &str = "size_";

const KIB: f64 = 1024.0;
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// A resource-size range, both bounds in gigabytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeRange {
    /// Lower bound in GB
    pub min_gb: f64,
    /// Upper bound in GB
    pub max_gb: f64,
}

impl SizeRange {
    /// Parse a directory name such as `size_512m-1g`.
    pub fn parse(dir_name: &str) -> Result<Self> {
        let body = dir_name
            .strip_prefix(SIZE_PREFIX)
            .ok_or_else(|| Error::SizeRange(dir_name.to_string()))?;
        let (min, max) = body
            .split_once('-')
            .ok_or_else(|| Error::SizeRange(dir_name.to_string()))?;
        let min_gb = parse_size_gb(min).ok_or_else(|| Error::SizeRange(dir_name.to_string()))?;
        let max_gb = parse_size_gb(max).ok_or_else(|| Error::SizeRange(dir_name.to_string()))?;
        Ok(Self { min_gb, max_gb })
    }

    /// True when the range is a single point (min == max).
    ///
    /// Only fixed ranges take part in size-vs-metric comparisons.
    pub fn is_fixed(&self) -> bool {
        self.min_gb == self.max_gb
    }
}

impl fmt::Display for SizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fixed() {
            write!(f, "{}GB", self.min_gb)
        } else {
            write!(f, "{}-{}GB", self.min_gb, self.max_gb)
        }
    }
}

/// Parse one size bound (`512m`, `1G`, `4096`) into gigabytes.
pub fn parse_size_gb(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let last = raw.chars().last()?;
    let (number, multiplier) = match last {
        'k' | 'K' => (&raw[..raw.len() - 1], KIB),
        'm' | 'M' => (&raw[..raw.len() - 1], KIB * KIB),
        'g' | 'G' => (&raw[..raw.len() - 1], GIB),
        _ => (raw, 1.0),
    };
    let value: f64 = number.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value * multiplier / GIB)
}
