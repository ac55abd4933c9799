//! GC statistics files (`<run>.gc.csv`)

use crate::units::{Column, GcHeader, HeaderError};
use tracing::debug;

/// One garbage collection, all times in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GcEvent {
    /// Time of the collection (row position when the file has no
    /// timestamp column)
    pub timestamp: f64,
    /// Mark phase duration
    pub mark: f64,
    /// Sweep phase duration
    pub sweep: f64,
}

impl GcEvent {
    /// Total pause: mark + sweep.
    pub fn total(&self) -> f64 {
        self.mark + self.sweep
    }
}

/// Ordered GC events of one or more runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GcEventSeries {
    events: Vec<GcEvent>,
}

impl GcEventSeries {
    /// Parse CSV content: a header row followed by data rows.
    ///
    /// Rows with too few columns or non-numeric values are skipped.
    pub fn parse(content: &str) -> Result<Self, HeaderError> {
        let mut lines = content.lines();
        let header = GcHeader::parse(lines.next().unwrap_or(""))?;
        let mut events = Vec::new();
        for (position, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            let mark = read_field(&fields, header.mark);
            let sweep = read_field(&fields, header.sweep);
            let timestamp = match header.timestamp {
                Some(column) => read_field(&fields, column),
                None => Some(position as f64),
            };
            match (timestamp, mark, sweep) {
                (Some(timestamp), Some(mark), Some(sweep)) => events.push(GcEvent {
                    timestamp,
                    mark,
                    sweep,
                }),
                _ => debug!(row = position + 2, "Skipping malformed GC row"),
            }
        }
        Ok(Self { events })
    }

    /// Append another run's events.
    pub fn extend(&mut self, other: GcEventSeries) {
        self.events.extend(other.events);
    }

    /// All events in order.
    pub fn events(&self) -> &[GcEvent] {
        &self.events
    }

    /// Timestamps in milliseconds.
    pub fn timestamps(&self) -> Vec<f64> {
        self.events.iter().map(|e| e.timestamp).collect()
    }

    /// Mark times in milliseconds.
    pub fn marks(&self) -> Vec<f64> {
        self.events.iter().map(|e| e.mark).collect()
    }

    /// Sweep times in milliseconds.
    pub fn sweeps(&self) -> Vec<f64> {
        self.events.iter().map(|e| e.sweep).collect()
    }

    /// Total pause times (mark + sweep) in milliseconds.
    pub fn totals(&self) -> Vec<f64> {
        self.events.iter().map(GcEvent::total).collect()
    }

    /// Number of collections.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when there are no collections.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn read_field(fields: &[&str], column: Column) -> Option<f64> {
    let raw: f64 = fields.get(column.index)?.trim().parse().ok()?;
    raw.is_finite().then(|| column.unit.to_millis(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_microsecond_file() {
        let content = "timestamp_us,collection,mark_time_us,sweep_time_us\n\
                       1000,1,1500,500\n\
                       5000,2,2000,1000\n";
        let series = GcEventSeries::parse(content).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.timestamps(), vec![1.0, 5.0]);
        assert_eq!(series.marks(), vec![1.5, 2.0]);
        assert_eq!(series.sweeps(), vec![0.5, 1.0]);
        assert_eq!(series.totals(), vec![2.0, 3.0]);
    }

    #[test]
    fn columns_may_use_different_units() {
        let content = "sweep_time_ns,mark_time_ms\n2000000,3\n";
        let series = GcEventSeries::parse(content).unwrap();
        assert_eq!(series.events()[0].mark, 3.0);
        assert_eq!(series.events()[0].sweep, 2.0);
        assert_eq!(series.events()[0].timestamp, 0.0);
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let content = "mark_time_ms,sweep_time_ms\n1,1\nx,2\n3\n\n4,4\n";
        let series = GcEventSeries::parse(content).unwrap();
        assert_eq!(series.marks(), vec![1.0, 4.0]);
    }

    #[test]
    fn non_finite_fields_are_skipped() {
        let content = "mark_time_ms,sweep_time_ms\ninf,1\n2,NaN\n3,3\n";
        let series = GcEventSeries::parse(content).unwrap();
        assert_eq!(series.marks(), vec![3.0]);
    }

    #[test]
    fn unknown_header_is_an_error() {
        assert!(GcEventSeries::parse("a,b,c\n1,2,3\n").is_err());
        assert!(GcEventSeries::parse("").is_err());
    }

    #[test]
    fn extend_concatenates_runs() {
        let mut a = GcEventSeries::parse("mark_time_ms,sweep_time_ms\n1,1\n").unwrap();
        let b = GcEventSeries::parse("mark_time_ms,sweep_time_ms\n2,2\n").unwrap();
        a.extend(b);
        assert_eq!(a.totals(), vec![2.0, 4.0]);
    }
}
