//! Loading and reducing the selected results
//!
//! [`ResultSet`] reads every (benchmark, configuration) series once and
//! derives the per-percentile tables and relative chart values from it.

use crate::compare::{PercentileTable, TableRow};
use crate::discovery::SizeSweep;
use crate::stats::{
    mark_over_total_percentile, mark_share_percentile, percentile, percentile_or_zero,
};
use benchkit_core::{Benchmark, Configuration};
use benchkit_storage::{GcEventSeries, ResultStore};
use tracing::debug;

/// Mark, sweep and total GC tables at one percentile.
#[derive(Debug, Clone, PartialEq)]
pub struct GcTables {
    /// Mark phase
    pub mark: PercentileTable,
    /// Sweep phase
    pub sweep: PercentileTable,
    /// Mark + sweep
    pub total: PercentileTable,
}

/// Relative GC bar heights for one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GcRelative {
    /// Total GC time relative to the baseline total, per benchmark
    pub total: Vec<f64>,
    /// Portion of the total bar spent marking, per benchmark
    pub mark: Vec<f64>,
}

/// All series of the selected configurations and benchmarks.
#[derive(Debug, Clone)]
pub struct ResultSet {
    configurations: Vec<Configuration>,
    benchmarks: Vec<Benchmark>,
    // [benchmark][configuration]
    timing: Vec<Vec<Vec<f64>>>,
    gc: Option<Vec<Vec<GcEventSeries>>>,
}

impl ResultSet {
    /// Load timing samples (and GC events when `with_gc`) for every pair.
    pub fn load(
        store: &ResultStore,
        configurations: &[Configuration],
        benchmarks: &[Benchmark],
        with_gc: bool,
    ) -> Self {
        let timing = benchmarks
            .iter()
            .map(|bench| {
                configurations
                    .iter()
                    .map(|conf| {
                        let samples = store.timing_samples(conf, bench);
                        debug!(
                            conf = %conf,
                            bench = %bench,
                            samples = samples.len(),
                            "Loaded timing samples"
                        );
                        samples
                    })
                    .collect()
            })
            .collect();
        let gc = with_gc.then(|| {
            benchmarks
                .iter()
                .map(|bench| {
                    configurations
                        .iter()
                        .map(|conf| store.gc_samples(conf, bench))
                        .collect()
                })
                .collect()
        });
        Self {
            configurations: configurations.to_vec(),
            benchmarks: benchmarks.to_vec(),
            timing,
            gc,
        }
    }

    /// Selected configurations, baseline first.
    pub fn configurations(&self) -> &[Configuration] {
        &self.configurations
    }

    /// Selected benchmarks.
    pub fn benchmarks(&self) -> &[Benchmark] {
        &self.benchmarks
    }

    /// Configuration ids, baseline first.
    pub fn configuration_ids(&self) -> Vec<String> {
        self.configurations.iter().map(Configuration::id).collect()
    }

    /// True when GC data was loaded.
    pub fn has_gc(&self) -> bool {
        self.gc.is_some()
    }

    /// Steady-state timing samples of one pair.
    pub fn timing(&self, bench: usize, conf: usize) -> &[f64] {
        &self.timing[bench][conf]
    }

    /// GC events of one pair, `None` when GC data was not loaded.
    pub fn gc(&self, bench: usize, conf: usize) -> Option<&GcEventSeries> {
        self.gc.as_ref().map(|gc| &gc[bench][conf])
    }

    /// Timing percentile table; pairs without data show 0.
    pub fn timing_table(&self, p: u8) -> PercentileTable {
        let mut table = PercentileTable::new(p, self.configuration_ids());
        for (b, bench) in self.benchmarks.iter().enumerate() {
            let values = (0..self.configurations.len())
                .map(|c| percentile_or_zero(self.timing(b, c), p as f64))
                .collect();
            table.rows.push(TableRow {
                benchmark: bench.clone(),
                values,
            });
        }
        table
    }

    /// Mark / sweep / total GC percentile tables, `None` without GC data.
    pub fn gc_tables(&self, p: u8) -> Option<GcTables> {
        let gc = self.gc.as_ref()?;
        let ids = self.configuration_ids();
        let mut tables = GcTables {
            mark: PercentileTable::new(p, ids.clone()),
            sweep: PercentileTable::new(p, ids.clone()),
            total: PercentileTable::new(p, ids),
        };
        for (bench, row) in self.benchmarks.iter().zip(gc) {
            let pick = |f: fn(&GcEventSeries) -> Vec<f64>| -> Vec<f64> {
                row.iter()
                    .map(|series| percentile_or_zero(&f(series), p as f64))
                    .collect()
            };
            let table_row = |values: Vec<f64>| TableRow {
                benchmark: bench.clone(),
                values,
            };
            tables.mark.rows.push(table_row(pick(GcEventSeries::marks)));
            tables.sweep.rows.push(table_row(pick(GcEventSeries::sweeps)));
            tables.total.rows.push(table_row(pick(GcEventSeries::totals)));
        }
        Some(tables)
    }

    /// Bar heights relative to the baseline, `[configuration][benchmark]`.
    ///
    /// The baseline is 1.0 where it has data. Pairs without data, or
    /// whose baseline is missing, are 0.
    pub fn relative_timing(&self, p: u8) -> Vec<Vec<f64>> {
        if self.configurations.is_empty() {
            return Vec::new();
        }
        let baselines: Vec<Option<f64>> = (0..self.benchmarks.len())
            .map(|b| percentile(self.timing(b, 0), p as f64))
            .collect();
        (0..self.configurations.len())
            .map(|c| {
                baselines
                    .iter()
                    .enumerate()
                    .map(|(b, base)| match (base, percentile(self.timing(b, c), p as f64)) {
                        (Some(base), Some(value)) if *base != 0.0 => value / base,
                        _ => 0.0,
                    })
                    .collect()
            })
            .collect()
    }

    /// Stacked GC bars relative to the baseline total, per configuration.
    ///
    /// The baseline mark portion is the percentile of the per-collection
    /// mark/total ratio. For other configurations the mark portion is
    /// percentile(mark) / percentile(total) scaled by the total bar.
    pub fn relative_gc(&self, p: u8) -> Option<Vec<GcRelative>> {
        let gc = self.gc.as_ref()?;
        if self.configurations.is_empty() {
            return Some(Vec::new());
        }
        let p = p as f64;
        let base_totals: Vec<Option<f64>> = gc
            .iter()
            .map(|row| percentile(&row[0].totals(), p))
            .collect();
        let mut out = Vec::with_capacity(self.configurations.len());
        for c in 0..self.configurations.len() {
            let mut relative = GcRelative {
                total: Vec::with_capacity(gc.len()),
                mark: Vec::with_capacity(gc.len()),
            };
            for (row, base) in gc.iter().zip(&base_totals) {
                let series = &row[c];
                let (marks, totals) = (series.marks(), series.totals());
                let (total, mark) = match base {
                    Some(base) if *base != 0.0 && c == 0 => {
                        (1.0, mark_share_percentile(&marks, &totals, p).unwrap_or(0.0))
                    }
                    Some(base) if *base != 0.0 => match percentile(&totals, p) {
                        Some(total) => {
                            let ratio = total / base;
                            let share =
                                mark_over_total_percentile(&marks, &totals, p).unwrap_or(0.0);
                            (ratio, ratio * share)
                        }
                        None => (0.0, 0.0),
                    },
                    _ => (0.0, 0.0),
                };
                relative.total.push(total);
                relative.mark.push(mark);
            }
            out.push(relative);
        }
        Some(out)
    }
}

/// `(size in GB, percentile value)` for each fixed-size child of `sweep`
/// that has timing data for `bench`, ascending by size.
pub fn size_sweep_points(
    store: &ResultStore,
    sweep: &SizeSweep,
    bench: &Benchmark,
    p: u8,
) -> Vec<(f64, f64)> {
    sweep
        .fixed_children()
        .into_iter()
        .filter_map(|child| {
            let size = child.size()?.min_gb;
            let value = percentile(&store.timing_samples(child, bench), p as f64)?;
            Some((size, value))
        })
        .collect()
}
