//! Summary document assembly
//!
//! Builds `Readme.md` section by section, rendering every chart through the
//! configured [`ChartBackend`] into the report directory and linking it by
//! relative file name.

use crate::chart::{BarSeries, Chart, ChartBackend, LineSeries};
use crate::output::{chart_file_name, README_NAME};
use crate::table::{csv_table, markdown_gc_table, markdown_table};
use benchkit_core::{Benchmark, Result};
use benchkit_engine::{example_run_index, percentile_curve, size_sweep_points, ResultSet, SizeSweep};
use benchkit_storage::ResultStore;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Percentile range of the run-time curve (exclusive upper bound).
pub const RUN_TIME_CURVE_LIMIT: u32 = 99;

/// Percentile range of the GC pause curve (exclusive upper bound).
pub const GC_PAUSE_CURVE_LIMIT: u32 = 100;

/// What to include in the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// GC charts and tables
    pub gc: bool,
    /// Also write `percentile_<p>.csv`
    pub csv: bool,
    /// Table percentiles
    pub percentiles: Vec<u8>,
    /// Preferred run index for example plots
    pub example_run: u32,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            gc: false,
            csv: false,
            percentiles: vec![50, 90, 99],
            example_run: 3,
        }
    }
}

/// Composes the summary document for one result set.
pub struct ReportAssembler<'a> {
    store: &'a ResultStore,
    set: &'a ResultSet,
    sweeps: Vec<&'a SizeSweep>,
    backend: &'a dyn ChartBackend,
    options: &'a ReportOptions,
}

impl<'a> ReportAssembler<'a> {
    /// Assemble over `set`; `sweeps` are the size sweeps among the
    /// selected configurations.
    pub fn new(
        store: &'a ResultStore,
        set: &'a ResultSet,
        sweeps: Vec<&'a SizeSweep>,
        backend: &'a dyn ChartBackend,
        options: &'a ReportOptions,
    ) -> Self {
        Self {
            store,
            set,
            sweeps,
            backend,
            options,
        }
    }

    /// Write charts and `Readme.md` into `dir`; returns the document path.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let mut doc = String::from("# Summary\n");
        self.configurations_section(&mut doc);
        for &p in &self.options.percentiles {
            self.percentile_section(&mut doc, dir, p)?;
        }
        self.size_sweep_section(&mut doc, dir)?;
        self.benchmark_sections(&mut doc, dir)?;

        let path = dir.join(README_NAME);
        std::fs::write(&path, doc)?;
        info!(target: "benchkit::report", path = %path.display(), "Report written");
        Ok(path)
    }

    fn chart(&self, doc: &mut String, dir: &Path, stem: &str, chart: &Chart) -> Result<()> {
        let name = chart_file_name(stem, self.backend.extension());
        self.backend.render(chart, &dir.join(&name))?;
        doc.push_str(&format!("![Chart]({})\n\n", name));
        Ok(())
    }

    fn configurations_section(&self, doc: &mut String) {
        doc.push_str("## Configurations\n");
        doc.push_str("|configuration | full name | runs | batches|\n| -- | -- | -- | -- |\n");
        for conf in self.set.configurations() {
            let settings = self.store.read_settings(conf);
            doc.push_str(&format!(
                "|{}|{}|{}|{}|\n",
                conf.id(),
                settings.full_name(),
                settings.runs,
                settings.batches
            ));
        }
        doc.push('\n');
    }

    fn percentile_section(&self, doc: &mut String, dir: &Path, p: u8) -> Result<()> {
        info!(target: "benchkit::report", percentile = p, "Rendering percentile section");
        doc.push_str(&format!("## Benchmark run time (ms) at {} percentile \n", p));
        self.chart(doc, dir, &format!("relative_percentile_{}", p), &self.relative_chart(p))?;
        let table = self.set.timing_table(p);
        doc.push_str(&markdown_table(&table));
        doc.push('\n');
        if self.options.csv {
            std::fs::write(dir.join(format!("percentile_{}.csv", p)), csv_table(&table))?;
        }

        if let (Some(chart), Some(tables)) = (self.relative_gc_chart(p), self.set.gc_tables(p)) {
            doc.push_str(&format!("## GC time (ms) at {} percentile \n", p));
            self.chart(doc, dir, &format!("relative_gc_percentile_{}", p), &chart)?;
            doc.push_str(&markdown_gc_table(&tables));
            doc.push('\n');
        }
        Ok(())
    }

    fn size_sweep_section(&self, doc: &mut String, dir: &Path) -> Result<()> {
        let mut heading = false;
        for bench in self.set.benchmarks() {
            let charts: Vec<(u8, Chart)> = self
                .options
                .percentiles
                .iter()
                .filter_map(|&p| self.size_sweep_chart(bench, p).map(|c| (p, c)))
                .collect();
            if charts.is_empty() {
                continue;
            }
            if !heading {
                doc.push_str("# Size sweeps\n");
                heading = true;
            }
            doc.push_str(&format!("## Size sweep: {}\n", bench));
            for (p, chart) in charts {
                self.chart(doc, dir, &format!("size_{}_{}", bench.name(), p), &chart)?;
            }
        }
        Ok(())
    }

    fn benchmark_sections(&self, doc: &mut String, dir: &Path) -> Result<()> {
        doc.push_str("# Individual benchmarks\n");
        for (b, bench) in self.set.benchmarks().iter().enumerate() {
            let Some(run) = example_run_index(
                self.store,
                self.set.configurations(),
                bench,
                self.options.example_run,
            ) else {
                debug!(
                    target: "benchkit::report",
                    bench = %bench,
                    "No example run, skipping section"
                );
                continue;
            };
            doc.push_str(&format!("## {}\n", bench));
            self.chart(
                doc,
                dir,
                &format!("percentile_{}", bench.name()),
                &self.percentile_chart(b),
            )?;
            if let Some(chart) = self.gc_pause_chart(b) {
                self.chart(doc, dir, &format!("gc_pause_times_{}", bench.name()), &chart)?;
            }
            self.chart(
                doc,
                dir,
                &format!("example_run_{}_{}", run, bench.name()),
                &self.example_run_chart(bench, run),
            )?;
            if let Some(chart) = self.example_gc_chart(bench, run) {
                self.chart(doc, dir, &format!("example_gc_run_{}_{}", run, bench.name()), &chart)?;
            }
        }
        Ok(())
    }

    fn categories(&self) -> Vec<String> {
        self.set
            .benchmarks()
            .iter()
            .map(|b| b.short_name().to_string())
            .collect()
    }

    fn baseline_id(&self) -> String {
        self.set
            .configurations()
            .first()
            .map(|c| c.id())
            .unwrap_or_default()
    }

    /// Timing at `p` relative to the baseline, one bar group per benchmark.
    pub fn relative_chart(&self, p: u8) -> Chart {
        let series = self
            .set
            .relative_timing(p)
            .into_iter()
            .zip(self.set.configuration_ids())
            .enumerate()
            .map(|(slot, (values, label))| BarSeries { label, slot, values })
            .collect();
        Chart::bars(
            format!(
                "Relative test execution times against {} at {} percentile",
                self.baseline_id(),
                p
            ),
            self.categories(),
            series,
        )
    }

    /// Stacked mark/total GC bars relative to the baseline total.
    pub fn relative_gc_chart(&self, p: u8) -> Option<Chart> {
        let relative = self.set.relative_gc(p)?;
        let mut series = Vec::with_capacity(relative.len() * 2);
        for (slot, (bars, id)) in relative
            .into_iter()
            .zip(self.set.configuration_ids())
            .enumerate()
        {
            series.push(BarSeries {
                label: format!("{}-sweep", id),
                slot,
                values: bars.total,
            });
            series.push(BarSeries {
                label: format!("{}-mark", id),
                slot,
                values: bars.mark,
            });
        }
        Some(Chart::bars(
            format!(
                "Relative gc times against {} at {} percentile",
                self.baseline_id(),
                p
            ),
            self.categories(),
            series,
        ))
    }

    /// Run time vs. percentile for every configuration.
    pub fn percentile_chart(&self, bench: usize) -> Chart {
        let series = self
            .set
            .configurations()
            .iter()
            .enumerate()
            .map(|(c, conf)| LineSeries {
                label: conf.id(),
                points: percentile_curve(self.set.timing(bench, c), RUN_TIME_CURVE_LIMIT),
            })
            .collect();
        Chart::lines(
            self.set.benchmarks()[bench].name(),
            "Percentile",
            "Run time (ms)",
            series,
        )
    }

    /// GC pause time vs. percentile, `None` without GC data.
    pub fn gc_pause_chart(&self, bench: usize) -> Option<Chart> {
        let mut series = Vec::new();
        for (c, conf) in self.set.configurations().iter().enumerate() {
            let totals = self.set.gc(bench, c)?.totals();
            series.push(LineSeries {
                label: conf.id(),
                points: percentile_curve(&totals, GC_PAUSE_CURVE_LIMIT),
            });
        }
        Some(Chart::lines(
            format!(
                "{}: Garbage Collector Pause Times",
                self.set.benchmarks()[bench].name()
            ),
            "Percentile",
            "GC pause time (ms)",
            series,
        ))
    }

    /// Every iteration of one run, untruncated.
    pub fn example_run_chart(&self, bench: &Benchmark, run: u32) -> Chart {
        let series = self
            .set
            .configurations()
            .iter()
            .map(|conf| LineSeries {
                label: conf.id(),
                points: self
                    .store
                    .load_run(conf, bench, run)
                    .map(|series| {
                        series
                            .samples()
                            .iter()
                            .enumerate()
                            .map(|(i, v)| (i as f64, *v))
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect();
        Chart::lines(
            format!("{} run #{}", bench, run),
            "Iteration",
            "Run time (ms)",
            series,
        )
    }

    /// Mark, sweep and total of each collection in one run, against time
    /// since the first collection. `None` without GC data for that run.
    pub fn example_gc_chart(&self, bench: &Benchmark, run: u32) -> Option<Chart> {
        if !self.options.gc {
            return None;
        }
        let mut series = Vec::new();
        for conf in self.set.configurations() {
            let Some(gc) = self.store.load_gc_run(conf, bench, run) else {
                continue;
            };
            let Some(first) = gc.events().first().map(|e| e.timestamp) else {
                continue;
            };
            let at = |f: fn(&benchkit_storage::GcEvent) -> f64| -> Vec<(f64, f64)> {
                gc.events()
                    .iter()
                    .map(|e| (e.timestamp - first, f(e)))
                    .collect()
            };
            series.push(LineSeries {
                label: format!("{}-mark", conf.id()),
                points: at(|e| e.mark),
            });
            series.push(LineSeries {
                label: format!("{}-sweep", conf.id()),
                points: at(|e| e.sweep),
            });
            series.push(LineSeries {
                label: format!("{}-total", conf.id()),
                points: at(|e| e.total()),
            });
        }
        if series.is_empty() {
            return None;
        }
        Some(Chart::lines(
            format!("{} run #{} garbage collections", bench, run),
            "Time since first GC (ms)",
            "Run time (ms)",
            series,
        ))
    }

    /// Run time at `p` vs. heap size, one line per size-sweep parent over
    /// its fixed-size children. `None` when no child has data.
    pub fn size_sweep_chart(&self, bench: &Benchmark, p: u8) -> Option<Chart> {
        let series: Vec<LineSeries> = self
            .sweeps
            .iter()
            .map(|sweep| LineSeries {
                label: sweep.parent.id(),
                points: size_sweep_points(self.store, sweep, bench, p),
            })
            .collect();
        if series.iter().all(|s| s.points.is_empty()) {
            return None;
        }
        Some(Chart::lines(
            format!("{}: run time at {} percentile vs heap size", bench, p),
            "Heap size (GB)",
            "Run time (ms)",
            series,
        ))
    }
}
