//! Markdown and CSV rendering of percentile tables

use benchkit_core::Benchmark;
use benchkit_engine::{format_percent, format_value, percent_difference, GcTables, PercentileTable};

/// Label of the aggregate row.
pub const GEOMEAN_LABEL: &str = "**Geometrical mean**";

/// `[bench](#anchor)` link to a benchmark's detail section.
pub fn benchmark_link(bench: &Benchmark) -> String {
    format!("[{}](#{})", bench.name(), bench.anchor())
}

fn header_row(leading: &[&str], configurations: &[String]) -> String {
    let mut header: Vec<&str> = leading.to_vec();
    if let Some(baseline) = configurations.first() {
        header.push(baseline);
    }
    for conf in configurations.iter().skip(1) {
        header.push(conf);
        header.push("");
    }
    let mut out = format!("|{}|\n|", header.join(" | "));
    for _ in &header {
        out.push_str(" -- |");
    }
    out.push('\n');
    out
}

fn row(leading: &[String], values: &[f64]) -> String {
    let mut cells: Vec<String> = leading.to_vec();
    let baseline = values.first().copied().unwrap_or(0.0);
    cells.push(format_value(baseline));
    for cell in values.iter().skip(1) {
        cells.push(format_value(*cell));
        cells.push(format_percent(percent_difference(*cell, baseline)));
    }
    format!("|{}|\n", cells.join("|"))
}

fn geomean_row(leading: Vec<String>, table: &PercentileTable) -> String {
    let mut cells = leading;
    cells.push(String::new());
    for mean in table.geometric_mean_cells() {
        cells.push(String::new());
        cells.push(match mean {
            Some(cell) => cell.to_string(),
            None => "N/A".to_string(),
        });
    }
    format!("|{}|\n", cells.join("|"))
}

/// Comparison table: one row per benchmark with the literal baseline value
/// and, per other configuration, its value and percent difference; then a
/// geometric-mean row.
pub fn markdown_table(table: &PercentileTable) -> String {
    let mut out = header_row(&["name"], &table.configurations);
    for r in &table.rows {
        out.push_str(&row(&[benchmark_link(&r.benchmark)], &r.values));
    }
    out.push_str(&geomean_row(vec![GEOMEAN_LABEL.to_string()], table));
    out
}

/// GC table: mark, sweep and total sub-rows per benchmark, geometric mean
/// over totals.
pub fn markdown_gc_table(tables: &GcTables) -> String {
    let mut out = header_row(&["name", ""], &tables.total.configurations);
    let phases = tables
        .mark
        .rows
        .iter()
        .zip(&tables.sweep.rows)
        .zip(&tables.total.rows);
    for ((mark, sweep), total) in phases {
        out.push_str(&row(
            &[benchmark_link(&mark.benchmark), "mark".to_string()],
            &mark.values,
        ));
        out.push_str(&row(&[String::new(), "sweep".to_string()], &sweep.values));
        out.push_str(&row(&[String::new(), "total".to_string()], &total.values));
    }
    out.push_str(&geomean_row(
        vec![GEOMEAN_LABEL.to_string(), "total".to_string()],
        &tables.total,
    ));
    out
}

/// `name,conf…` header then one line of raw values per benchmark.
pub fn csv_table(table: &PercentileTable) -> String {
    let mut out = String::from("name");
    for conf in &table.configurations {
        out.push(',');
        out.push_str(conf);
    }
    out.push('\n');
    for r in &table.rows {
        out.push_str(r.benchmark.name());
        for value in &r.values {
            out.push_str(&format!(",{}", value));
        }
        out.push('\n');
    }
    out
}
