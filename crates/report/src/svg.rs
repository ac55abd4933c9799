//! SVG chart backend
//!
//! Produces self-contained SVG documents: axes with five gridlines, a
//! legend in the top-right corner of the plot area, bars or polylines.

use crate::chart::{BarSeries, Chart, ChartBackend, ChartKind, LineSeries};
use benchkit_core::Result;
use std::path::Path;

const WIDTH: f64 = 1600.0;
const HEIGHT: f64 = 1200.0;
const MARGIN_LEFT: f64 = 110.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 80.0;
const MARGIN_BOTTOM: f64 = 120.0;
const GRIDLINES: usize = 5;
const MARKER_LIMIT: usize = 50;

const PALETTE: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Writes charts as SVG files.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgBackend;

impl ChartBackend for SvgBackend {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, chart: &Chart, path: &Path) -> Result<()> {
        std::fs::write(path, render_svg(chart))?;
        Ok(())
    }
}

/// Plot-area geometry and value ranges.
struct Frame {
    x_min: f64,
    x_max: f64,
    y_max: f64,
}

impl Frame {
    fn plot_width() -> f64 {
        WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height() -> f64 {
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn px(&self, x: f64) -> f64 {
        let span = self.x_max - self.x_min;
        let t = if span > 0.0 { (x - self.x_min) / span } else { 0.5 };
        MARGIN_LEFT + t * Self::plot_width()
    }

    fn py(&self, y: f64) -> f64 {
        HEIGHT - MARGIN_BOTTOM - (y / self.y_max) * Self::plot_height()
    }
}

/// Render a chart to an SVG document string.
pub fn render_svg(chart: &Chart) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n",
        w = WIDTH,
        h = HEIGHT
    ));
    out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    out.push_str(&text(WIDTH / 2.0, 45.0, 26, "middle", &chart.title));

    let labels = match &chart.kind {
        ChartKind::Bars { categories, series } => {
            let frame = Frame {
                x_min: 0.0,
                x_max: 1.0,
                y_max: nice_max(series.iter().flat_map(|s| s.values.iter().copied())),
            };
            axes(&mut out, &frame, chart);
            bars(&mut out, &frame, categories, series);
            series
                .iter()
                .enumerate()
                .map(|(i, s)| (s.label.as_str(), i))
                .collect::<Vec<_>>()
        }
        ChartKind::Lines { series } => {
            let xs = || series.iter().flat_map(|s| s.points.iter().map(|p| p.0));
            let x_min = xs().fold(f64::INFINITY, f64::min);
            let x_max = xs().fold(f64::NEG_INFINITY, f64::max);
            let (x_min, x_max) = if x_min.is_finite() && x_max.is_finite() {
                (x_min, x_max)
            } else {
                (0.0, 1.0)
            };
            let frame = Frame {
                x_min,
                x_max,
                y_max: nice_max(series.iter().flat_map(|s| s.points.iter().map(|p| p.1))),
            };
            axes(&mut out, &frame, chart);
            x_ticks(&mut out, &frame);
            lines(&mut out, &frame, series);
            series
                .iter()
                .enumerate()
                .filter(|(_, s)| !s.points.is_empty())
                .map(|(i, s)| (s.label.as_str(), i))
                .collect()
        }
    };

    if chart.is_empty() {
        out.push_str(&text(WIDTH / 2.0, HEIGHT / 2.0, 24, "middle", "no data"));
    }
    legend(&mut out, &labels);
    out.push_str("</svg>\n");
    out
}

fn axes(out: &mut String, frame: &Frame, chart: &Chart) {
    let left = MARGIN_LEFT;
    let right = WIDTH - MARGIN_RIGHT;
    let bottom = HEIGHT - MARGIN_BOTTOM;
    for i in 0..=GRIDLINES {
        let value = frame.y_max * i as f64 / GRIDLINES as f64;
        let y = frame.py(value);
        out.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#dddddd\"/>\n",
            left, y, right, y
        ));
        out.push_str(&text(left - 10.0, y + 5.0, 14, "end", &format_tick(value)));
    }
    out.push_str(&format!(
        "<line x1=\"{l:.1}\" y1=\"{t:.1}\" x2=\"{l:.1}\" y2=\"{b:.1}\" stroke=\"black\"/>\n\
         <line x1=\"{l:.1}\" y1=\"{b:.1}\" x2=\"{r:.1}\" y2=\"{b:.1}\" stroke=\"black\"/>\n",
        l = left,
        t = MARGIN_TOP,
        b = bottom,
        r = right
    ));
    if !chart.x_label.is_empty() {
        out.push_str(&text(WIDTH / 2.0, HEIGHT - 30.0, 18, "middle", &chart.x_label));
    }
    if !chart.y_label.is_empty() {
        out.push_str(&format!(
            "<text x=\"30\" y=\"{y:.1}\" font-size=\"18\" text-anchor=\"middle\" \
             transform=\"rotate(-90 30 {y:.1})\">{}</text>\n",
            escape(&chart.y_label),
            y = HEIGHT / 2.0
        ));
    }
}

fn x_ticks(out: &mut String, frame: &Frame) {
    for i in 0..=GRIDLINES {
        let value = frame.x_min + (frame.x_max - frame.x_min) * i as f64 / GRIDLINES as f64;
        out.push_str(&text(
            frame.px(value),
            HEIGHT - MARGIN_BOTTOM + 25.0,
            14,
            "middle",
            &format_tick(value),
        ));
    }
}

fn bars(out: &mut String, frame: &Frame, categories: &[String], series: &[BarSeries]) {
    if categories.is_empty() {
        return;
    }
    let slots = series.iter().map(|s| s.slot + 1).max().unwrap_or(1);
    let group = Frame::plot_width() / categories.len() as f64;
    let bar = group / (slots + 1) as f64;
    for (i, s) in series.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        for (c, value) in s.values.iter().enumerate().take(categories.len()) {
            if !value.is_finite() || *value <= 0.0 {
                continue;
            }
            let x = MARGIN_LEFT + c as f64 * group + (s.slot as f64 + 0.5) * bar;
            let y = frame.py(*value);
            out.push_str(&format!(
                "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"/>\n",
                x,
                y,
                bar,
                HEIGHT - MARGIN_BOTTOM - y,
                color
            ));
        }
    }
    for (c, category) in categories.iter().enumerate() {
        let x = MARGIN_LEFT + (c as f64 + 0.5) * group;
        out.push_str(&text(x, HEIGHT - MARGIN_BOTTOM + 25.0, 14, "middle", category));
    }
}

fn lines(out: &mut String, frame: &Frame, series: &[LineSeries]) {
    for (i, s) in series.iter().enumerate() {
        if s.points.is_empty() {
            continue;
        }
        let color = PALETTE[i % PALETTE.len()];
        let points: Vec<String> = s
            .points
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(x, y)| format!("{:.1},{:.1}", frame.px(*x), frame.py(*y)))
            .collect();
        out.push_str(&format!(
            "<polyline fill=\"none\" stroke=\"{}\" stroke-width=\"2\" points=\"{}\"/>\n",
            color,
            points.join(" ")
        ));
        if s.points.len() <= MARKER_LIMIT {
            for (x, y) in &s.points {
                out.push_str(&format!(
                    "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"4\" fill=\"{}\"/>\n",
                    frame.px(*x),
                    frame.py(*y),
                    color
                ));
            }
        }
    }
}

fn legend(out: &mut String, labels: &[(&str, usize)]) {
    let x = WIDTH - MARGIN_RIGHT - 360.0;
    for (i, (label, color)) in labels.iter().enumerate() {
        let y = MARGIN_TOP + 20.0 + i as f64 * 24.0;
        out.push_str(&format!(
            "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"16\" height=\"16\" fill=\"{}\"/>\n",
            x,
            y - 13.0,
            PALETTE[color % PALETTE.len()]
        ));
        out.push_str(&text(x + 24.0, y, 15, "start", label));
    }
}

fn text(x: f64, y: f64, size: u32, anchor: &str, content: &str) -> String {
    format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"{}\" text-anchor=\"{}\">{}</text>\n",
        x,
        y,
        size,
        anchor,
        escape(content)
    )
}

/// Upper bound of the y axis: 10% headroom over the largest value, 1 when
/// there are no positive values.
fn nice_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values
        .filter(|v| v.is_finite())
        .fold(0.0f64, f64::max);
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 100.0 {
        format!("{:.0}", value)
    } else if magnitude >= 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
