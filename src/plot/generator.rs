//! SVG line chart for latency percentile curves.
//!
//! Hand-written SVG keeps the output deterministic: the same curve always
//! renders to byte-identical markup.

use crate::aggregator::PercentileCurve;
use crate::utils::error::PlotError;
use log::info;
use std::fmt::Write;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 50.0;
const TICKS: usize = 5;

/// Plot configuration
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "Transaction Processing Time Percentiles".to_string(),
            width: 960,
            height: 540,
        }
    }
}

impl PlotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Maps data coordinates into the plot area
struct Frame {
    x_lo: f64,
    x_hi: f64,
    plot_w: f64,
    plot_h: f64,
}

impl Frame {
    fn new(curve: &PercentileCurve, config: &PlotConfig) -> Self {
        let first = curve.latencies[0];
        let last = curve.latencies[curve.len() - 1];
        let x_lo = first.min(0.0);
        // All spans equal: widen so the single column still has an axis
        let x_hi = if last > x_lo { last } else { x_lo + 1.0 };

        Self {
            x_lo,
            x_hi,
            plot_w: (config.width as f64 - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            plot_h: (config.height as f64 - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        }
    }

    fn x(&self, latency: f64) -> f64 {
        MARGIN_LEFT + (latency - self.x_lo) / (self.x_hi - self.x_lo) * self.plot_w
    }

    fn y(&self, percentile: f64) -> f64 {
        MARGIN_TOP + (1.0 - percentile / 100.0) * self.plot_h
    }
}

/// Render the curve as an SVG document
///
/// # Errors
/// * `PlotError::EmptyCurve` - nothing to draw
pub fn generate_percentile_plot(
    curve: &PercentileCurve,
    config: Option<&PlotConfig>,
) -> Result<String, PlotError> {
    if curve.is_empty() {
        return Err(PlotError::EmptyCurve);
    }

    let config = config.cloned().unwrap_or_default();
    info!("Generating percentile plot with {} points", curve.len());

    let frame = Frame::new(curve, &config);
    let mut svg = String::new();

    // Writing to a String cannot fail
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = config.width,
        h = config.height
    );
    svg.push_str(
        r#"<style>text { font: 12px sans-serif; } .grid { stroke: rgb(220, 220, 220); stroke-width: 1; }</style>"#,
    );
    let _ = write!(
        svg,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        config.width, config.height
    );
    let _ = write!(
        svg,
        r#"<text x="{}" y="24" font-size="16" text-anchor="middle" font-weight="bold">{}</text>"#,
        config.width / 2,
        escape_xml(&config.title)
    );

    render_axes(&mut svg, &frame);
    render_curve(&mut svg, curve, &frame);

    svg.push_str("</svg>");

    info!("Percentile plot generated ({} bytes)", svg.len());
    Ok(svg)
}

fn render_axes(out: &mut String, frame: &Frame) {
    let left = MARGIN_LEFT;
    let right = MARGIN_LEFT + frame.plot_w;
    let top = MARGIN_TOP;
    let bottom = MARGIN_TOP + frame.plot_h;

    for i in 0..TICKS {
        let percentile = 100.0 * i as f64 / (TICKS - 1) as f64;
        let y = frame.y(percentile);
        let _ = write!(
            out,
            r#"<line class="grid" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/><text x="{:.2}" y="{:.2}" text-anchor="end">{}</text>"#,
            left, y, right, y, left - 6.0, y + 4.0, percentile
        );

        let latency = frame.x_lo + (frame.x_hi - frame.x_lo) * i as f64 / (TICKS - 1) as f64;
        let x = frame.x(latency);
        let _ = write!(
            out,
            r#"<line class="grid" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/><text x="{:.2}" y="{:.2}" text-anchor="middle">{:.2}</text>"#,
            x, top, x, bottom, x, bottom + 18.0, latency
        );
    }

    let _ = write!(
        out,
        r#"<line x1="{l:.2}" y1="{b:.2}" x2="{r:.2}" y2="{b:.2}" stroke="black"/><line x1="{l:.2}" y1="{t:.2}" x2="{l:.2}" y2="{b:.2}" stroke="black"/>"#,
        l = left,
        r = right,
        t = top,
        b = bottom
    );
    let _ = write!(
        out,
        r#"<text x="{:.2}" y="{:.2}" text-anchor="middle">Processing time (ms)</text>"#,
        left + frame.plot_w / 2.0,
        bottom + 40.0
    );
    let _ = write!(
        out,
        r#"<text x="18" y="{:.2}" text-anchor="middle" transform="rotate(-90 18 {:.2})">Percentile</text>"#,
        top + frame.plot_h / 2.0,
        top + frame.plot_h / 2.0
    );
}

fn render_curve(out: &mut String, curve: &PercentileCurve, frame: &Frame) {
    let points: Vec<String> = curve
        .points()
        .map(|(latency, percentile)| format!("{:.2},{:.2}", frame.x(latency), frame.y(percentile)))
        .collect();

    let _ = write!(
        out,
        r#"<polyline fill="none" stroke="rgb(70, 130, 180)" stroke-width="2" points="{}"/>"#,
        points.join(" ")
    );
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
