// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! 2x2 PNG chart of a risk analysis: price, score bars, return distribution and
//! risk level.

use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use crate::estimators::approaches::binned::binned_utils::{
    HistogramDataset, bin_codes, observed_range,
};
use crate::report::Severity;
use crate::risk::RiskReport;

type PlotResult = Result<(), Box<dyn Error>>;
type Panel<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

const ORANGE: RGBColor = RGBColor(255, 165, 0);

/// Buckets of the return distribution panel.
pub const HISTOGRAM_BINS: usize = 50;

/// Colour band of a score bar: below 0.5, below 0.8, or above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricBand {
    Low,
    Elevated,
    High,
}

impl MetricBand {
    /// `None` for NaN.
    pub fn of(value: f64) -> Option<Self> {
        if value.is_nan() {
            None
        } else if value < 0.5 {
            Some(MetricBand::Low)
        } else if value < 0.8 {
            Some(MetricBand::Elevated)
        } else {
            Some(MetricBand::High)
        }
    }

    fn color(&self) -> RGBColor {
        match self {
            MetricBand::Low => GREEN,
            MetricBand::Elevated => ORANGE,
            MetricBand::High => RED,
        }
    }
}

fn severity_color(severity: Severity) -> RGBColor {
    match severity {
        Severity::Low => GREEN,
        Severity::Medium => ORANGE,
        Severity::High => RED,
    }
}

/// Render the four panels into a PNG at `path`.
pub fn render_risk_chart<P: AsRef<Path>>(
    path: P,
    title: &str,
    closes: &[f64],
    returns: &[f64],
    report: &RiskReport,
) -> PlotResult {
    let root = BitMapBackend::new(path.as_ref(), (1500, 1000)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(&format!("Risk Analysis for {title}"), ("sans-serif", 32))?;
    let panels = root.split_evenly((2, 2));

    draw_price(&panels[0], closes, returns)?;
    draw_metrics(&panels[1], report)?;
    draw_distribution(&panels[2], returns)?;
    draw_risk_level(&panels[3], report)?;

    root.present()?;
    Ok(())
}

fn draw_price(area: &Panel<'_>, closes: &[f64], returns: &[f64]) -> PlotResult {
    let (lo, hi) = padded_range(closes);
    let (r_lo, r_hi) = padded_range(returns);
    let days = closes.len().max(1) as f64;
    let mut chart = ChartBuilder::on(area)
        .caption("Price and Returns", ("sans-serif", 22).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(0f64..days, lo..hi)?
        .set_secondary_coord(0f64..days, r_lo..r_hi);
    chart.configure_mesh().x_desc("Day").y_desc("Close").draw()?;
    chart.configure_secondary_axes().y_desc("Returns").draw()?;

    chart
        .draw_series(LineSeries::new(
            closes.iter().enumerate().map(|(i, &c)| (i as f64, c)),
            &BLUE,
        ))?
        .label("Close Price")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    chart
        .draw_secondary_series(LineSeries::new(returns_by_day(returns), &RED.mix(0.7)))?
        .label("Returns")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

fn draw_metrics(area: &Panel<'_>, report: &RiskReport) -> PlotResult {
    let metrics = [
        ("Entropy", report.entropy),
        ("Mutual Info", report.mutual_information),
        ("Hurst", report.hurst),
    ];
    let defined = metrics.iter().map(|(_, v)| *v).filter(|v| !v.is_nan());
    let y_min = defined.clone().fold(0.0_f64, f64::min);
    let y_max = defined.fold(1.0_f64, f64::max) * 1.15;

    let mut chart = ChartBuilder::on(area)
        .caption("Risk Metrics", ("sans-serif", 22).into_font())
        .margin(10)
        .x_label_area_size(10)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..3f64, y_min..y_max)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc("Value")
        .draw()?;

    chart.draw_series(metrics.iter().enumerate().filter_map(|(i, (_, v))| {
        let band = MetricBand::of(*v)?;
        let x = i as f64;
        Some(Rectangle::new(
            [(x + 0.15, 0.0), (x + 0.85, *v)],
            band.color().mix(0.7).filled(),
        ))
    }))?;
    chart.draw_series(metrics.iter().enumerate().map(|(i, (name, v))| {
        let label = if v.is_nan() { format!("{name}: n/a") } else { format!("{name}: {v:.3}") };
        let y = if v.is_nan() { 0.0 } else { v.max(0.0) };
        Text::new(label, (i as f64 + 0.2, y + 0.05 * y_max), ("sans-serif", 16).into_font())
    }))?;
    Ok(())
}

fn draw_distribution(area: &Panel<'_>, returns: &[f64]) -> PlotResult {
    // Same edges as the binning: the observed range, widened by 0.5 for a constant series.
    let (lo, hi) = match observed_range(returns) {
        Some((lo, hi)) if lo < hi => (lo, hi),
        Some((v, _)) => (v - 0.5, v + 0.5),
        None => (0.0, 1.0),
    };
    let counts = histogram_counts(returns, HISTOGRAM_BINS);
    let max_count = counts.iter().copied().max().unwrap_or(0).max(1) as f64;
    let width = (hi - lo) / HISTOGRAM_BINS as f64;

    let mut chart = ChartBuilder::on(area)
        .caption("Returns Distribution", ("sans-serif", 22).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(lo..hi, 0f64..max_count * 1.1)?;
    chart
        .configure_mesh()
        .x_desc("Returns")
        .y_desc("Frequency")
        .draw()?;
    chart.draw_series(counts.iter().enumerate().map(|(i, &c)| {
        let x0 = lo + i as f64 * width;
        Rectangle::new([(x0, 0.0), (x0 + width, c as f64)], CYAN.mix(0.7).filled())
    }))?;
    Ok(())
}

fn draw_risk_level(area: &Panel<'_>, report: &RiskReport) -> PlotResult {
    let severity = Severity::of(report.risk_flag);
    let level = f64::from(report.risk_flag.level());
    let mut chart = ChartBuilder::on(area)
        .caption("Risk Level Assessment", ("sans-serif", 22).into_font())
        .margin(10)
        .x_label_area_size(10)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..1f64, 0f64..5f64)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc("Risk Level (1=Low, 4=High)")
        .draw()?;
    chart.draw_series(std::iter::once(Rectangle::new(
        [(0.3, 0.0), (0.7, level)],
        severity_color(severity).mix(0.7).filled(),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        format!("{} ({})", severity.label(), report.risk_flag),
        (0.3, level + 0.15),
        ("sans-serif", 18).into_font(),
    )))?;
    Ok(())
}

/// Returns placed on the day axis of the close series: `returns[t]` is the change into
/// `close[t + 1]`, so the first point sits on day 1.
pub fn returns_by_day(returns: &[f64]) -> Vec<(f64, f64)> {
    returns
        .iter()
        .enumerate()
        .map(|(i, &r)| ((i + 1) as f64, r))
        .collect()
}

/// Occupancy per bucket of an equal-width histogram, all `bins` buckets included.
pub fn histogram_counts(data: &[f64], bins: usize) -> Vec<usize> {
    match bin_codes(data, bins) {
        Some(codes) => HistogramDataset::from_codes(&codes, bins).counts,
        None => vec![0; bins],
    }
}

/// Data range widened so a constant or empty series still spans a visible interval.
fn padded_range(data: &[f64]) -> (f64, f64) {
    let (lo, hi) = data
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((hi - lo) * 0.05).max(1e-9);
    (lo - pad, hi + pad)
}
