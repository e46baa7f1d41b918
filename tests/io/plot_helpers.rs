// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use riskmeasure::plot::{HISTOGRAM_BINS, MetricBand, histogram_counts, returns_by_day};
use riskmeasure::prices::price_relatives;
use rstest::*;

#[rstest]
#[case(0.0, Some(MetricBand::Low))]
#[case(0.49, Some(MetricBand::Low))]
#[case(0.5, Some(MetricBand::Elevated))]
#[case(0.79, Some(MetricBand::Elevated))]
#[case(0.8, Some(MetricBand::High))]
#[case(1.2, Some(MetricBand::High))]
#[case(f64::NAN, None)]
fn metric_band_colour_bands(#[case] value: f64, #[case] expected: Option<MetricBand>) {
    assert_eq!(MetricBand::of(value), expected);
}

#[test]
fn histogram_counts_cover_every_sample() {
    let data: Vec<f64> = (0..500).map(|i| (i as f64 * 0.37).sin()).collect();
    let counts = histogram_counts(&data, HISTOGRAM_BINS);
    assert_eq!(counts.len(), HISTOGRAM_BINS);
    assert_eq!(counts.iter().sum::<usize>(), 500);
}

#[test]
fn histogram_counts_degenerate_input() {
    assert_eq!(histogram_counts(&[], 5), vec![0; 5]);
    assert_eq!(histogram_counts(&[2.0, 2.0], 5), vec![0, 0, 2, 0, 0]);
}

#[test]
fn returns_overlay_aligns_with_close_days() {
    let closes = [100.0, 110.0, 99.0];
    let returns = price_relatives(&closes).unwrap();
    let points = returns_by_day(&returns);
    assert_eq!(points.len(), closes.len() - 1);
    assert_eq!(points[0].0, 1.0);
    assert_eq!(points[1].0, 2.0);
    assert_eq!(points[1].1, returns[1]);
    assert!(returns_by_day(&[]).is_empty());
}
