// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use riskmeasure::estimators::approaches::rescaled_range::rs_utils::{
    SCALE_COUNT, least_squares_slope, mean_rescaled_range, rescaled_range, window_sizes,
};
use rstest::*;

#[test]
fn window_sizes_pin_both_endpoints() {
    let sizes = window_sizes(2000, 16);
    assert_eq!(sizes.first(), Some(&16));
    assert_eq!(sizes.last(), Some(&1000));
    assert_eq!(sizes.len(), SCALE_COUNT);
    assert!(sizes.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn window_sizes_are_log_spaced() {
    // 16 * (1000/16)^(1/9) = 25.2...
    let sizes = window_sizes(2000, 16);
    assert_eq!(sizes[1], 25);
}

#[test]
fn window_sizes_deduplicate_on_short_series() {
    let sizes = window_sizes(40, 16);
    assert_eq!(sizes.first(), Some(&16));
    assert_eq!(sizes.last(), Some(&20));
    assert!(sizes.len() < SCALE_COUNT);
    assert!(sizes.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn window_sizes_when_half_length_is_below_minimum() {
    let sizes = window_sizes(20, 16);
    assert_eq!(sizes.first(), Some(&10));
    assert_eq!(sizes.last(), Some(&16));
}

#[rstest]
#[case(1, 16)]
#[case(0, 16)]
#[case(100, 0)]
fn window_sizes_empty_for_degenerate_input(#[case] n: usize, #[case] min_window: usize) {
    assert!(window_sizes(n, min_window).is_empty());
}

#[test]
fn window_sizes_never_below_two() {
    let sizes = window_sizes(3, 16);
    assert!(sizes.iter().all(|&w| w >= 2));
    assert_eq!(sizes.last(), Some(&16));
}

#[test]
fn rescaled_range_of_known_segments() {
    assert_abs_diff_eq!(rescaled_range(&[1.0, -1.0, 1.0, -1.0]).unwrap(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(
        rescaled_range(&[1.0, 2.0, 3.0, 4.0]).unwrap(),
        2.0 / 1.25_f64.sqrt(),
        epsilon = 1e-12
    );
}

#[test]
fn rescaled_range_skips_flat_segments() {
    assert!(rescaled_range(&[3.0, 3.0, 3.0]).is_none());
    assert!(rescaled_range(&[]).is_none());
}

#[test]
fn mean_rescaled_range_drops_remainder() {
    let series = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 5.0];
    assert_abs_diff_eq!(mean_rescaled_range(&series, 2).unwrap(), 1.0, epsilon = 1e-12);
    assert!(mean_rescaled_range(&series, 0).is_none());
    assert!(mean_rescaled_range(&series, 8).is_none());
}

#[test]
fn mean_rescaled_range_ignores_flat_segments() {
    let series = [0.0, 0.0, 1.0, -1.0];
    assert_abs_diff_eq!(mean_rescaled_range(&series, 2).unwrap(), 1.0, epsilon = 1e-12);
    assert!(mean_rescaled_range(&[0.0; 6], 3).is_none());
}

#[test]
fn least_squares_slope_of_line() {
    assert_abs_diff_eq!(
        least_squares_slope(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap(),
        2.0,
        epsilon = 1e-12
    );
}

#[test]
fn least_squares_slope_undefined_cases() {
    assert!(least_squares_slope(&[1.0], &[2.0]).is_none());
    assert!(least_squares_slope(&[], &[]).is_none());
    assert!(least_squares_slope(&[2.0, 2.0], &[1.0, 3.0]).is_none());
}
