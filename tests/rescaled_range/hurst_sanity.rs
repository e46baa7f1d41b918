// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use riskmeasure::estimators::hurst::{DEFAULT_MIN_WINDOW, Hurst, hurst_exponent};
use riskmeasure::estimators::traits::GlobalValue;

use crate::test_helpers::{generate_alternating_noise, generate_returns, generate_trending_walk};

#[test]
fn hurst_white_noise_is_near_one_half() {
    for seed in [1_u64, 2, 3] {
        let data = generate_returns(2000, seed);
        let h = hurst_exponent(&data, DEFAULT_MIN_WINDOW);
        assert!((0.35..=0.65).contains(&h), "seed {seed}: H = {h}");
    }
}

#[test]
fn hurst_mean_reverting_series_is_below_one_half() {
    let data = generate_alternating_noise(1000, 5);
    let h = hurst_exponent(&data, DEFAULT_MIN_WINDOW);
    assert!(h < 0.5, "H = {h}");
}

#[test]
fn hurst_trending_series_is_above_one_half() {
    let data = generate_trending_walk(1000, 6);
    let h = hurst_exponent(&data, DEFAULT_MIN_WINDOW);
    assert!(h > 0.5, "H = {h}");
}

#[test]
fn hurst_constant_series_is_undefined() {
    let est = Hurst::new_rescaled_range(Array1::from(vec![1.0; 200]), DEFAULT_MIN_WINDOW);
    assert!(est.points().is_empty());
    assert!(!est.windows().is_empty());
    assert!(est.global_value().is_nan());
}

#[test]
fn hurst_too_short_series_is_undefined() {
    // n / 2 = 1: only the minimum window survives and it does not fit
    assert!(hurst_exponent(&[0.1, -0.2, 0.3], DEFAULT_MIN_WINDOW).is_nan());
    assert!(hurst_exponent(&[], DEFAULT_MIN_WINDOW).is_nan());
}

#[test]
fn hurst_records_valid_points() {
    let data = generate_returns(500, 11);
    let est = Hurst::new_rescaled_range(Array1::from(data), 16);
    assert_eq!(est.n_samples, 500);
    assert_eq!(est.min_window, 16);
    let windows: Vec<usize> = est.points().iter().map(|p| p.window).collect();
    assert_eq!(windows, est.windows());
    assert!(est.points().iter().all(|p| p.mean_rs > 0.0));
    assert!(est.global_value().is_finite());
}

#[test]
fn hurst_is_deterministic() {
    let data = generate_returns(800, 13);
    assert_eq!(hurst_exponent(&data, 16), hurst_exponent(&data, 16));
}
