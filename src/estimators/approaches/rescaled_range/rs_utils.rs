// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Serialize;

/// Number of logarithmically spaced window sizes probed by the R/S analysis.
pub const SCALE_COUNT: usize = 10;

/// Mean rescaled range of one window size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RsPoint {
    pub window: usize,
    pub mean_rs: f64,
}

/// Window sizes for an R/S analysis of `n` samples.
///
/// `SCALE_COUNT` sizes spaced logarithmically between `min_window` and `n / 2`, floored to
/// integers, deduplicated and restricted to sizes >= 2. The endpoints are exact.
/// When `n / 2 < min_window` the sizes descend from `min_window`, so some of them may
/// exceed `n` and produce no segment. Returned in ascending order.
pub fn window_sizes(n: usize, min_window: usize) -> Vec<usize> {
    let max_window = n / 2;
    if min_window == 0 || max_window == 0 {
        return Vec::new();
    }
    let lo = min_window as f64;
    let ratio = max_window as f64 / lo;
    let last = (SCALE_COUNT - 1) as f64;
    let mut sizes: Vec<usize> = (0..SCALE_COUNT)
        .map(|i| match i {
            0 => min_window,
            i if i == SCALE_COUNT - 1 => max_window,
            i => (lo * ratio.powf(i as f64 / last)).floor() as usize,
        })
        .filter(|&w| w >= 2)
        .collect();
    sizes.sort_unstable();
    sizes.dedup();
    sizes
}

/// Rescaled range R/S of one segment.
///
/// R is the range of the cumulative deviation from the segment mean, S the population
/// standard deviation. Returns `None` when S is zero (or not finite).
pub fn rescaled_range(segment: &[f64]) -> Option<f64> {
    if segment.is_empty() {
        return None;
    }
    let n = segment.len() as f64;
    let mean = segment.iter().sum::<f64>() / n;

    let mut running = 0.0_f64;
    let mut min_c = f64::INFINITY;
    let mut max_c = f64::NEG_INFINITY;
    let mut sum_sq = 0.0_f64;
    for &v in segment {
        let dev = v - mean;
        running += dev;
        min_c = min_c.min(running);
        max_c = max_c.max(running);
        sum_sq += dev * dev;
    }
    let s = (sum_sq / n).sqrt();
    // Written as `s > 0` so a NaN deviation is skipped too.
    if s > 0.0 && s.is_finite() {
        Some((max_c - min_c) / s)
    } else {
        None
    }
}

/// Mean R/S over the non-overlapping segments of length `window`; the trailing remainder
/// is discarded. `None` when no segment has a nonzero standard deviation.
pub fn mean_rescaled_range(series: &[f64], window: usize) -> Option<f64> {
    if window == 0 {
        return None;
    }
    let (sum, valid) = series
        .chunks_exact(window)
        .filter_map(rescaled_range)
        .fold((0.0_f64, 0usize), |(sum, valid), rs| (sum + rs, valid + 1));
    (valid > 0).then(|| sum / valid as f64)
}

/// Ordinary least-squares slope of `ys` against `xs`.
///
/// `None` with fewer than two points or when all `xs` coincide.
pub fn least_squares_slope(xs: &[f64], ys: &[f64]) -> Option<f64> {
    assert_eq!(xs.len(), ys.len(), "Regression requires paired samples");
    if xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;

    // slope = Σ((x-x̄)(y-ȳ)) / Σ((x-x̄)²)
    let (num, den) = xs
        .iter()
        .zip(ys.iter())
        .fold((0.0_f64, 0.0_f64), |(num, den), (&x, &y)| {
            let dx = x - x_mean;
            (num + dx * (y - y_mean), den + dx * dx)
        });
    (den > 0.0).then(|| num / den)
}
