// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use tracing::trace;

use crate::estimators::approaches::rescaled_range::rs_utils::{
    RsPoint, least_squares_slope, mean_rescaled_range, window_sizes,
};
use crate::estimators::traits::GlobalValue;

/// Default smallest R/S window.
pub const DEFAULT_MIN_WINDOW: usize = 16;

/// Hurst exponent estimator via rescaled-range (R/S) analysis.
///
/// The sample is mean-centered, then for each of the logarithmically spaced window sizes
/// (see [`window_sizes`]) it is cut into non-overlapping segments whose R/S statistics are
/// averaged. The Hurst exponent is the least-squares slope of `ln(mean R/S)` against
/// `ln(window)`.
///
/// H ≈ 0.5 indicates an uncorrelated walk, H > 0.5 persistent (trending) behaviour and
/// H < 0.5 mean reversion. If fewer than two window sizes produce a valid R/S value the
/// slope is undefined and the estimate is NaN.
pub struct RescaledRangeHurst {
    points: Vec<RsPoint>,
    windows: Vec<usize>,
    pub n_samples: usize,
    pub min_window: usize,
}

impl RescaledRangeHurst {
    pub fn new(data: Array1<f64>, min_window: usize) -> Self {
        let n_samples = data.len();
        let mean = data.mean().unwrap_or(0.0);
        let centered: Vec<f64> = data.iter().map(|v| v - mean).collect();

        let windows = window_sizes(n_samples, min_window);
        let points: Vec<RsPoint> = windows
            .iter()
            .filter_map(|&window| {
                mean_rescaled_range(&centered, window).map(|mean_rs| RsPoint { window, mean_rs })
            })
            .collect();
        trace!(
            n = n_samples,
            windows = windows.len(),
            valid = points.len(),
            "R/S scales evaluated"
        );
        Self {
            points,
            windows,
            n_samples,
            min_window,
        }
    }

    /// Window sizes that produced at least one valid segment, with their mean R/S.
    pub fn points(&self) -> &[RsPoint] {
        &self.points
    }

    /// All probed window sizes, valid or not.
    pub fn windows(&self) -> &[usize] {
        &self.windows
    }
}

impl GlobalValue for RescaledRangeHurst {
    fn global_value(&self) -> f64 {
        let log_n: Vec<f64> = self.points.iter().map(|p| (p.window as f64).ln()).collect();
        let log_rs: Vec<f64> = self.points.iter().map(|p| p.mean_rs.ln()).collect();
        least_squares_slope(&log_n, &log_rs).unwrap_or(f64::NAN)
    }
}
