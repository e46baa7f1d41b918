// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::estimators::approaches::rescaled_range::RescaledRangeHurst;
pub use crate::estimators::approaches::rescaled_range::hurst::DEFAULT_MIN_WINDOW;
use crate::estimators::traits::GlobalValue;

/// Long-range dependence estimators
pub struct Hurst;

impl Hurst {
    /// Creates a rescaled-range (R/S) Hurst exponent estimator
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional sample, typically a return series
    /// * `min_window` - Smallest segment length; the largest is `N / 2`
    pub fn new_rescaled_range(data: Array1<f64>, min_window: usize) -> RescaledRangeHurst {
        RescaledRangeHurst::new(data, min_window)
    }
}

/// Hurst exponent of `sample` by R/S analysis; NaN when no pair of window sizes yields a
/// valid rescaled range.
pub fn hurst_exponent(sample: &[f64], min_window: usize) -> f64 {
    Hurst::new_rescaled_range(Array1::from(sample.to_vec()), min_window).global_value()
}
