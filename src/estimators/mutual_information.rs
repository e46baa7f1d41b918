// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::estimators::approaches::binned::BinnedMutualInformation;
use crate::estimators::traits::GlobalValue;
use crate::estimators::utils::lag_slicing::lagged_pair;

/// Default lag between the "future" and "past" views of a series.
pub const DEFAULT_LAG: usize = 1;

pub struct MutualInformation;

impl MutualInformation {
    /// Creates a binned mutual information estimator over two aligned samples,
    /// normalized by the entropy of `x`.
    pub fn new_binned(x: Array1<f64>, y: Array1<f64>, bins: usize) -> BinnedMutualInformation {
        BinnedMutualInformation::new(x, y, bins)
    }

    /// Creates a binned estimator of I(X_{t+lag}; X_t) for a single series.
    ///
    /// The future view is the first argument, so the value is normalized by its entropy.
    pub fn new_lagged(series: &Array1<f64>, lag: usize, bins: usize) -> BinnedMutualInformation {
        let (future, past) = lagged_pair(series, lag);
        BinnedMutualInformation::new(future, past, bins)
    }
}

/// Mutual information of two aligned samples divided by the entropy of `x`.
///
/// Asymmetric: `normalized_mutual_information(x, y, b)` generally differs from
/// `normalized_mutual_information(y, x, b)`. NaN when `x` is constant, empty or not finite.
///
/// # Panics
///
/// Panics if `x` and `y` differ in length.
pub fn normalized_mutual_information(x: &[f64], y: &[f64], bins: usize) -> f64 {
    MutualInformation::new_binned(Array1::from(x.to_vec()), Array1::from(y.to_vec()), bins)
        .global_value()
}
