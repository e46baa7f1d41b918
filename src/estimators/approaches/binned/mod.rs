// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Binned estimators module: histogram-based entropy and mutual information
// for continuous samples.

pub mod binned_utils;
pub mod shannon;

use crate::estimators::approaches::binned::binned_utils::HistogramDataset;
use crate::estimators::traits::{GlobalValue, MutualInformationEstimator};
use ndarray::Array1;

/// Binned Mutual Information estimator using the entropy-summation formula, normalized
/// by the entropy of the first argument.
///
/// Both samples are binned into `bins` equal-width buckets over their own observed range,
/// the joint sample into `bins x bins` cells. Entropies are raw Shannon entropies in bits
/// and I(X; Y) = H(X) + H(Y) - H(X, Y).
///
/// The normalized value is I(X; Y) / H(X). This normalization is asymmetric: swapping
/// `x` and `y` generally changes the result. In the lagged setting `x` is the "future"
/// view of the series, so the value reads as the fraction of its information explained
/// by the past. When H(X) is zero (constant `x`) the value is undefined and NaN.
///
/// Binning is range-relative, so the value is invariant under affine transforms
/// (positive scale plus shift) of either input.
pub struct BinnedMutualInformation {
    marginal_x: HistogramDataset,
    marginal_y: HistogramDataset,
    joint: HistogramDataset,
}

impl BinnedMutualInformation {
    /// # Panics
    ///
    /// Panics if `x` and `y` differ in length; callers align lagged views first.
    pub fn new(x: Array1<f64>, y: Array1<f64>, bins: usize) -> Self {
        assert_eq!(
            x.len(),
            y.len(),
            "Mutual information requires index-aligned samples of equal length"
        );
        let x = x.to_vec();
        let y = y.to_vec();
        Self {
            marginal_x: HistogramDataset::from_data(&x, bins),
            marginal_y: HistogramDataset::from_data(&y, bins),
            joint: HistogramDataset::joint_from_data(&x, &y, bins),
        }
    }

    /// H(X) in bits.
    pub fn entropy_x(&self) -> f64 {
        self.marginal_x.entropy_bits()
    }

    /// H(Y) in bits.
    pub fn entropy_y(&self) -> f64 {
        self.marginal_y.entropy_bits()
    }

    /// H(X, Y) in bits.
    pub fn joint_entropy(&self) -> f64 {
        self.joint.entropy_bits()
    }

    /// Unnormalized I(X; Y) in bits.
    pub fn raw_bits(&self) -> f64 {
        // I(X; Y) = H(X) + H(Y) - H(X, Y)
        self.entropy_x() + self.entropy_y() - self.joint_entropy()
    }
}

impl GlobalValue for BinnedMutualInformation {
    fn global_value(&self) -> f64 {
        let h_x = self.entropy_x();
        if h_x > 0.0 { self.raw_bits() / h_x } else { f64::NAN }
    }
}

impl MutualInformationEstimator for BinnedMutualInformation {}
