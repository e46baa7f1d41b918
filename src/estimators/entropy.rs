// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use rand::Rng;

use crate::estimators::approaches::binned;
pub use crate::estimators::traits::GlobalValue;

/// Default number of equal-width histogram buckets.
pub const DEFAULT_BINS: usize = 30;

/// Entropy estimation methods for continuous samples
///
/// This struct provides static methods for creating entropy estimators.
pub struct Entropy;

impl Entropy {
    /// Creates a new binned (histogram) Shannon entropy estimator, normalized to `[0, 1]`
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional sample
    /// * `bins` - Number of equal-width buckets over the observed range
    ///
    /// # Returns
    ///
    /// A binned entropy estimator; constant samples are jittered with a fixed-seed source
    pub fn new_binned(data: Array1<f64>, bins: usize) -> binned::shannon::BinnedEntropy {
        binned::shannon::BinnedEntropy::new(data, bins)
    }

    /// Creates a new binned entropy estimator drawing jitter from `rng`
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional sample
    /// * `bins` - Number of equal-width buckets over the observed range
    /// * `rng` - Random source used only when the sample has zero variance
    pub fn new_binned_with_rng<R: Rng + ?Sized>(
        data: Array1<f64>,
        bins: usize,
        rng: &mut R,
    ) -> binned::shannon::BinnedEntropy {
        binned::shannon::BinnedEntropy::new_with_rng(data, bins, rng)
    }
}

/// Shannon entropy of `sample` over `bins` equal-width buckets, in bits or normalized by
/// `log2(bins)`.
///
/// NaN when the sample is empty or not finite, or when `normalize` is set and `bins <= 1`.
pub fn entropy<R: Rng + ?Sized>(sample: &[f64], bins: usize, normalize: bool, rng: &mut R) -> f64 {
    Entropy::new_binned_with_rng(Array1::from(sample.to_vec()), bins, rng)
        .with_normalization(normalize)
        .global_value()
}
