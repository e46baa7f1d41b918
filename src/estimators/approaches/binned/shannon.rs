// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use tracing::warn;

use crate::estimators::approaches::binned::binned_utils::{HistogramDataset, population_std};
use crate::estimators::traits::GlobalValue;

/// Standard deviation at or below which a sample counts as constant.
pub const DEGENERATE_STD_TOLERANCE: f64 = 1e-8;

/// Magnitude of the Gaussian jitter injected into constant samples, relative to `max(1, |mean|)`.
pub const JITTER_SCALE: f64 = 1e-12;

/// Seed of the random source used by [`BinnedEntropy::new`].
pub const DEFAULT_JITTER_SEED: u64 = 42;

/// Shannon entropy estimator for continuous samples using an equal-width histogram (base 2).
///
/// The observed range is split into `bins` buckets, counts are turned into probabilities,
/// empty buckets are dropped and H = -Σ p log2 p. By default the result is normalized by
/// `log2(bins)`, the entropy of a uniform spread over every bucket, so it lies in `[0, 1]`.
/// With `bins <= 1` the normalized value is undefined and reported as NaN.
///
/// A sample whose standard deviation is numerically zero would collapse into a single
/// bucket. Such samples get tiny Gaussian jitter before binning; this is an approximation
/// that only avoids a zero-width histogram. It is logged and exposed through
/// [`BinnedEntropy::was_jittered`].
pub struct BinnedEntropy {
    dataset: HistogramDataset,
    bins: usize,
    normalize: bool,
    jittered: bool,
}

impl BinnedEntropy {
    /// Build with a fixed-seed random source for the degenerate-variance jitter.
    pub fn new(data: Array1<f64>, bins: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(DEFAULT_JITTER_SEED);
        Self::new_with_rng(data, bins, &mut rng)
    }

    /// Build with an explicit random source for the degenerate-variance jitter.
    pub fn new_with_rng<R: Rng + ?Sized>(mut data: Array1<f64>, bins: usize, rng: &mut R) -> Self {
        let jittered = jitter_if_degenerate(&mut data, rng);
        let dataset = match data.as_slice() {
            Some(slice) => HistogramDataset::from_data(slice, bins),
            None => HistogramDataset::from_data(&data.to_vec(), bins),
        };
        Self {
            dataset,
            bins,
            normalize: true,
            jittered,
        }
    }

    /// Toggle normalization by `log2(bins)` (enabled by default).
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Raw entropy in bits.
    pub fn entropy_bits(&self) -> f64 {
        self.dataset.entropy_bits()
    }

    /// Maximum entropy attainable with this many buckets, `log2(bins)`.
    pub fn max_entropy(&self) -> f64 {
        self.dataset.max_entropy_bits()
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Whether the sample was constant and received jitter before binning.
    pub fn was_jittered(&self) -> bool {
        self.jittered
    }
}

impl GlobalValue for BinnedEntropy {
    fn global_value(&self) -> f64 {
        let h = self.entropy_bits();
        if !self.normalize {
            return h;
        }
        let h_max = self.max_entropy();
        if h_max > 0.0 { h / h_max } else { f64::NAN }
    }
}

/// Add `N(0, 1) * 1e-12 * max(1, |mean|)` to every element of a constant sample.
/// Returns whether jitter was applied.
fn jitter_if_degenerate<R: Rng + ?Sized>(data: &mut Array1<f64>, rng: &mut R) -> bool {
    if data.is_empty() {
        return false;
    }
    let std = match data.as_slice() {
        Some(slice) => population_std(slice),
        None => population_std(&data.to_vec()),
    };
    // NaN std (non-finite input) is left alone; binning reports it as undefined.
    if std.is_nan() || std > DEGENERATE_STD_TOLERANCE {
        return false;
    }
    let mean = data.mean().unwrap_or(0.0);
    let scale = JITTER_SCALE * mean.abs().max(1.0);
    data.mapv_inplace(|v| {
        let noise: f64 = StandardNormal.sample(&mut *rng);
        v + scale * noise
    });
    warn!(
        len = data.len(),
        std,
        "zero-variance sample: injected {:e} jitter before binning, entropy is approximate",
        scale
    );
    true
}
