// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

/// Shared dataset for histogram-based (binned) estimators over continuous samples.
///
/// Holds the per-cell occupancy counts of an equal-width partition. Cells may be the
/// `bins` buckets of a 1D histogram or the `bins * bins` cells of a joint 2D histogram.
pub struct HistogramDataset {
    /// Occupancy count per cell (zero cells may be omitted)
    pub counts: Vec<usize>,
    /// Total number of observations
    pub n: usize,
    /// Number of cells of the partition
    pub cells: usize,
}

impl HistogramDataset {
    /// Bin a 1D sample into `bins` equal-width buckets over its observed range.
    ///
    /// Empty, non-finite or zero-bin input yields an empty dataset.
    pub fn from_data(data: &[f64], bins: usize) -> Self {
        match bin_codes(data, bins) {
            Some(codes) => Self::from_codes(&codes, bins),
            None => Self::empty(bins),
        }
    }

    /// Build the joint 2D histogram of two index-aligned samples, `bins` per axis.
    pub fn joint_from_data(x: &[f64], y: &[f64], bins: usize) -> Self {
        assert_eq!(x.len(), y.len(), "Joint histogram requires index-aligned samples");
        let cells = bins.saturating_mul(bins);
        match (bin_codes(x, bins), bin_codes(y, bins)) {
            (Some(cx), Some(cy)) => {
                let joint = joint_codes(&cx, &cy, bins);
                Self::from_codes(&joint, cells)
            }
            _ => Self::empty(cells),
        }
    }

    /// Build from precomputed cell codes in `0..cells`.
    pub fn from_codes(codes: &[usize], cells: usize) -> Self {
        Self {
            counts: count_cells(codes, cells),
            n: codes.len(),
            cells,
        }
    }

    pub fn empty(cells: usize) -> Self {
        Self { counts: Vec::new(), n: 0, cells }
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Probabilities of the occupied cells; empty cells are dropped so `log(0)` never occurs.
    pub fn probabilities(&self) -> Vec<f64> {
        let n_f = self.n as f64;
        self.counts
            .iter()
            .filter(|&&c| c > 0)
            .map(|&c| c as f64 / n_f)
            .collect()
    }

    /// Entropy of a uniform spread over every cell, `log2(cells)`.
    pub fn max_entropy_bits(&self) -> f64 {
        (self.cells as f64).log2()
    }

    /// Shannon entropy of the cell distribution in bits. NaN for an empty dataset.
    pub fn entropy_bits(&self) -> f64 {
        if self.is_empty() {
            return f64::NAN;
        }
        // -sum(p * log2 p). Order of iteration doesn't matter for sum.
        -self
            .probabilities()
            .iter()
            .map(|&p| p * p.log2())
            .sum::<f64>()
    }
}

/// Assign every sample to one of `bins` equal-width buckets spanning `[min, max]`.
///
/// Buckets are half-open except the last, which also holds `max`. A constant sample
/// spans `[v - 0.5, v + 0.5]`, so all of it lands in the middle bucket.
/// Returns `None` for empty input, `bins == 0` or a non-finite range.
pub fn bin_codes(data: &[f64], bins: usize) -> Option<Vec<usize>> {
    if data.is_empty() || bins == 0 {
        return None;
    }
    let (lo, hi) = observed_range(data)?;
    let (lo, hi) = if lo == hi { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
    let width = hi - lo;
    let bins_f = bins as f64;
    let last = bins - 1;
    let codes = data
        .iter()
        .map(|&v| {
            let pos = ((v - lo) / width * bins_f).floor();
            // pos >= 0 by construction; the max lands on `bins` and is folded into the last bucket
            (pos as usize).min(last)
        })
        .collect();
    Some(codes)
}

/// Minimum and maximum of a sample, or `None` if either is not finite.
pub fn observed_range(data: &[f64]) -> Option<(f64, f64)> {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for &v in data.iter() {
        if v.is_nan() {
            return None;
        }
        if v < min_v {
            min_v = v;
        }
        if v > max_v {
            max_v = v;
        }
    }
    (min_v.is_finite() && max_v.is_finite()).then_some((min_v, max_v))
}

/// Combine two aligned bucket code arrays into row-major joint cell codes.
pub fn joint_codes(codes_x: &[usize], codes_y: &[usize], bins: usize) -> Vec<usize> {
    assert_eq!(
        codes_x.len(),
        codes_y.len(),
        "All code arrays must have the same length for joint reduction"
    );
    codes_x
        .iter()
        .zip(codes_y.iter())
        .map(|(&ix, &iy)| ix * bins + iy)
        .collect()
}

/// Count occupancy per cell.
/// Uses a dense vector when the cell space is small, otherwise falls back to HashMap.
pub fn count_cells(codes: &[usize], cells: usize) -> Vec<usize> {
    // Range limit chosen to balance memory and speed; 30x30 joint histograms stay dense.
    const MAX_DENSE_CELLS: usize = 1 << 16;
    if cells <= MAX_DENSE_CELLS {
        let mut dense = vec![0usize; cells];
        for &c in codes.iter() {
            dense[c] += 1;
        }
        return dense;
    }

    let mut frequency_map: HashMap<usize, usize> = HashMap::new();
    for &c in codes.iter() {
        *frequency_map.entry(c).or_insert(0) += 1;
    }
    frequency_map.into_values().collect()
}

/// Population standard deviation; NaN for an empty sample.
pub fn population_std(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    (data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt()
}
