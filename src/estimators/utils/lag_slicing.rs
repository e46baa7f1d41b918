// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, s};

/// Slices a series into its index-aligned lag-`lag` views `(future, past)`.
///
/// `future[t] = series[t + lag]` and `past[t] = series[t]`, both of length `N - lag`.
/// `lag == 0` yields two copies of the series; `lag >= N` yields two empty arrays.
pub fn lagged_pair<T: Clone>(series: &Array1<T>, lag: usize) -> (Array1<T>, Array1<T>) {
    let n = series.len();
    if lag >= n {
        return (Array1::from(Vec::new()), Array1::from(Vec::new()));
    }
    let future = series.slice(s![lag..]).to_owned();
    let past = series.slice(s![..n - lag]).to_owned();
    (future, past)
}

/// Number of aligned pairs a lag-`lag` slicing of `n` samples produces.
pub fn lagged_len(n: usize, lag: usize) -> usize {
    n.saturating_sub(lag)
}
