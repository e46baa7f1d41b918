// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use riskmeasure::estimators::approaches::binned::binned_utils::{
    HistogramDataset, bin_codes, count_cells, joint_codes, observed_range, population_std,
};
use rstest::*;

#[rstest]
#[case(vec![0.0, 1.0], 2, vec![0, 1])]
#[case(vec![0.0, 0.5, 1.0], 2, vec![0, 1, 1])]
#[case(vec![0.0, 0.24, 0.25, 0.99, 1.0], 4, vec![0, 0, 1, 3, 3])]
#[case(vec![-3.0, 3.0, 0.0], 3, vec![0, 2, 1])]
fn bin_codes_half_open_with_closed_last_bucket(
    #[case] data: Vec<f64>,
    #[case] bins: usize,
    #[case] expected: Vec<usize>,
) {
    assert_eq!(bin_codes(&data, bins).unwrap(), expected);
}

#[test]
fn bin_codes_constant_sample_lands_in_middle_bucket() {
    // range widened to [v - 0.5, v + 0.5]
    assert_eq!(bin_codes(&[7.0, 7.0, 7.0], 30).unwrap(), vec![15, 15, 15]);
    assert_eq!(bin_codes(&[7.0], 4).unwrap(), vec![2]);
}

#[test]
fn bin_codes_rejects_degenerate_input() {
    assert!(bin_codes(&[], 10).is_none());
    assert!(bin_codes(&[1.0, 2.0], 0).is_none());
    assert!(bin_codes(&[1.0, f64::NAN], 10).is_none());
    assert!(bin_codes(&[1.0, f64::INFINITY], 10).is_none());
}

#[test]
fn observed_range_of_sample() {
    assert_eq!(observed_range(&[3.0, -1.0, 2.0]), Some((-1.0, 3.0)));
    assert_eq!(observed_range(&[]), None);
    assert_eq!(observed_range(&[f64::NAN]), None);
}

#[test]
fn joint_codes_row_major() {
    let codes = joint_codes(&[0, 1, 2], &[2, 0, 1], 3);
    assert_eq!(codes, vec![2, 3, 7]);
}

#[test]
fn count_cells_dense_keeps_all_cells() {
    let counts = count_cells(&[0, 0, 3], 5);
    assert_eq!(counts, vec![2, 0, 0, 1, 0]);
}

#[test]
fn count_cells_sparse_for_large_cell_space() {
    let mut counts = count_cells(&[0, 0, 1_000_000], 2_000_000);
    counts.sort_unstable();
    assert_eq!(counts, vec![1, 2]);
}

#[test]
fn histogram_entropy_in_bits() {
    // four equiprobable cells: 2 bits
    let ds = HistogramDataset::from_codes(&[0, 1, 2, 3, 0, 1, 2, 3], 4);
    assert_abs_diff_eq!(ds.entropy_bits(), 2.0, epsilon = 1e-12);
    // all mass in one cell: 0 bits
    let ds = HistogramDataset::from_codes(&[1, 1, 1], 4);
    assert_abs_diff_eq!(ds.entropy_bits(), 0.0, epsilon = 1e-12);
    // no observations: undefined
    assert!(HistogramDataset::empty(4).entropy_bits().is_nan());
}

#[test]
fn histogram_max_entropy_spans_all_cells() {
    let ds = HistogramDataset::from_data(&[0.0, 1.0], 8);
    assert_eq!(ds.cells, 8);
    assert_abs_diff_eq!(ds.max_entropy_bits(), 3.0, epsilon = 1e-12);

    // joint partition holds bins * bins cells
    let joint = HistogramDataset::joint_from_data(&[0.0, 1.0], &[1.0, 0.0], 4);
    assert_eq!(joint.cells, 16);
    assert_abs_diff_eq!(joint.max_entropy_bits(), 4.0, epsilon = 1e-12);

    // empty datasets keep the partition size
    assert_abs_diff_eq!(HistogramDataset::empty(4).max_entropy_bits(), 2.0, epsilon = 1e-12);
}

#[test]
fn histogram_probabilities_drop_empty_cells() {
    let ds = HistogramDataset::from_data(&[0.0, 0.1, 0.9, 1.0], 10);
    let p = ds.probabilities();
    assert_eq!(p.len(), 3);
    assert_abs_diff_eq!(p.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
}

#[test]
fn population_std_matches_definition() {
    assert_abs_diff_eq!(population_std(&[1.0, 2.0, 3.0, 4.0]), 1.25_f64.sqrt(), epsilon = 1e-12);
    assert_eq!(population_std(&[5.0, 5.0]), 0.0);
    assert!(population_std(&[]).is_nan());
}
