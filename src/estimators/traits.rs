// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    ///
    /// NaN signals that the measure is undefined for the given input.
    fn global_value(&self) -> f64;

    /// Global value, or `None` when it is NaN.
    fn defined_value(&self) -> Option<f64> {
        let v = self.global_value();
        (!v.is_nan()).then_some(v)
    }
}

/// Marker trait for Mutual Information estimator instances.
pub trait MutualInformationEstimator: GlobalValue {}
