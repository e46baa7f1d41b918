// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the risk pipeline.
//!
//! Estimators never return errors: a violated precondition yields `NaN`.
//! [`RiskError`] is raised only by the detector, which checks up front that the
//! series can produce every score at all.

use thiserror::Error;

/// Errors raised while validating a return series or detector parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// The series is too short for one of the estimators.
    #[error("insufficient data: {reason} (got {len} samples)")]
    InsufficientData { len: usize, reason: String },

    /// The series holds a NaN or infinite value.
    #[error("non-finite return at index {index}: {value}")]
    NonFiniteInput { index: usize, value: f64 },

    /// A configuration value is outside its admissible range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl RiskError {
    pub(crate) fn insufficient(len: usize, reason: impl Into<String>) -> Self {
        Self::InsufficientData { len, reason: reason.into() }
    }

    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name, reason: reason.into() }
    }
}

pub type RiskResult<T> = Result<T, RiskError>;
