// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # riskmeasure
//!
//! Information-theoretic risk signatures of financial return series: normalized Shannon
//! entropy, normalized lagged mutual information and the Hurst exponent from
//! rescaled-range analysis, combined by fixed thresholds into a categorical risk flag.
//!
//! ## Quick Start
//!
//! ```rust
//! use riskmeasure::estimators::entropy::Entropy;
//! use riskmeasure::estimators::traits::GlobalValue;
//! use riskmeasure::risk::{classify, RiskFlag};
//! use ndarray::array;
//!
//! // Normalized binned entropy of a sample
//! let data = array![0.01, -0.02, 0.015, 0.0, -0.005, 0.02];
//! let h = Entropy::new_binned(data, 4).global_value();
//! assert!((0.0..=1.0).contains(&h));
//!
//! // Thresholds: Hurst > 0.5, entropy > 0.9, mutual information < 0.05
//! assert_eq!(classify(0.95, 0.01, 0.6), RiskFlag::StructuralTimeBomb);
//! assert_eq!(classify(f64::NAN, f64::NAN, f64::NAN), RiskFlag::Latent);
//! ```
//!
//! ## Measures
//!
//! | Measure | Approach | Normalization |
//! |---------|----------|---------------|
//! | Entropy | Equal-width histogram, bits | `log2(bins)` |
//! | Mutual Information | Marginal and joint histograms, bits | H(future) |
//! | Hurst exponent | Rescaled range over 10 log-spaced windows | none |
//!
//! ## Architecture
//!
//! 1. **Estimators** (`estimators`): facade types (`Entropy`, `MutualInformation`, `Hurst`)
//!    over the `binned` and `rescaled_range` approaches, all implementing `GlobalValue`.
//! 2. **Risk** (`risk`): the threshold classifier and the detector that validates a
//!    series, runs the estimators and assembles a [`risk::RiskReport`].
//! 3. **Peripheral I/O**: price files and returns (`prices`), text rendering (`report`)
//!    and charts (`plot`). The core never depends on them.
//!
//! ## Undefined results
//!
//! Estimators return NaN instead of failing when their preconditions do not hold. NaN
//! satisfies no threshold, so the classifier labels it `latent`; the detector logs such
//! cases and lists them in [`risk::RiskReport::undefined_scores`].

pub mod config;
pub mod error;
pub mod estimators;
pub mod plot;
pub mod prices;
pub mod report;
pub mod risk;

pub use config::RiskConfig;
pub use error::{RiskError, RiskResult};
pub use estimators::{GlobalValue, MutualInformationEstimator};
pub use risk::{RiskDetector, RiskFlag, RiskReport, RiskThresholds, classify, detect_risk_factors};
