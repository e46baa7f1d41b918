// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::{panic, thread};
use tracing::{debug, warn};

use crate::config::RiskConfig;
use crate::error::{RiskError, RiskResult};
use crate::estimators::approaches::rescaled_range::rs_utils::{RsPoint, window_sizes};
use crate::estimators::entropy::Entropy;
use crate::estimators::hurst::Hurst;
use crate::estimators::mutual_information::MutualInformation;
use crate::estimators::traits::GlobalValue;
use crate::estimators::utils::lag_slicing::lagged_len;
use crate::risk::classifier::RiskFlag;

/// Scores and label of one return series.
///
/// Any score may be NaN, meaning the estimator is undefined for this input; check
/// [`RiskReport::undefined_scores`] before relying on a `Latent` label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    /// Normalized Shannon entropy in `[0, 1]`
    pub entropy: f64,
    /// Lagged mutual information normalized by the entropy of the future view
    pub mutual_information: f64,
    /// Hurst exponent from R/S analysis
    pub hurst: f64,
    pub risk_flag: RiskFlag,
    /// Length of the analysed series
    pub samples: usize,
    /// The series had zero variance and was jittered before binning
    pub entropy_jittered: bool,
    /// `(window, mean R/S)` pairs behind the Hurst fit
    pub rs_points: Vec<RsPoint>,
}

impl RiskReport {
    /// Names of the scores that came out NaN.
    pub fn undefined_scores(&self) -> Vec<&'static str> {
        [
            ("entropy", self.entropy),
            ("mutual_information", self.mutual_information),
            ("hurst", self.hurst),
        ]
        .into_iter()
        .filter(|(_, v)| v.is_nan())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_fully_defined(&self) -> bool {
        self.undefined_scores().is_empty()
    }
}

/// Runs the three estimators over a return series and classifies the result.
#[derive(Debug, Clone, Default)]
pub struct RiskDetector {
    config: RiskConfig,
}

impl RiskDetector {
    pub fn new(config: RiskConfig) -> RiskResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    /// Analyse one return series.
    ///
    /// Fails fast when the series is empty, holds non-finite values, leaves fewer than two
    /// aligned pairs after lagging, or admits fewer than two distinct R/S window sizes.
    pub fn analyze(&self, returns: &[f64]) -> RiskResult<RiskReport> {
        self.check_series(returns)?;
        let est = &self.config.estimators;
        let series = Array1::from(returns.to_vec());

        let mut rng = StdRng::seed_from_u64(est.jitter_seed);
        let entropy_est = Entropy::new_binned_with_rng(series.clone(), est.bins, &mut rng);
        let entropy = entropy_est.global_value();

        let mutual_information =
            MutualInformation::new_lagged(&series, est.mi_lag, est.bins).global_value();

        let hurst_est = Hurst::new_rescaled_range(series, est.min_window);
        let hurst = hurst_est.global_value();

        let risk_flag = self.config.thresholds.classify(entropy, mutual_information, hurst);
        let report = RiskReport {
            entropy,
            mutual_information,
            hurst,
            risk_flag,
            samples: returns.len(),
            entropy_jittered: entropy_est.was_jittered(),
            rs_points: hurst_est.points().to_vec(),
        };

        debug!(
            samples = report.samples,
            entropy,
            mutual_information,
            hurst,
            flag = %risk_flag,
            "risk factors computed"
        );
        let undefined = report.undefined_scores();
        if !undefined.is_empty() {
            warn!(
                undefined = ?undefined,
                flag = %risk_flag,
                "undefined scores fall through the thresholds; the flag is not a measurement"
            );
        }
        Ok(report)
    }

    /// Analyse several independent series concurrently, one scoped thread per series.
    /// Results keep the input order.
    pub fn analyze_batch<S>(&self, series: &[(S, Vec<f64>)]) -> Vec<(S, RiskResult<RiskReport>)>
    where
        S: Clone,
    {
        thread::scope(|scope| {
            let handles: Vec<_> = series
                .iter()
                .map(|(_, returns)| scope.spawn(move || self.analyze(returns)))
                .collect();
            series
                .iter()
                .zip(handles)
                .map(|((name, _), handle)| {
                    let result = handle
                        .join()
                        .unwrap_or_else(|payload| panic::resume_unwind(payload));
                    (name.clone(), result)
                })
                .collect()
        })
    }

    fn check_series(&self, returns: &[f64]) -> RiskResult<()> {
        let n = returns.len();
        if n == 0 {
            return Err(RiskError::insufficient(0, "empty return series"));
        }
        if let Some((index, &value)) = returns.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(RiskError::NonFiniteInput { index, value });
        }
        let est = &self.config.estimators;
        if lagged_len(n, est.mi_lag) < 2 {
            return Err(RiskError::insufficient(
                n,
                format!(
                    "lag-{} mutual information needs at least 2 aligned pairs",
                    est.mi_lag
                ),
            ));
        }
        // The Hurst slope needs two distinct window sizes that fit at least one segment.
        let fitting = window_sizes(n, est.min_window)
            .into_iter()
            .filter(|&w| w <= n)
            .count();
        if fitting < 2 {
            return Err(RiskError::insufficient(
                n,
                format!(
                    "rescaled-range fit needs 2 window sizes (min {}) that fit the series, got {}",
                    est.min_window, fitting
                ),
            ));
        }
        Ok(())
    }
}

/// Analyse a return series with the default configuration.
pub fn detect_risk_factors(returns: &[f64]) -> RiskResult<RiskReport> {
    RiskDetector::default().analyze(returns)
}
