// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration Loader
//!
//! Every field has a default, so an empty file (or no file) reproduces the reference
//! behaviour: 30 bins, lag 1, minimum R/S window 16, thresholds 0.5 / 0.9 / 0.05.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::error::{RiskError, RiskResult};
use crate::estimators::approaches::binned::shannon::DEFAULT_JITTER_SEED;
use crate::estimators::entropy::DEFAULT_BINS;
use crate::estimators::hurst::DEFAULT_MIN_WINDOW;
use crate::estimators::mutual_information::DEFAULT_LAG;
use crate::risk::classifier::RiskThresholds;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    pub estimators: EstimatorSection,
    pub thresholds: RiskThresholds,
}

/// Estimator configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorSection {
    /// Number of equal-width histogram buckets for entropy and mutual information
    pub bins: usize,
    /// Lag between the future and past views for mutual information
    pub mi_lag: usize,
    /// Smallest R/S window for the Hurst exponent
    pub min_window: usize,
    /// Seed of the random source used to jitter zero-variance samples
    pub jitter_seed: u64,
}

impl Default for EstimatorSection {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            mi_lag: DEFAULT_LAG,
            min_window: DEFAULT_MIN_WINDOW,
            jitter_seed: DEFAULT_JITTER_SEED,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(#[from] RiskError),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RiskConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: RiskConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl RiskConfig {
    /// Validate all configuration parameters
    pub fn validate(&self) -> RiskResult<()> {
        let est = &self.estimators;
        if est.bins == 0 {
            return Err(RiskError::invalid("estimators.bins", "must be > 0"));
        }
        if est.mi_lag == 0 {
            return Err(RiskError::invalid(
                "estimators.mi_lag",
                "must be > 0, a lag of 0 compares the series with itself",
            ));
        }
        if est.min_window < 2 {
            return Err(RiskError::invalid(
                "estimators.min_window",
                format!("must be >= 2, got {}", est.min_window),
            ));
        }
        self.thresholds.validate()
    }

    /// Serialize to TOML, e.g. to write out a starting configuration.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
