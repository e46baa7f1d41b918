// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration Module
//!
//! Estimator parameters and classifier thresholds, loadable from TOML.

pub mod loader;

pub use loader::{ConfigError, EstimatorSection, RiskConfig, load_config};
