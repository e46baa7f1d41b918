// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod classifier;
pub mod detector;

pub use classifier::{RiskFlag, RiskThresholds, classify};
pub use detector::{RiskDetector, RiskReport, detect_risk_factors};
