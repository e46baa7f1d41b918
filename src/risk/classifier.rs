// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RiskError, RiskResult};

/// Categorical risk label assigned from entropy, mutual information and Hurst exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFlag {
    /// None of the patterns below; also the label for undefined (NaN) scores.
    Latent,
    /// Past and future share almost no information.
    BlockedFlow,
    /// Persistent yet highly unpredictable.
    ChaoticMemory,
    /// Persistent, highly unpredictable and with no usable past/future link.
    StructuralTimeBomb,
}

impl RiskFlag {
    pub const ALL: [RiskFlag; 4] = [
        RiskFlag::Latent,
        RiskFlag::BlockedFlow,
        RiskFlag::ChaoticMemory,
        RiskFlag::StructuralTimeBomb,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskFlag::Latent => "latent",
            RiskFlag::BlockedFlow => "blocked_flow",
            RiskFlag::ChaoticMemory => "chaotic_memory",
            RiskFlag::StructuralTimeBomb => "structural_time_bomb",
        }
    }

    /// Ordinal risk level, 1 (latent) to 4 (structural time bomb).
    pub fn level(&self) -> u8 {
        match self {
            RiskFlag::Latent => 1,
            RiskFlag::BlockedFlow => 2,
            RiskFlag::ChaoticMemory => 3,
            RiskFlag::StructuralTimeBomb => 4,
        }
    }

    /// Persistent high-entropy patterns.
    pub fn is_high_risk(&self) -> bool {
        matches!(self, RiskFlag::ChaoticMemory | RiskFlag::StructuralTimeBomb)
    }
}

impl fmt::Display for RiskFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision thresholds of the classifier. All comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Hurst exponent above which a series counts as persistent
    pub hurst: f64,
    /// Normalized entropy above which a series counts as unpredictable
    pub entropy: f64,
    /// Normalized mutual information below which past and future count as disconnected
    pub mutual_information: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            hurst: 0.5,
            entropy: 0.9,
            mutual_information: 0.05,
        }
    }
}

impl RiskThresholds {
    pub fn validate(&self) -> RiskResult<()> {
        for (name, value) in [
            ("thresholds.hurst", self.hurst),
            ("thresholds.entropy", self.entropy),
            ("thresholds.mutual_information", self.mutual_information),
        ] {
            if !value.is_finite() {
                return Err(RiskError::invalid(name, format!("must be finite, got {value}")));
            }
        }
        Ok(())
    }

    /// Assign a flag; the first matching rule wins.
    ///
    /// NaN never satisfies a comparison, so undefined scores fall through to
    /// [`RiskFlag::Latent`]. Such a `Latent` cannot be told apart from a measured one.
    pub fn classify(&self, entropy: f64, mutual_information: f64, hurst: f64) -> RiskFlag {
        let persistent_disorder = hurst > self.hurst && entropy > self.entropy;
        let disconnected = mutual_information < self.mutual_information;
        if persistent_disorder && disconnected {
            RiskFlag::StructuralTimeBomb
        } else if persistent_disorder {
            RiskFlag::ChaoticMemory
        } else if disconnected {
            RiskFlag::BlockedFlow
        } else {
            RiskFlag::Latent
        }
    }
}

/// Classify with the default thresholds (Hurst 0.5, entropy 0.9, mutual information 0.05).
pub fn classify(entropy: f64, mutual_information: f64, hurst: f64) -> RiskFlag {
    RiskThresholds::default().classify(entropy, mutual_information, hurst)
}
