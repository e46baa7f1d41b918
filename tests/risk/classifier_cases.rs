// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use riskmeasure::risk::{RiskFlag, RiskThresholds, classify};
use rstest::*;

const NAN: f64 = f64::NAN;

#[rstest]
#[case(0.95, 0.01, 0.60, RiskFlag::StructuralTimeBomb)]
#[case(0.95, 0.10, 0.60, RiskFlag::ChaoticMemory)]
#[case(0.50, 0.01, 0.60, RiskFlag::BlockedFlow)]
#[case(0.95, 0.01, 0.40, RiskFlag::BlockedFlow)]
#[case(0.50, 0.10, 0.40, RiskFlag::Latent)]
#[case(0.95, 0.10, 0.40, RiskFlag::Latent)]
fn classify_rule_table(
    #[case] entropy: f64,
    #[case] mi: f64,
    #[case] hurst: f64,
    #[case] expected: RiskFlag,
) {
    assert_eq!(classify(entropy, mi, hurst), expected);
}

#[rstest]
// Comparisons are strict: values sitting on a threshold do not trigger it
#[case(0.90, 0.10, 0.60, RiskFlag::Latent)]
#[case(0.95, 0.10, 0.50, RiskFlag::Latent)]
#[case(0.95, 0.05, 0.60, RiskFlag::ChaoticMemory)]
#[case(0.50, 0.05, 0.50, RiskFlag::Latent)]
fn classify_thresholds_are_strict(
    #[case] entropy: f64,
    #[case] mi: f64,
    #[case] hurst: f64,
    #[case] expected: RiskFlag,
) {
    assert_eq!(classify(entropy, mi, hurst), expected);
}

#[rstest]
#[case(NAN, NAN, NAN, RiskFlag::Latent)]
#[case(0.95, NAN, 0.60, RiskFlag::ChaoticMemory)]
#[case(NAN, 0.01, 0.60, RiskFlag::BlockedFlow)]
#[case(0.95, 0.01, NAN, RiskFlag::BlockedFlow)]
#[case(0.95, NAN, NAN, RiskFlag::Latent)]
fn classify_nan_satisfies_no_threshold(
    #[case] entropy: f64,
    #[case] mi: f64,
    #[case] hurst: f64,
    #[case] expected: RiskFlag,
) {
    assert_eq!(classify(entropy, mi, hurst), expected);
}

#[test]
fn custom_thresholds_move_the_boundaries() {
    let thresholds = RiskThresholds {
        hurst: 0.3,
        entropy: 0.5,
        mutual_information: 0.2,
    };
    assert_eq!(thresholds.classify(0.6, 0.1, 0.4), RiskFlag::StructuralTimeBomb);
    assert_eq!(classify(0.6, 0.1, 0.4), RiskFlag::Latent);
}

#[test]
fn thresholds_reject_non_finite_values() {
    assert!(RiskThresholds::default().validate().is_ok());
    let bad = RiskThresholds {
        entropy: f64::INFINITY,
        ..RiskThresholds::default()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn flag_names_and_levels() {
    let names: Vec<&str> = RiskFlag::ALL.iter().map(|f| f.as_str()).collect();
    assert_eq!(
        names,
        ["latent", "blocked_flow", "chaotic_memory", "structural_time_bomb"]
    );
    let levels: Vec<u8> = RiskFlag::ALL.iter().map(|f| f.level()).collect();
    assert_eq!(levels, [1, 2, 3, 4]);
    assert_eq!(RiskFlag::ChaoticMemory.to_string(), "chaotic_memory");
}

#[test]
fn flag_high_risk_subset() {
    assert!(RiskFlag::StructuralTimeBomb.is_high_risk());
    assert!(RiskFlag::ChaoticMemory.is_high_risk());
    assert!(!RiskFlag::BlockedFlow.is_high_risk());
    assert!(!RiskFlag::Latent.is_high_risk());
}

#[test]
fn flag_serializes_snake_case() {
    let json = serde_json::to_string(&RiskFlag::StructuralTimeBomb).unwrap();
    assert_eq!(json, "\"structural_time_bomb\"");
    let back: RiskFlag = serde_json::from_str("\"blocked_flow\"").unwrap();
    assert_eq!(back, RiskFlag::BlockedFlow);
}
