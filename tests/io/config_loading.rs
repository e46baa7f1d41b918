// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use riskmeasure::config::{ConfigError, RiskConfig, load_config};
use riskmeasure::RiskError;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn default_config_reproduces_reference_parameters() {
    let config = RiskConfig::default();
    assert_eq!(config.estimators.bins, 30);
    assert_eq!(config.estimators.mi_lag, 1);
    assert_eq!(config.estimators.min_window, 16);
    assert_eq!(config.estimators.jitter_seed, 42);
    assert_eq!(config.thresholds.hurst, 0.5);
    assert_eq!(config.thresholds.entropy, 0.9);
    assert_eq!(config.thresholds.mutual_information, 0.05);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_file_loads_defaults() {
    let file = write_config("");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config, RiskConfig::default());
}

#[test]
fn partial_file_overrides_named_fields() {
    let file = write_config(
        r#"
[estimators]
bins = 20
mi_lag = 2

[thresholds]
hurst = 0.55
"#,
    );
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.estimators.bins, 20);
    assert_eq!(config.estimators.mi_lag, 2);
    assert_eq!(config.estimators.min_window, 16);
    assert_eq!(config.thresholds.hurst, 0.55);
    assert_eq!(config.thresholds.entropy, 0.9);
}

#[test]
fn invalid_values_fail_validation() {
    let file = write_config("[estimators]\nmi_lag = 0\n");
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationError(RiskError::InvalidParameter { name: "estimators.mi_lag", .. })
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_config("[estimators\nbins = 20\n");
    assert!(matches!(load_config(file.path()), Err(ConfigError::ParseError(_))));

    let file = write_config("[estimators]\nbins = \"many\"\n");
    assert!(matches!(load_config(file.path()), Err(ConfigError::ParseError(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::IoError(_)));
}

#[test]
fn config_survives_toml_round_trip() {
    let mut config = RiskConfig::default();
    config.estimators.bins = 12;
    config.thresholds.mutual_information = 0.1;
    let text = config.to_toml().unwrap();
    assert!(text.contains("[estimators]"));
    assert!(text.contains("[thresholds]"));

    let file = write_config(&text);
    assert_eq!(load_config(file.path()).unwrap(), config);
}
