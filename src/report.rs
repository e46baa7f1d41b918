// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Human-readable rendering of risk reports.

use std::fmt::Write;

use serde::Serialize;

use crate::prices::ReturnStats;
use crate::risk::{RiskFlag, RiskReport, RiskThresholds};

/// Coarse severity shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn of(flag: RiskFlag) -> Self {
        match flag {
            RiskFlag::Latent => Severity::Low,
            RiskFlag::BlockedFlow | RiskFlag::ChaoticMemory => Severity::Medium,
            RiskFlag::StructuralTimeBomb => Severity::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "LOW RISK",
            Severity::Medium => "MEDIUM RISK",
            Severity::High => "HIGH RISK",
        }
    }
}

/// Interpretation of a report: a headline, the reasons behind the flag and
/// band-based remarks on each score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Narrative {
    pub severity: Severity,
    pub headline: String,
    pub reasons: Vec<String>,
    pub insights: Vec<String>,
}

impl Narrative {
    pub fn for_report(report: &RiskReport, thresholds: &RiskThresholds) -> Self {
        let flag = report.risk_flag;
        let severity = Severity::of(flag);
        let headline = match flag {
            RiskFlag::StructuralTimeBomb => "Structural time bomb detected",
            RiskFlag::ChaoticMemory => "Chaotic memory detected",
            RiskFlag::BlockedFlow => "Blocked flow detected",
            RiskFlag::Latent => "Latent risk factors",
        };

        let persistence = format!(
            "High persistence (Hurst > {}): price movements tend to continue",
            thresholds.hurst
        );
        let disorder = format!(
            "High entropy (entropy > {}): very unpredictable behaviour",
            thresholds.entropy
        );
        let disconnect = format!(
            "Low mutual information (MI < {}): little link between past and future",
            thresholds.mutual_information
        );
        let reasons = match flag {
            RiskFlag::StructuralTimeBomb => vec![
                persistence,
                disorder,
                disconnect,
                "Potential for sudden, large price movements".to_string(),
            ],
            RiskFlag::ChaoticMemory => vec![
                persistence,
                disorder,
                "Moderate link between past and future".to_string(),
            ],
            RiskFlag::BlockedFlow => vec![
                disconnect,
                "Potential for sudden regime changes".to_string(),
            ],
            RiskFlag::Latent if !report.is_fully_defined() => vec![format!(
                "Undefined scores ({}) satisfy no threshold; this label is not a measurement",
                report.undefined_scores().join(", ")
            )],
            RiskFlag::Latent => vec![
                "Moderate predictability".to_string(),
                "Stable correlation patterns".to_string(),
                "Lower probability of extreme events".to_string(),
            ],
        };

        Self {
            severity,
            headline: headline.to_string(),
            reasons,
            insights: insights(report),
        }
    }
}

/// Band-based remarks on each score; NaN scores get no remark.
pub fn insights(report: &RiskReport) -> Vec<String> {
    let mut out = Vec::new();
    let h = report.hurst;
    if h > 0.6 {
        out.push("High persistence: current trends likely to continue".to_string());
    } else if h < 0.4 {
        out.push("Low persistence: mean-reverting behaviour likely".to_string());
    } else if !h.is_nan() {
        out.push("Moderate persistence: mixed trend/mean-reversion behaviour".to_string());
    }

    let e = report.entropy;
    if e > 0.8 {
        out.push("High entropy: very unpredictable price movements".to_string());
    } else if e < 0.5 {
        out.push("Low entropy: more predictable price movements".to_string());
    } else if !e.is_nan() {
        out.push("Moderate entropy: balanced predictability".to_string());
    }

    let mi = report.mutual_information;
    if mi < 0.1 {
        out.push("Low mutual information: weak link between past and future".to_string());
    } else if mi > 0.2 {
        out.push("High mutual information: strong link between past and future".to_string());
    } else if !mi.is_nan() {
        out.push("Moderate mutual information: balanced link".to_string());
    }
    out
}

/// JSON record of one analysed series: its name, return statistics and the report fields.
///
/// Several series are emitted as an array of records, so inputs sharing a name stay apart.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesRecord<'a> {
    pub name: &'a str,
    pub return_stats: Option<ReturnStats>,
    #[serde(flatten)]
    pub report: &'a RiskReport,
}

/// Full text rendering of one report, with a basic statistics block when `stats` is given.
pub fn render_text(
    name: &str,
    report: &RiskReport,
    stats: Option<&ReturnStats>,
    thresholds: &RiskThresholds,
) -> String {
    let narrative = Narrative::for_report(report, thresholds);
    let mut out = String::new();
    let rule = "=".repeat(60);
    let _ = writeln!(out, "Risk analysis for {name}");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "  Samples:            {}", report.samples);
    if let Some(stats) = stats {
        let _ = writeln!(out);
        let _ = writeln!(out, "Basic statistics:");
        let _ = writeln!(out, "  Mean Return:        {:.4}", stats.mean);
        let _ = writeln!(out, "  Std Return:         {:.4}", stats.std);
        let _ = writeln!(out, "  Min Return:         {:.4}", stats.min);
        let _ = writeln!(out, "  Max Return:         {:.4}", stats.max);
        let _ = writeln!(out);
        let _ = writeln!(out, "Risk factors:");
    }
    let _ = writeln!(out, "  Entropy:            {:.4}", report.entropy);
    let _ = writeln!(out, "  Mutual Information: {:.4}", report.mutual_information);
    let _ = writeln!(out, "  Hurst Exponent:     {:.4}", report.hurst);
    let _ = writeln!(out, "  Risk Flag:          {}", report.risk_flag);
    if report.entropy_jittered {
        let _ = writeln!(
            out,
            "  Note: constant series, entropy computed on jittered values"
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}: {}", narrative.severity.label(), narrative.headline);
    for reason in &narrative.reasons {
        let _ = writeln!(out, "  - {reason}");
    }
    if !narrative.insights.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Additional insights:");
        for insight in &narrative.insights {
            let _ = writeln!(out, "  - {insight}");
        }
    }
    let _ = writeln!(out, "{rule}");
    out
}

/// Comparison table of several reports plus the list of high-risk names.
pub fn render_summary(reports: &[(String, RiskReport)]) -> String {
    let mut out = String::new();
    let width = reports
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0)
        .max(4);
    let _ = writeln!(out, "Summary comparison");
    let _ = writeln!(
        out,
        "{:<width$}  {:>8}  {:>8}  {:>8}  {}",
        "name", "entropy", "mi_norm", "hurst", "risk_flag"
    );
    for (name, r) in reports {
        let _ = writeln!(
            out,
            "{:<width$}  {:>8.4}  {:>8.4}  {:>8.4}  {}",
            name, r.entropy, r.mutual_information, r.hurst, r.risk_flag
        );
    }

    let high_risk = high_risk_names(reports);
    let _ = writeln!(out);
    if high_risk.is_empty() {
        let _ = writeln!(out, "All analysed series show low risk levels");
    } else {
        let _ = writeln!(out, "High risk: {}", high_risk.join(", "));
    }
    out
}

/// Names whose flag is `structural_time_bomb` or `chaotic_memory`.
pub fn high_risk_names(reports: &[(String, RiskReport)]) -> Vec<&str> {
    reports
        .iter()
        .filter(|(_, r)| r.risk_flag.is_high_risk())
        .map(|(name, _)| name.as_str())
        .collect()
}
