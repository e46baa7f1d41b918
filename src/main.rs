// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! riskmeasure - risk flags for price series from the command line.

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt};

use riskmeasure::config::load_config;
use riskmeasure::prices::{ReturnStats, price_relatives, read_closes};
use riskmeasure::report::{SeriesRecord, render_summary, render_text};
use riskmeasure::{RiskConfig, RiskDetector, RiskReport, plot};

use crate::cli::{AnalyzeCmd, CliApp, Command, CompareCmd, EstimatorArgs};

fn main() -> Result<()> {
    let app = CliApp::parse();
    init_logging(app.verbose, app.debug);

    match app.command {
        Command::Analyze(cmd) => analyze_command(&app.estimator, cmd),
        Command::Compare(cmd) => compare_command(&app.estimator, cmd),
        Command::DefaultConfig => {
            print!("{}", RiskConfig::default().to_toml()?);
            Ok(())
        }
    }
}

fn init_logging(verbose: bool, debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn build_detector(args: &EstimatorArgs) -> Result<RiskDetector> {
    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => RiskConfig::default(),
    };
    let config = args.apply(config);
    RiskDetector::new(config).context("Invalid estimator configuration")
}

fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn load_returns(path: &Path, column: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let closes = read_closes(path, column)
        .with_context(|| format!("Failed to read prices from {}", path.display()))?;
    let returns = price_relatives(&closes)
        .with_context(|| format!("Failed to derive returns for {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        closes = closes.len(),
        returns = returns.len(),
        "returns derived"
    );
    Ok((closes, returns))
}

fn analyze_command(args: &EstimatorArgs, cmd: AnalyzeCmd) -> Result<()> {
    let detector = build_detector(args)?;
    let name = cmd.name.clone().unwrap_or_else(|| display_name(&cmd.prices));
    let (closes, returns) = load_returns(&cmd.prices, &cmd.column)?;

    let report = detector
        .analyze(&returns)
        .with_context(|| format!("Risk analysis failed for {name}"))?;

    let stats = ReturnStats::of(&returns);
    if cmd.json {
        let output = SeriesRecord {
            name: &name,
            return_stats: stats,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let thresholds = &detector.config().thresholds;
        print!("{}", render_text(&name, &report, stats.as_ref(), thresholds));
    }

    if let Some(out) = &cmd.plot {
        plot::render_risk_chart(out, &name, &closes, &returns, &report)
            .map_err(|e| anyhow!("Failed to render chart to {}: {e}", out.display()))?;
        tracing::info!(path = %out.display(), "chart written");
    }
    Ok(())
}

fn compare_command(args: &EstimatorArgs, cmd: CompareCmd) -> Result<()> {
    let detector = build_detector(args)?;

    let mut series = Vec::with_capacity(cmd.prices.len());
    for path in &cmd.prices {
        let name = display_name(path);
        match load_returns(path, &cmd.column) {
            Ok((_, returns)) => series.push((name, returns)),
            Err(e) => tracing::error!("Skipping {name}: {e:#}"),
        }
    }

    let mut reports: Vec<(String, RiskReport)> = Vec::with_capacity(series.len());
    let mut stats: Vec<Option<ReturnStats>> = Vec::with_capacity(series.len());
    for ((name, result), (_, returns)) in detector.analyze_batch(&series).into_iter().zip(&series) {
        match result {
            Ok(report) => {
                reports.push((name, report));
                stats.push(ReturnStats::of(returns));
            }
            Err(e) => tracing::error!("Risk analysis failed for {name}: {e}"),
        }
    }

    if reports.is_empty() {
        return Err(anyhow!("No series could be analysed"));
    }

    if cmd.json {
        // An array keeps inputs that share a file stem apart.
        let output: Vec<SeriesRecord<'_>> = reports
            .iter()
            .zip(&stats)
            .map(|((name, report), stats)| SeriesRecord {
                name,
                return_stats: *stats,
                report,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let thresholds = &detector.config().thresholds;
        for ((name, report), stats) in reports.iter().zip(&stats) {
            print!("{}", render_text(name, report, stats.as_ref(), thresholds));
            println!();
        }
        print!("{}", render_summary(&reports));
    }
    Ok(())
}
