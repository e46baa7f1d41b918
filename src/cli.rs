// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI definition for the `riskmeasure` binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use riskmeasure::RiskConfig;

/// riskmeasure - entropy, mutual information and Hurst risk flags for price series
#[derive(Parser, Debug)]
#[command(
    name = "riskmeasure",
    version = env!("CARGO_PKG_VERSION"),
    about = "Entropy, lagged mutual information and Hurst exponent risk flags for price series",
    long_about = "Reads closing prices, derives daily returns and classifies them as latent, \
                  blocked_flow, chaotic_memory or structural_time_bomb from three estimated \
                  signatures."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub estimator: EstimatorArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Estimator overrides shared by all commands
#[derive(Args, Debug, Default)]
pub struct EstimatorArgs {
    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Number of histogram buckets
    #[arg(long, global = true)]
    pub bins: Option<usize>,

    /// Mutual information lag
    #[arg(long, global = true)]
    pub lag: Option<usize>,

    /// Smallest rescaled-range window
    #[arg(long, value_name = "N", global = true)]
    pub min_window: Option<usize>,

    /// Seed for the zero-variance jitter
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

impl EstimatorArgs {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply(&self, mut config: RiskConfig) -> RiskConfig {
        let est = &mut config.estimators;
        if let Some(bins) = self.bins {
            est.bins = bins;
        }
        if let Some(lag) = self.lag {
            est.mi_lag = lag;
        }
        if let Some(min_window) = self.min_window {
            est.min_window = min_window;
        }
        if let Some(seed) = self.seed {
            est.jitter_seed = seed;
        }
        config
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyse one price file
    Analyze(AnalyzeCmd),

    /// Analyse several price files and print a comparison
    Compare(CompareCmd),

    /// Print the default configuration as TOML
    DefaultConfig,
}

/// Analyse one price file
#[derive(Parser, Debug)]
pub struct AnalyzeCmd {
    /// CSV or plain-text file with closing prices
    #[arg(value_name = "FILE")]
    pub prices: PathBuf,

    /// Name of the close column
    #[arg(long, default_value = "close")]
    pub column: String,

    /// Display name, defaults to the file stem
    #[arg(long)]
    pub name: Option<String>,

    /// Write a PNG chart to this path
    #[arg(long, value_name = "FILE")]
    pub plot: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Analyse several price files
#[derive(Parser, Debug)]
pub struct CompareCmd {
    /// CSV or plain-text files with closing prices
    #[arg(value_name = "FILE", required = true)]
    pub prices: Vec<PathBuf>,

    /// Name of the close column
    #[arg(long, default_value = "close")]
    pub column: String,

    /// Print the reports as JSON
    #[arg(long)]
    pub json: bool,
}
