// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Price input: closing prices from delimited text files and the return series
//! derived from them.
//!
//! Accepted layouts are a headed CSV (the close column is picked by name) or a
//! single column of numbers with or without a header. Commas, semicolons and tabs
//! all work as delimiters.

use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Column name tried when the requested one is missing.
const FALLBACK_COLUMNS: [&str; 2] = ["adj close", "adj_close"];

#[derive(Debug, Error)]
pub enum PriceError {
    #[error("Failed to read price file: {0}")]
    Io(#[from] std::io::Error),
    #[error("column `{column}` not found in header {header:?}")]
    MissingColumn { column: String, header: Vec<String> },
    #[error("line {line}: cannot parse `{value}` as a price")]
    Parse { line: usize, value: String },
    #[error("line {line}: expected at least {expected} fields")]
    ShortRow { line: usize, expected: usize },
    #[error("close at index {index} must be positive and finite, got {value}")]
    InvalidClose { index: usize, value: f64 },
    #[error("no prices found")]
    Empty,
}

/// Read closing prices from a file, see [`parse_closes`].
pub fn read_closes<P: AsRef<Path>>(path: P, column: &str) -> Result<Vec<f64>, PriceError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let closes = parse_closes(&content, column)?;
    debug!(path = %path.as_ref().display(), count = closes.len(), "closes loaded");
    Ok(closes)
}

/// Parse closing prices from delimited text.
///
/// If the first non-empty line does not parse as a number it is a header and `column`
/// (case-insensitive) selects the field, falling back to `adj close`. A single-column
/// file needs no matching header. Blank lines are skipped.
pub fn parse_closes(content: &str, column: &str) -> Result<Vec<f64>, PriceError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .peekable();

    let Some(&(_, first)) = lines.peek() else {
        return Err(PriceError::Empty);
    };
    let first_fields = split_fields(first);

    let index = if first_fields.len() == 1 && first_fields[0].parse::<f64>().is_ok() {
        0
    } else if first_fields.len() == 1 {
        lines.next();
        0
    } else {
        let header: Vec<String> = first_fields.iter().map(|f| f.to_lowercase()).collect();
        lines.next();
        find_column(&header, column).ok_or_else(|| PriceError::MissingColumn {
            column: column.to_string(),
            header: header.clone(),
        })?
    };

    let closes = lines
        .map(|(line, l)| {
            let fields = split_fields(l);
            let raw = fields.get(index).ok_or(PriceError::ShortRow {
                line,
                expected: index + 1,
            })?;
            raw.parse::<f64>().map_err(|_| PriceError::Parse {
                line,
                value: raw.to_string(),
            })
        })
        .collect::<Result<Vec<f64>, PriceError>>()?;

    if closes.is_empty() {
        return Err(PriceError::Empty);
    }
    Ok(closes)
}

/// Percentage change between consecutive closes; the leading undefined value is dropped.
///
/// `r[t] = close[t + 1] / close[t] - 1`. Every close must be positive and finite.
pub fn price_relatives(closes: &[f64]) -> Result<Vec<f64>, PriceError> {
    if let Some((index, &value)) = closes
        .iter()
        .enumerate()
        .find(|(_, v)| !(v.is_finite() && **v > 0.0))
    {
        return Err(PriceError::InvalidClose { index, value });
    }
    Ok(closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect())
}

/// Basic statistics of a return series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReturnStats {
    pub mean: f64,
    /// Sample standard deviation (`n - 1` denominator), NaN for a single return
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl ReturnStats {
    /// `None` for an empty series.
    pub fn of(returns: &[f64]) -> Option<Self> {
        if returns.is_empty() {
            return None;
        }
        let n = returns.len() as f64;
        let mean = returns.iter().sum::<f64>() / n;
        let std = if returns.len() > 1 {
            (returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
        } else {
            f64::NAN
        };
        let (min, max) = returns
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &r| (lo.min(r), hi.max(r)));
        Some(Self { mean, std, min, max })
    }
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split([',', ';', '\t'])
        .map(|f| f.trim().trim_matches('"'))
        .collect()
}

fn find_column(header: &[String], column: &str) -> Option<usize> {
    let wanted = column.to_lowercase();
    header.iter().position(|h| *h == wanted).or_else(|| {
        FALLBACK_COLUMNS
            .iter()
            .find_map(|fallback| header.iter().position(|h| h == fallback))
    })
}
