// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Rescaled-range (R/S) analysis for long-range dependence.

pub mod hurst;
pub mod rs_utils;

pub use hurst::RescaledRangeHurst;
