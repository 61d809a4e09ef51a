// ABOUTME: Error types for chart aggregation and energy-balance reconciliation
// ABOUTME: Defines ChartError variants for caller contract violations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

//! Error types for chart aggregation and energy-balance reconciliation.
//!
//! The computation core operates on caller-validated inputs, so the taxonomy
//! is deliberately narrow: the only library-surfaced failures are caller
//! contract violations, which fail fast as explicit errors.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result alias for chart and reconciliation operations
pub type ChartResult<T> = Result<T, ChartError>;

/// Errors raised by the aggregation and reconciliation core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// Interval whose end precedes its start. This is a caller bug, not a
    /// runtime condition to recover from.
    #[error("invalid interval: end {end} precedes start {start}")]
    InvalidInterval {
        /// Interval start instant
        start: DateTime<Utc>,
        /// Interval end instant
        end: DateTime<Utc>,
    },
}
