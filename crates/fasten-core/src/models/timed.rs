// ABOUTME: TimedAmount, the generic timestamped quantity consumed by aggregators
// ABOUTME: Carries a UTC instant and a unitless f64 amount
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A timestamped quantity: the generic unit consumed by the series
/// aggregator and the carry-forward builder.
///
/// The amount is unitless from the engine's point of view. A meal's
/// calories, a macro's grams, and a weight sample's kilograms all flow
/// through this type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedAmount {
    /// Instant the amount was recorded (UTC)
    pub timestamp: DateTime<Utc>,
    /// Recorded quantity, in whatever unit the caller is charting
    pub amount: f64,
}

impl TimedAmount {
    /// Create a timed amount from an instant and quantity
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, amount: f64) -> Self {
        Self { timestamp, amount }
    }

    /// Create a timed amount from epoch milliseconds.
    ///
    /// Returns `None` when the millisecond value is outside chrono's
    /// representable range.
    #[must_use]
    pub fn from_timestamp_ms(timestamp_ms: i64, amount: f64) -> Option<Self> {
        DateTime::from_timestamp_millis(timestamp_ms)
            .map(|timestamp| Self { timestamp, amount })
    }
}
