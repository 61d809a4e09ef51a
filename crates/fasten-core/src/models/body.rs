// ABOUTME: Body measurement models for sparse weight tracking
// ABOUTME: WeightSample in kilograms feeding the carry-forward series builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TimedAmount;

/// A point-in-time body weight measurement.
///
/// Weight samples are sparse: most chart buckets have none, and the chart
/// carries the last known value forward into them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightSample {
    /// Unique identifier for this sample
    pub id: Uuid,
    /// When the sample was taken (UTC)
    pub taken_at: DateTime<Utc>,
    /// Measured weight in kilograms
    pub kilograms: f64,
}

impl WeightSample {
    /// The sample as a timestamped kilogram amount for carry-forward charting
    #[must_use]
    pub fn timed_kilograms(&self) -> TimedAmount {
        TimedAmount::new(self.taken_at, self.kilograms)
    }
}
