// ABOUTME: Workout record models including WorkoutRecord and WorkoutSource
// ABOUTME: Manual and external-feed workout rows with dedup external ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TimedAmount;

/// Origin of a workout record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutSource {
    /// Entered by the user in the app
    Manual,
    /// Imported from the wearable/health-platform feed
    External,
}

/// A single workout row, entered manually or imported from the external feed.
///
/// Records are immutable once aggregated; the engine only reads them.
/// `external_id` is present only for [`WorkoutSource::External`] records and
/// is the natural dedup key against re-import.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutRecord {
    /// Unique identifier for this record
    pub id: Uuid,
    /// When the workout started (UTC)
    pub start_time: DateTime<Utc>,
    /// Workout duration in whole minutes
    pub duration_minutes: u32,
    /// Calories burned during the workout (kcal)
    pub calories: u32,
    /// Whether the record was entered manually or imported
    pub source: WorkoutSource,
    /// Platform identifier of the imported record, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl WorkoutRecord {
    /// When the workout ended, derived from start and duration
    #[must_use]
    pub fn end_time(&self) -> DateTime<Utc> {
        self.start_time + Duration::minutes(i64::from(self.duration_minutes))
    }

    /// The workout's measurement window as a `(start, end)` pair.
    ///
    /// Used by overlap-subtraction reconciliation to query how many
    /// externally reported calories coincide with this workout.
    #[must_use]
    pub fn window(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start_time, self.end_time())
    }

    /// Whether this record was entered by the user
    #[must_use]
    pub const fn is_manual(&self) -> bool {
        matches!(self.source, WorkoutSource::Manual)
    }

    /// The workout's calories as a timestamped amount for chart aggregation
    #[must_use]
    pub fn timed_calories(&self) -> TimedAmount {
        TimedAmount::new(self.start_time, f64::from(self.calories))
    }
}
