// ABOUTME: Fasting session interval model
// ABOUTME: Start/end instants for a fast, possibly crossing local midnight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::time::MS_PER_HOUR_F64;

/// A completed fasting session.
///
/// `end >= start` is a caller contract. The day splitter verifies it and
/// fails fast on violation rather than handling malformed intervals
/// defensively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FastingSession {
    /// Unique identifier for this session
    pub id: Uuid,
    /// When the fast started (UTC)
    pub start: DateTime<Utc>,
    /// When the fast ended (UTC)
    pub end: DateTime<Utc>,
}

impl FastingSession {
    /// Create a session from start and end instants
    #[must_use]
    pub const fn new(id: Uuid, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { id, start, end }
    }

    /// Total session length in hours
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / MS_PER_HOUR_F64
    }
}
