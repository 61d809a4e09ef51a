// ABOUTME: Splits time intervals into contiguous local-day-aligned segments
// ABOUTME: Lazy iterator that never emits a segment crossing local midnight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

//! Local-day interval splitting.
//!
//! A fasting session that starts Thursday evening and ends Friday afternoon
//! must contribute its hours to two distinct weekday buckets. The splitter
//! walks an interval from its start, cutting at each local midnight, and
//! emits half-open `[segment_start, segment_end)` sub-intervals whose
//! concatenation reconstructs the original interval exactly.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use fasten_core::constants::time::MS_PER_HOUR_F64;
use fasten_core::errors::{ChartError, ChartResult};

/// One day-aligned sub-interval of a split interval.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySegment<Tz: TimeZone> {
    /// Segment start instant (inclusive)
    pub start: DateTime<Tz>,
    /// Segment end instant (exclusive)
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> DaySegment<Tz> {
    /// Segment length in hours
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        (self.end.clone() - self.start.clone()).num_milliseconds() as f64 / MS_PER_HOUR_F64
    }

    /// The local calendar date this segment belongs to, taken from its
    /// start instant. Used for bucket attribution.
    #[must_use]
    pub fn local_date(&self) -> NaiveDate {
        self.start.date_naive()
    }
}

/// Lazy, finite, ordered iterator over the day-aligned segments of an interval.
#[derive(Debug, Clone)]
pub struct DaySegments<Tz: TimeZone> {
    current: DateTime<Tz>,
    end: DateTime<Tz>,
}

impl<Tz: TimeZone> Iterator for DaySegments<Tz> {
    type Item = DaySegment<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.end {
            return None;
        }
        let next_midnight = start_of_next_local_day(&self.current);
        // The midnight resolution must advance past `current`, or the walk
        // would never terminate. Emit the remainder as a single segment if
        // the zone produced a degenerate answer.
        let segment_end = if next_midnight > self.current && next_midnight < self.end {
            next_midnight
        } else {
            self.end.clone()
        };
        let segment = DaySegment {
            start: self.current.clone(),
            end: segment_end.clone(),
        };
        self.current = segment_end;
        Some(segment)
    }
}

/// Split `[start, end)` into local-day-aligned segments in the given zone.
///
/// The degenerate interval `start == end` yields zero segments.
///
/// # Errors
/// Returns [`ChartError::InvalidInterval`] when `end < start`; malformed
/// intervals indicate a caller bug and fail fast.
pub fn day_segments<Tz: TimeZone>(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    zone: &Tz,
) -> ChartResult<DaySegments<Tz>> {
    if end < start {
        return Err(ChartError::InvalidInterval { start, end });
    }
    Ok(DaySegments {
        current: start.with_timezone(zone),
        end: end.with_timezone(zone),
    })
}

/// The first instant of the local day after the given instant.
///
/// DST transitions at midnight are resolved by preferring the earlier of an
/// ambiguous pair; a midnight that does not exist (spring-forward gap) falls
/// back to 01:00, then to 24 hours of wall time.
fn start_of_next_local_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> DateTime<Tz> {
    let zone = instant.timezone();
    let next_day = instant.date_naive() + Duration::days(1);
    next_day
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| {
            zone.from_local_datetime(&midnight)
                .earliest()
                .or_else(|| {
                    zone.from_local_datetime(&(midnight + Duration::hours(1)))
                        .earliest()
                })
        })
        .unwrap_or_else(|| instant.clone() + Duration::days(1))
}
