// ABOUTME: Fasting chart composition over the day splitter and series aggregator
// ABOUTME: Calendar fasting-hour sums and the trailing-week consistency view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

//! Fasting chart series.
//!
//! Fasting sessions routinely cross midnight, so each session is split into
//! local-day segments first and the segments are attributed individually.
//! A day with several sessions sums their hours.

use chrono::{Datelike, Duration, NaiveDate, TimeZone};
use fasten_core::errors::ChartResult;
use fasten_core::models::FastingSession;

use crate::buckets::{bucket_slot, ReportRange};
use crate::day_segments::day_segments;
use crate::series::{Reducer, Series};

/// Total fasting hours per calendar bucket for the given range.
///
/// Each session's day segments are attributed to the bucket of their local
/// date; segments outside the range window are ignored. Multi-session days
/// accumulate.
///
/// # Errors
/// Returns [`fasten_core::errors::ChartError::InvalidInterval`] when a
/// session's end precedes its start.
pub fn fasting_hours_series<Tz: TimeZone>(
    sessions: &[FastingSession],
    range: ReportRange,
    today: NaiveDate,
    zone: &Tz,
) -> ChartResult<Series> {
    let mut series = Series::new();
    for session in sessions {
        for segment in day_segments(session.start, session.end, zone)? {
            let slot = bucket_slot(segment.local_date(), range, today);
            if slot.included {
                series.apply(slot.index, segment.duration_hours(), Reducer::Sum);
            }
        }
    }
    Ok(series)
}

/// Longest fasting stretch per weekday over the trailing seven days.
///
/// This view uses a rolling `today - 6 ..= today` window with ISO-weekday
/// bucket indices. That is deliberately a different inclusion rule than the
/// calendar-week window of [`bucket_slot`]: it shows the most recent seven
/// days even when they straddle a week boundary. A session spanning
/// several days contributes its per-day split durations as independent
/// candidates to each day's maximum, not its whole length.
///
/// # Errors
/// Returns [`fasten_core::errors::ChartError::InvalidInterval`] when a
/// session's end precedes its start.
pub fn fasting_week_consistency<Tz: TimeZone>(
    sessions: &[FastingSession],
    today: NaiveDate,
    zone: &Tz,
) -> ChartResult<Series> {
    let window_start = today - Duration::days(6);
    let mut series = Series::new();
    for session in sessions {
        for segment in day_segments(session.start, session.end, zone)? {
            let date = segment.local_date();
            if date < window_start || date > today {
                continue;
            }
            series.apply(
                date.weekday().number_from_monday(),
                segment.duration_hours(),
                Reducer::Max,
            );
        }
    }
    Ok(series)
}
