// ABOUTME: Builds dense per-bucket series from sparse point samples
// ABOUTME: Propagates the last known value forward, scaling units at emission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

//! Carry-forward series building.
//!
//! Point-in-time measurements such as body weight are not taken every
//! bucket. The chart still wants a dense line, so each bucket without a
//! direct sample inherits the most recent known value. Buckets preceding
//! the first-ever known value stay absent; the series is not zero-padded
//! at the front.

use chrono::{Datelike, NaiveDate, TimeZone};
use fasten_core::models::TimedAmount;
use tracing::warn;

use crate::buckets::{bucket_count, chart_start, ReportRange};
use crate::series::Series;

/// Build a dense per-bucket series from samples sorted ascending by timestamp.
///
/// Samples dated strictly before the chart window seed the running
/// last-known value (the most recent pre-window sample wins). In-window
/// samples land at `days_between(chart_start, date) + 1` for Week and Month
/// ranges, or at the sample's month for Year; indices outside the bucket
/// domain are discarded. When several samples land in the same bucket the
/// later one wins.
///
/// `unit_scale` is a caller-supplied linear conversion (e.g.
/// [`fasten_core::constants::units::KG_TO_LB`]) applied at emission time,
/// after carry-forward resolution, never before.
#[must_use]
pub fn carry_forward_series<Tz: TimeZone>(
    samples: &[TimedAmount],
    range: ReportRange,
    today: NaiveDate,
    zone: &Tz,
    unit_scale: f64,
) -> Series {
    let count = bucket_count(range, today);
    let window_start = chart_start(range, today);

    let mut last_known: Option<f64> = None;
    let mut direct = Series::new();
    for sample in samples {
        let date = sample.timestamp.with_timezone(zone).date_naive();
        if date < window_start {
            // Input is sorted ascending, so later pre-window samples
            // overwrite earlier ones.
            last_known = Some(sample.amount);
            continue;
        }
        match in_window_index(date, range, today, window_start) {
            Some(index) if (1..=count).contains(&index) => {
                // Last write wins within a bucket.
                direct.insert(index, sample.amount);
            }
            _ => {
                warn!(
                    sample_date = %date,
                    ?range,
                    reference_date = %today,
                    "sample outside bucket domain discarded from carry-forward series"
                );
            }
        }
    }

    let mut series = Series::new();
    for index in 1..=count {
        if let Some(value) = direct.get(index) {
            last_known = Some(value);
        }
        if let Some(value) = last_known {
            series.insert(index, value * unit_scale);
        }
    }
    series
}

/// Bucket index of an in-window sample date, or `None` when the date cannot
/// be attributed (a Year-range sample from a different year).
fn in_window_index(
    date: NaiveDate,
    range: ReportRange,
    today: NaiveDate,
    window_start: NaiveDate,
) -> Option<u32> {
    match range {
        ReportRange::Week | ReportRange::Month => {
            u32::try_from((date - window_start).num_days() + 1).ok()
        }
        ReportRange::Year => (date.year() == today.year()).then(|| date.month()),
    }
}
