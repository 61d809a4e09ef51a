// ABOUTME: Calendar bucket indexing for week, month, and year reporting ranges
// ABOUTME: Maps a date to a bucket index plus an inclusion flag relative to today
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

//! Calendar bucket indexing.
//!
//! A reporting range addresses its buckets by small integer indices:
//! ISO weekday (Monday = 1) for Week, day of month for Month, and month
//! number for Year. Inclusion is computed relative to a fixed reference
//! date ("today"), never stored.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Reporting range for chart aggregation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReportRange {
    /// Calendar week of the reference date, Monday through Sunday
    Week,
    /// Calendar month of the reference date
    Month,
    /// Calendar year of the reference date
    Year,
}

/// A date's position within a reporting range: its bucket index and whether
/// the date falls inside the range's window around the reference date.
///
/// The index is computed regardless of inclusion, so callers that use a
/// different window rule (e.g. a trailing seven-day view) can still reuse
/// the indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketSlot {
    /// Bucket index: 1..=7 for Week, 1..=days-in-month for Month, 1..=12 for Year
    pub index: u32,
    /// Whether the date falls inside the range window around "today"
    pub included: bool,
}

/// Map a calendar date to its bucket slot for the given range and reference date.
#[must_use]
pub fn bucket_slot(date: NaiveDate, range: ReportRange, today: NaiveDate) -> BucketSlot {
    match range {
        ReportRange::Week => {
            let start_of_week =
                today - Duration::days(i64::from(today.weekday().number_from_monday()) - 1);
            let end_of_week = start_of_week + Duration::days(6);
            BucketSlot {
                index: date.weekday().number_from_monday(),
                included: date >= start_of_week && date <= end_of_week,
            }
        }
        ReportRange::Month => BucketSlot {
            index: date.day(),
            included: date.year() == today.year() && date.month() == today.month(),
        },
        ReportRange::Year => BucketSlot {
            index: date.month(),
            included: date.year() == today.year(),
        },
    }
}

/// Number of buckets a range addresses: 7 for Week, the reference month's
/// day count for Month, 12 for Year.
#[must_use]
pub fn bucket_count(range: ReportRange, today: NaiveDate) -> u32 {
    match range {
        ReportRange::Week => 7,
        ReportRange::Month => days_in_month(today),
        ReportRange::Year => 12,
    }
}

/// First date of the chart window: six days before the reference date for
/// Week (a trailing window ending today), the first of the month for Month,
/// and the first of the year for Year.
///
/// This is the carry-forward window, which for Week deliberately differs
/// from the calendar-week inclusion rule of [`bucket_slot`].
#[must_use]
pub fn chart_start(range: ReportRange, today: NaiveDate) -> NaiveDate {
    match range {
        ReportRange::Week => today - Duration::days(6),
        ReportRange::Month => today.with_day(1).unwrap_or(today),
        ReportRange::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
    }
}

/// Number of days in the given date's month.
#[must_use]
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map_or(31, |last| last.day())
}
