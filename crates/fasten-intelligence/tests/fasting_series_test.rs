// ABOUTME: Integration tests for fasting chart composition
// ABOUTME: Covers midnight-splitting sums and the trailing-week consistency view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use fasten_core::models::FastingSession;
use fasten_intelligence::fasting::{fasting_hours_series, fasting_week_consistency};
use fasten_intelligence::ReportRange;
use uuid::Uuid;

fn instant(month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, month, day, hour, 0, 0).unwrap()
}

fn session(start: DateTime<Utc>, end: DateTime<Utc>) -> FastingSession {
    FastingSession::new(Uuid::new_v4(), start, end)
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

#[test]
fn overnight_session_attributes_hours_to_both_days() {
    // Thursday 20:00 -> Friday 16:00, week of 2025-03-10
    let sessions = vec![session(instant(3, 13, 20), instant(3, 14, 16))];
    let today = date(3, 14);

    let series = fasting_hours_series(&sessions, ReportRange::Week, today, &Utc).unwrap();

    assert_eq!(series.get(4), Some(4.0)); // Thursday
    assert_eq!(series.get(5), Some(16.0)); // Friday
    assert_eq!(series.len(), 2);
}

#[test]
fn multi_session_days_sum_their_hours() {
    // Two separate fasts ending and starting on Wednesday 2025-03-12
    let sessions = vec![
        session(instant(3, 12, 0), instant(3, 12, 10)),
        session(instant(3, 12, 14), instant(3, 12, 20)),
    ];
    let today = date(3, 12);

    let series = fasting_hours_series(&sessions, ReportRange::Week, today, &Utc).unwrap();

    assert_eq!(series.get(3), Some(16.0));
}

#[test]
fn sessions_outside_range_window_are_ignored() {
    let sessions = vec![
        session(instant(3, 5, 20), instant(3, 6, 12)), // previous week
        session(instant(3, 12, 20), instant(3, 13, 12)),
    ];
    let today = date(3, 14);

    let series = fasting_hours_series(&sessions, ReportRange::Week, today, &Utc).unwrap();

    assert_eq!(series.get(3), Some(4.0)); // Wednesday 20:00-24:00
    assert_eq!(series.get(4), Some(12.0)); // Thursday 00:00-12:00
    assert_eq!(series.len(), 2);
}

#[test]
fn week_consistency_keeps_longest_split_per_weekday() {
    let today = date(3, 16); // Sunday; trailing window 3/10..=3/16
    let sessions = vec![
        // Monday: two sessions, longest 10h
        session(instant(3, 10, 0), instant(3, 10, 10)),
        session(instant(3, 10, 12), instant(3, 10, 18)),
        // Spans Friday->Saturday: contributes 6h to Fri, 14h to Sat
        session(instant(3, 14, 18), instant(3, 15, 14)),
    ];

    let series = fasting_week_consistency(&sessions, today, &Utc).unwrap();

    assert_eq!(series.get(1), Some(10.0)); // Monday max, not 16h sum
    assert_eq!(series.get(5), Some(6.0)); // Friday split, not whole session
    assert_eq!(series.get(6), Some(14.0)); // Saturday split
}

#[test]
fn week_consistency_uses_rolling_window_not_calendar_week() {
    // Today is Wednesday 2025-03-12; the trailing window reaches back to
    // Thursday 2025-03-06, in the previous calendar week.
    let today = date(3, 12);
    let sessions = vec![
        session(instant(3, 6, 6), instant(3, 6, 18)),  // last Thursday: in window
        session(instant(3, 5, 6), instant(3, 5, 18)),  // last Wednesday: outside
        session(instant(3, 13, 6), instant(3, 13, 18)), // tomorrow: outside
    ];

    let series = fasting_week_consistency(&sessions, today, &Utc).unwrap();

    assert_eq!(series.get(4), Some(12.0)); // Thursday from the rolling window
    assert_eq!(series.get(3), None); // today's weekday has no qualifying data
    assert_eq!(series.len(), 1);
}

#[test]
fn malformed_session_propagates_invalid_interval() {
    let sessions = vec![session(instant(3, 14, 16), instant(3, 13, 20))];
    let result = fasting_hours_series(&sessions, ReportRange::Week, date(3, 14), &Utc);
    assert!(result.is_err());
}
