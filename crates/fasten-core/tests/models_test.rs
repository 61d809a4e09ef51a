// ABOUTME: Integration tests for core domain models through public interfaces
// ABOUTME: Covers window helpers, timed-amount accessors, and serialization shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, TimeZone, Utc};
use fasten_core::constants::units::KG_TO_LB;
use fasten_core::models::{
    FastingSession, MealEntry, MealType, TimedAmount, WorkoutRecord, WorkoutSource,
};
use uuid::Uuid;

#[test]
fn workout_window_spans_start_to_derived_end() {
    let start = Utc.with_ymd_and_hms(2025, 3, 14, 18, 0, 0).unwrap();
    let workout = WorkoutRecord {
        id: Uuid::new_v4(),
        start_time: start,
        duration_minutes: 75,
        calories: 480,
        source: WorkoutSource::Manual,
        external_id: None,
    };

    assert_eq!(workout.end_time(), start + Duration::minutes(75));
    assert_eq!(workout.window(), (start, start + Duration::minutes(75)));
    assert!(workout.is_manual());
    assert_eq!(workout.timed_calories().amount, 480.0);
}

#[test]
fn manual_workout_serializes_without_external_id() {
    let workout = WorkoutRecord {
        id: Uuid::new_v4(),
        start_time: Utc.with_ymd_and_hms(2025, 3, 14, 18, 0, 0).unwrap(),
        duration_minutes: 30,
        calories: 200,
        source: WorkoutSource::Manual,
        external_id: None,
    };

    let json = serde_json::to_value(&workout).unwrap();
    assert!(json.get("external_id").is_none());
    assert_eq!(json["source"], "manual");
}

#[test]
fn meal_entry_exposes_macros_as_timed_amounts() {
    let timestamp = Utc.with_ymd_and_hms(2025, 3, 14, 12, 30, 0).unwrap();
    let meal = MealEntry {
        id: Uuid::new_v4(),
        meal_type: MealType::Lunch,
        timestamp,
        calories: 650.0,
        protein_g: Some(42.0),
        carbohydrates_g: None,
        fat_g: Some(18.0),
    };

    assert_eq!(meal.timed_calories(), TimedAmount::new(timestamp, 650.0));
    assert_eq!(meal.timed_protein().unwrap().amount, 42.0);
    assert!(meal.timed_carbohydrates().is_none());
    assert_eq!(meal.timed_fat().unwrap().amount, 18.0);
}

#[test]
fn meal_type_parses_lossily() {
    assert_eq!(MealType::from_str_lossy("Breakfast"), MealType::Breakfast);
    assert_eq!(MealType::from_str_lossy("SNACK"), MealType::Snack);
    assert_eq!(MealType::from_str_lossy("brunch"), MealType::Other);
}

#[test]
fn fasting_session_duration_in_hours() {
    let start = Utc.with_ymd_and_hms(2025, 3, 13, 20, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 3, 14, 12, 30, 0).unwrap();
    let session = FastingSession::new(Uuid::new_v4(), start, end);
    assert!((session.duration_hours() - 16.5).abs() < f64::EPSILON);
}

#[test]
fn timed_amount_from_epoch_milliseconds() {
    let amount = TimedAmount::from_timestamp_ms(1_741_953_600_000, 72.5).unwrap();
    assert_eq!(
        amount.timestamp,
        Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
    );
    assert_eq!(amount.amount, 72.5);

    assert!(TimedAmount::from_timestamp_ms(i64::MAX, 1.0).is_none());
}

#[test]
fn kilogram_conversion_constant_matches_display_expectation() {
    assert!((86.1825 * KG_TO_LB - 190.0).abs() < 0.01);
}
