// ABOUTME: Nutrition models for meal logging with per-macro gram totals
// ABOUTME: MealEntry and MealType definitions feeding the series aggregator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TimedAmount;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }
}

/// A logged meal with calorie and macro totals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    /// Unique identifier for this entry
    pub id: Uuid,
    /// Meal type (breakfast, lunch, dinner, snack)
    pub meal_type: MealType,
    /// When the meal was logged (UTC)
    pub timestamp: DateTime<Utc>,
    /// Calories for this meal (kcal)
    pub calories: f64,
    /// Protein in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrates in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbohydrates_g: Option<f64>,
    /// Fat in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
}

impl MealEntry {
    /// The meal's calories as a timestamped amount for chart aggregation
    #[must_use]
    pub fn timed_calories(&self) -> TimedAmount {
        TimedAmount::new(self.timestamp, self.calories)
    }

    /// Protein grams as a timestamped amount, if logged
    #[must_use]
    pub fn timed_protein(&self) -> Option<TimedAmount> {
        self.protein_g.map(|g| TimedAmount::new(self.timestamp, g))
    }

    /// Carbohydrate grams as a timestamped amount, if logged
    #[must_use]
    pub fn timed_carbohydrates(&self) -> Option<TimedAmount> {
        self.carbohydrates_g
            .map(|g| TimedAmount::new(self.timestamp, g))
    }

    /// Fat grams as a timestamped amount, if logged
    #[must_use]
    pub fn timed_fat(&self) -> Option<TimedAmount> {
        self.fat_g.map(|g| TimedAmount::new(self.timestamp, g))
    }
}
