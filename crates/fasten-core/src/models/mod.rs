// ABOUTME: Core data models for the Fasten energy-balance engine
// ABOUTME: Re-exports WorkoutRecord, FastingSession, MealEntry and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

//! # Data Models
//!
//! Core data structures consumed by the aggregation and reconciliation
//! engine. All models are read-only inputs of pure functions: the engine
//! never mutates or caches them, and they carry no lifecycle of their own
//! beyond a single invocation.
//!
//! ## Design Principles
//!
//! - **Provider Agnostic**: records look the same whether they were entered
//!   manually or imported from a wearable feed
//! - **Serializable**: all models support JSON serialization
//! - **Type Safe**: kcal totals are unsigned, so "negative calories burned"
//!   is unrepresentable

// Domain modules
mod body;
mod fasting;
mod nutrition;
mod timed;
mod workout;

// Re-export all public types for convenience
pub use body::WeightSample;
pub use fasting::FastingSession;
pub use nutrition::{MealEntry, MealType};
pub use timed::TimedAmount;
pub use workout::{WorkoutRecord, WorkoutSource};
