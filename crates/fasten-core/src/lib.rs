// ABOUTME: Core types and constants for the Fasten energy-balance platform
// ABOUTME: Foundation crate with domain models, error types, and unit constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

#![deny(unsafe_code)]

//! # Fasten Core
//!
//! Foundation crate providing shared types and constants for the Fasten
//! energy-balance engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Chart and reconciliation error types (`ChartError`)
//! - **constants**: Unit conversion and time constants organized by domain
//! - **models**: Domain records (`WorkoutRecord`, `FastingSession`, `MealEntry`, `WeightSample`)

/// Chart and reconciliation error types
pub mod errors;

/// Unit conversion and time constants organized by domain
pub mod constants;

/// Core data models (`WorkoutRecord`, `FastingSession`, `TimedAmount`, etc.)
pub mod models;
