// ABOUTME: Unit conversion constants for body measurements
// ABOUTME: Kilogram to pound conversion used by weight chart emission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

//! Unit conversion constants.
//!
//! The aggregation core owns exactly one conversion: kilograms to pounds,
//! applied at series emission time for the weight chart. All other
//! locale/unit formatting belongs to the presentation layer.

/// Multiplier converting kilograms to pounds
pub const KG_TO_LB: f64 = 2.204_62;

/// Identity scale for series that are already in display units
pub const UNIT_SCALE_NONE: f64 = 1.0;
