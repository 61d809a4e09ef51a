// ABOUTME: Time arithmetic constants shared by splitters and aggregators
// ABOUTME: Millisecond, minute, and hour conversion factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

//! Time arithmetic constants.

/// Milliseconds per second
pub const MS_PER_SECOND: i64 = 1_000;

/// Milliseconds per minute
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;

/// Milliseconds per hour
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Milliseconds per hour as f64, for duration-to-hours division
pub const MS_PER_HOUR_F64: f64 = 3_600_000.0;

/// Minutes per hour as f64
pub const MINUTES_PER_HOUR_F64: f64 = 60.0;
