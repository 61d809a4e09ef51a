// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for unit conversion and time arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

//! Constants module
//!
//! This module organizes application constants by domain for better
//! maintainability. Constants are grouped into logical domains rather than
//! being in a single large file.

/// Time arithmetic constants (milliseconds, minutes, hours)
pub mod time;
/// Unit conversion and measurement constants
pub mod units;
