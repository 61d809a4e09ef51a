// ABOUTME: Energy-balance reconciliation and time-series aggregation engine
// ABOUTME: Pure, stateless chart math over caller-validated domain records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

#![deny(unsafe_code)]

//! # Fasten Intelligence
//!
//! The computation core of the Fasten tracker: merges externally reported
//! active-calorie totals with manually logged workouts without double-counting
//! overlapping measurement windows, and rolls raw, irregularly timed events
//! (fasting intervals crossing midnight, daily meal and workout totals, sparse
//! weight samples) into calendar-aligned week/month/year buckets.
//!
//! Every function in this crate is a pure, synchronous computation over
//! immutable inputs; the single asynchronous boundary is the
//! [`energy_balance::ActiveCalorieSource`] collaborator. There is no shared
//! mutable state, so concurrent invocation is trivially safe.
//!
//! ## Modules
//!
//! - **buckets**: calendar bucket indexing relative to a reference "today"
//! - **day_segments**: splitting intervals at local-midnight boundaries
//! - **series**: reducer-parameterized per-bucket aggregation
//! - **carry_forward**: dense series from sparse samples, last value forward
//! - **energy_balance**: daily calories-burned reconciliation
//! - **fasting**: chart composition for fasting-hour series

/// Calendar bucket indexing relative to a reference "today"
pub mod buckets;

/// Dense series from sparse point samples with carry-forward semantics
pub mod carry_forward;

/// Splitting time intervals into local-day-aligned segments
pub mod day_segments;

/// Daily calories-burned reconciliation against the external feed
pub mod energy_balance;

/// Fasting chart composition over the splitter and aggregator
pub mod fasting;

/// Per-bucket numeric series and reducer-parameterized aggregation
pub mod series;

pub use buckets::{bucket_count, bucket_slot, chart_start, BucketSlot, ReportRange};
pub use carry_forward::carry_forward_series;
pub use day_segments::{day_segments, DaySegment, DaySegments};
pub use energy_balance::{reconcile, ActiveCalorieSource, ReconciliationMode};
pub use series::{aggregate, Reducer, Series};
