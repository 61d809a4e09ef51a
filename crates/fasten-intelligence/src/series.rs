// ABOUTME: Per-bucket numeric series and reducer-parameterized aggregation
// ABOUTME: Single reduction entry point over timestamped amounts using rayon fold/reduce
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

//! Per-bucket series aggregation.
//!
//! A [`Series`] maps bucket indices to accumulated values. An absent key
//! means "no data", never zero; chart rendering distinguishes the two.
//!
//! Aggregation is parameterized by a [`Reducer`] whose combine function is
//! associative and commutative, so the reduction can be evaluated in any
//! order. The entry point uses a parallel fold/reduce over per-thread
//! partial series merged with the same combine function.

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone};
use fasten_core::models::TimedAmount;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::buckets::{bucket_slot, ReportRange};

/// How values landing in the same bucket are combined
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Reducer {
    /// Accumulate the sum of all values (meal calories, macro grams, fasting hours)
    Sum,
    /// Keep the single largest value (longest qualifying session per bucket)
    Max,
}

impl Reducer {
    /// Combine an accumulated value with a new candidate.
    ///
    /// Both reducers are associative and commutative, which is what lets
    /// the aggregation reduce partial results in any order.
    #[must_use]
    pub fn combine(self, accumulated: f64, value: f64) -> f64 {
        match self {
            Self::Sum => accumulated + value,
            Self::Max => accumulated.max(value),
        }
    }
}

/// A per-bucket numeric series: bucket index to accumulated value.
///
/// Insertion order is irrelevant. Absent keys mean "no data", not zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(BTreeMap<u32, f64>);

impl Series {
    /// Create an empty series
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// The accumulated value at a bucket index, if any data landed there
    #[must_use]
    pub fn get(&self, index: u32) -> Option<f64> {
        self.0.get(&index).copied()
    }

    /// Number of buckets holding data
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no bucket holds data
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate buckets in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.0.iter().map(|(&index, &value)| (index, value))
    }

    /// Fold a value into a bucket with the given reducer. A bucket with no
    /// prior data takes the value as-is.
    pub fn apply(&mut self, index: u32, value: f64, reducer: Reducer) {
        self.0
            .entry(index)
            .and_modify(|accumulated| *accumulated = reducer.combine(*accumulated, value))
            .or_insert(value);
    }

    /// Overwrite a bucket's value (last write wins)
    pub fn insert(&mut self, index: u32, value: f64) {
        self.0.insert(index, value);
    }

    /// Merge another partial series into this one with the given reducer
    #[must_use]
    pub fn merged(mut self, other: Self, reducer: Reducer) -> Self {
        for (index, value) in other.0 {
            self.apply(index, value, reducer);
        }
        self
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = (u32, f64);
    type IntoIter = std::iter::Map<
        std::collections::btree_map::Iter<'a, u32, f64>,
        fn((&'a u32, &'a f64)) -> (u32, f64),
    >;

    fn into_iter(self) -> Self::IntoIter {
        let copy_entry: fn((&'a u32, &'a f64)) -> (u32, f64) = |(&index, &value)| (index, value);
        self.0.iter().map(copy_entry)
    }
}

/// Reduce timestamped amounts into a per-bucket series.
///
/// An amount participates iff its local calendar date (in `zone`) is
/// included in the range window around `today`; its value is folded into
/// the bucket at that date's index. Amounts outside the window are ignored,
/// leaving their buckets absent rather than zero.
#[must_use]
pub fn aggregate<Tz>(
    amounts: &[TimedAmount],
    range: ReportRange,
    today: NaiveDate,
    zone: &Tz,
    reducer: Reducer,
) -> Series
where
    Tz: TimeZone + Sync,
{
    amounts
        .par_iter()
        .fold(Series::new, |mut series, amount| {
            let date = amount.timestamp.with_timezone(zone).date_naive();
            let slot = bucket_slot(date, range, today);
            if slot.included {
                series.apply(slot.index, amount.amount, reducer);
            }
            series
        })
        .reduce(Series::new, |left, right| left.merged(right, reducer))
}
