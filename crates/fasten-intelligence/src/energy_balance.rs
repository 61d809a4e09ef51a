// ABOUTME: Daily calories-burned reconciliation against the external active feed
// ABOUTME: Overlap-subtraction and exclusion-by-id modes with zero clamping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fasten Health

//! Energy-balance reconciliation.
//!
//! The day's total calories burned combines three inputs: a prorated basal
//! rate, manually logged workouts, and the external wearable feed's active
//! calories. A manual workout the wearable also measured must not be
//! counted twice, so the external contribution is reduced before it is
//! added — by querying the feed over each manual workout's window
//! ([`ReconciliationMode::OverlapSubtraction`]) or by subtracting
//! already-materialized record calories by id exclusion
//! ([`ReconciliationMode::ExclusionById`]).
//!
//! All kcal totals are unsigned and every subtraction saturates at zero:
//! under-measurement never produces a negative burn.
//!
//! Upstream failures are the caller's concern. A feed that is unreachable
//! or timed out must be resolved to `0` (or abandoned) before calling in;
//! this module performs no retries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fasten_core::models::WorkoutRecord;
use tracing::debug;

/// External active-calorie feed (wearable or health platform).
///
/// Implementations are expected to return already-validated, non-negative
/// kcal totals; interval convention (half-open or closed) must be consistent
/// between whole-day and per-workout queries.
#[async_trait]
pub trait ActiveCalorieSource: Send + Sync {
    /// Whether the user has granted read access to the external feed
    async fn has_permission(&self) -> bool;

    /// Externally reported active calories within the given window (kcal)
    async fn fetch_active_calories(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> u32;
}

/// How the external active total is reconciled with manual workout records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconciliationMode {
    /// Query the feed for the whole day, then subtract the feed's reading
    /// over each manual workout's window. One whole-day query plus one per
    /// manual workout, sequential.
    OverlapSubtraction {
        /// Start of the day being reconciled
        day_start: DateTime<Utc>,
        /// End of the day being reconciled (or "now" for the current day)
        day_end: DateTime<Utc>,
    },
    /// External records are already materialized as workout rows, one of
    /// which is the day's aggregate active-burn placeholder. Subtract the
    /// stored calories of every other record from the aggregate total; no
    /// per-workout feed queries.
    ExclusionById {
        /// The day's authoritative external active total (kcal)
        total_active: u32,
        /// `external_id` of the designated daily-aggregate record, whose
        /// own calories are never subtracted
        daily_total_id: String,
    },
}

/// Compute the day's total calories burned.
///
/// Without feed permission the result is `basal` plus manually logged
/// workout calories; external-sourced records are excluded entirely. With
/// permission, the selected [`ReconciliationMode`] determines how the
/// external contribution is netted against manual records before being
/// added.
///
/// Known edge case, preserved deliberately: in overlap-subtraction mode two
/// manual workouts whose windows overlap each other have their feed
/// overlaps queried and summed independently, so externally reported
/// calories inside the shared span are subtracted twice.
pub async fn reconcile(
    basal: u32,
    workouts: &[WorkoutRecord],
    source: &dyn ActiveCalorieSource,
    mode: ReconciliationMode,
) -> u32 {
    let manual_total: u32 = workouts
        .iter()
        .filter(|w| w.is_manual())
        .map(|w| w.calories)
        .fold(0, u32::saturating_add);

    if !source.has_permission().await {
        return basal.saturating_add(manual_total);
    }

    let net_external = match mode {
        ReconciliationMode::OverlapSubtraction { day_start, day_end } => {
            let day_total = source.fetch_active_calories(day_start, day_end).await;
            let mut overlap_total: u32 = 0;
            for workout in workouts.iter().filter(|w| w.is_manual()) {
                let (start, end) = workout.window();
                let overlap = source.fetch_active_calories(start, end).await;
                overlap_total = overlap_total.saturating_add(overlap);
            }
            if overlap_total > day_total {
                debug!(
                    day_total,
                    overlap_total, "manual overlap exceeds external day total, clamping to zero"
                );
            }
            day_total.saturating_sub(overlap_total)
        }
        ReconciliationMode::ExclusionById {
            total_active,
            daily_total_id,
        } => {
            let excluded: u32 = workouts
                .iter()
                .filter(|w| w.external_id.as_deref() != Some(daily_total_id.as_str()))
                .map(|w| w.calories)
                .fold(0, u32::saturating_add);
            if excluded > total_active {
                debug!(
                    total_active,
                    excluded, "excluded record calories exceed external total, clamping to zero"
                );
            }
            total_active.saturating_sub(excluded)
        }
    };

    basal
        .saturating_add(net_external)
        .saturating_add(manual_total)
}
