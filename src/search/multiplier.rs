//! # Stage-2 multiplier sweep and acceptance
//!
//! For a fixed [`StageOne`], the second stage is fully determined by the
//! multiplier `k = zp2/zp1`:
//!
//! ```text
//! zr2 = k·zr1 + np      zp2 = k·zp1      zs2 = k·zs1 + np
//! m2  = m1·(zp1 + zs1)/(k·(zp1 + zs1) + np)
//! ```
//!
//! [`KWindow`] bounds `k` analytically from the target ratio window using the
//! approximation `gr ≈ R·(1 + k·zr1/np)` with `R = 1 + zr1/zs1`, caps it where `m2`
//! would drop below `min_module`, and snaps it onto the `k = t/10` grid.
//! [`Candidate::accept`] then applies the exact acceptance predicate.

use crate::constants::{K_STEPS_PER_UNIT, K_WINDOW_EPS, MAX_K_STEP};
use crate::gear_math::{
    gear_ratio, is_near_integer, max_planets, round_to, stage2_module, sun_bore_metric,
};
use crate::search::candidates::StageOne;
use crate::search_bounds::SearchBounds;
use crate::solution::Solution;

/// Grid of multiplier values worth testing for one [`StageOne`].
///
/// Multipliers live on the grid `k = t/K_STEPS_PER_UNIT` for integer `t`. The window
/// covers `t ∈ [first_step, last_step + 1]`: the extra step past the snapped upper
/// bound gives the exact ratio check a chance on the edge of the approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KWindow {
    pub first_step: i64,
    pub last_step: i64,
}

impl KWindow {
    /// Derive the multiplier window of a stage from the run bounds.
    ///
    /// The ratio window gives `k ∈ [k_min, k_max]`. Since `m2` decreases with `k`,
    /// the upper end is further capped at the largest `k` keeping `m2 ≥ min_module`;
    /// grid points past that cap could never be accepted.
    ///
    /// Return
    /// ----------
    /// * `None` when the stage cannot reach `[min_ratio, max_ratio]` for any `k ≥ 0`,
    ///   when no grid point lies between the bounds, or when the derivation
    ///   degenerates (non-positive `R` or `zr1/np`).
    pub fn for_stage(stage: &StageOne, bounds: &SearchBounds) -> Option<Self> {
        let r = stage.basic_ratio();
        if !(r > 0.0) {
            return None;
        }
        let k_factor = stage.ring_teeth as f64 / f64::from(stage.planet_count);
        if !(k_factor > 0.0) {
            return None;
        }

        let k_min = ((bounds.min_ratio / r - 1.0) / k_factor).max(0.0);
        let k_max = (bounds.max_ratio / r - 1.0) / k_factor;
        if k_min > k_max + K_WINDOW_EPS {
            return None;
        }

        let k_cap = max_multiplier_for_module(stage, bounds.min_module) + K_WINDOW_EPS;
        let k_max = k_max.min(k_cap);

        let first = (k_min * K_STEPS_PER_UNIT).ceil();
        let last = (k_max * K_STEPS_PER_UNIT).floor();
        if !(first <= last) || first > MAX_K_STEP as f64 {
            return None;
        }
        let first_step = first as i64;
        let last_step = last.min(MAX_K_STEP as f64) as i64;

        Some(KWindow {
            first_step,
            last_step,
        })
    }

    /// Multiplier values of the window, in increasing order.
    pub fn values(&self) -> impl Iterator<Item = f64> {
        (self.first_step..=self.last_step.saturating_add(1))
            .map(|t| t as f64 / K_STEPS_PER_UNIT)
    }
}

/// Largest `k` with `m1·(zp1 + zs1)/(k·(zp1 + zs1) + np) ≥ min_module`.
fn max_multiplier_for_module(stage: &StageOne, min_module: f64) -> f64 {
    let pitch_sum = (stage.planet_teeth + stage.sun_teeth) as f64;
    (stage.module * pitch_sum / min_module - f64::from(stage.planet_count)) / pitch_sum
}

/// One fully specified combination: a stage-1 configuration and a multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub stage: StageOne,
    pub multiplier: f64,
}

impl Candidate {
    /// Apply the acceptance predicate.
    ///
    /// Checks
    /// -----------------
    /// * all six tooth counts ≥ `min_teeth`;
    /// * `m1, m2 ≥ min_module`;
    /// * `zr2`, `zp2`, `zs2` within [`INTEGRALITY_TOLERANCE`](crate::constants::INTEGRALITY_TOLERANCE)
    ///   of an integer;
    /// * the exact gear ratio of the rounded counts, rounded to 6 decimals, lies in
    ///   `[min_ratio, max_ratio]`;
    /// * the planets fit around both suns.
    ///
    /// Return
    /// ----------
    /// * `Some(Solution)` when every check passes, `None` otherwise. Degenerate
    ///   arithmetic (non-positive module denominator, infinite ratio) is a rejection.
    pub fn accept(&self, bounds: &SearchBounds) -> Option<Solution> {
        let s = &self.stage;
        let k = self.multiplier;
        let np = f64::from(s.planet_count);
        let (zr1, zp1, zs1) = (s.ring_teeth as f64, s.planet_teeth as f64, s.sun_teeth as f64);

        let zr2 = k * zr1 + np;
        let zp2 = k * zp1;
        let zs2 = k * zs1 + np;
        let m1 = s.module;
        let m2 = stage2_module(m1, zp1, zs1, k, np)?;

        let mt = f64::from(bounds.min_teeth);
        if [zr1, zp1, zs1, zr2, zp2, zs2].iter().any(|&z| z < mt) {
            return None;
        }
        if m1 < bounds.min_module || m2 < bounds.min_module {
            return None;
        }
        if ![zr2, zp2, zs2].iter().all(|&z| is_near_integer(z)) {
            return None;
        }

        let (zr2, zp2, zs2) = (zr2.round(), zp2.round(), zs2.round());
        if zr2 > f64::from(u32::MAX) {
            return None;
        }
        let gr = round_to(gear_ratio(zr1, zp1, zs1, zr2, zp2)?, 6);
        if !(bounds.min_ratio <= gr && gr <= bounds.max_ratio) {
            return None;
        }
        if s.planet_count > max_planets(zs1, zp1) {
            return None;
        }
        // zs2/zp2 = (k·zs1 + np)/(k·zp1) > zs1/zp1: stage 2 always packs at least as
        // many planets as stage 1.
        if s.planet_count > max_planets(zs2, zp2) {
            return None;
        }

        Some(Solution {
            gear_ratio: gr,
            planet_count: s.planet_count,
            stage1_ring_teeth: s.ring_teeth as u32,
            stage1_planet_teeth: s.planet_teeth as u32,
            stage1_sun_teeth: s.sun_teeth as u32,
            planet_to_sun_ratio_stage1: round_to(zp1 / zs1, 1),
            stage1_module: round_to(m1, 3),
            stage2_ring_teeth: zr2 as u32,
            stage2_planet_teeth: zp2 as u32,
            stage2_sun_teeth: zs2 as u32,
            stage2_module: round_to(m2, 3),
            stage2_sun_bore_metric: sun_bore_metric(m2, zs2),
        })
    }
}
