//! # Stage-1 enumeration
//!
//! Lazily streams the stage-1 tooth counts `(zs1, zp1, zr1)` worth examining for a
//! given outside diameter and planet count, after every pruning rule that does not
//! depend on the multiplier `k` has been applied.
//!
//! ## Normalized counts
//! Sun and ring teeth are enumerated **per planet position**: `zs1 = np·zs1m`,
//! `zr1 = np·zr1m`. This makes `zs1 + zr1` a multiple of `np`, the condition for
//! equally spaced planets, without testing it.
//!
//! ## Ranges
//! With `max_zr1 = floor(od/min_module − 2)` and `mt = min_teeth`:
//!
//! ```text
//! zs1m ∈ [ceil(mt/np), floor((max_zr1 − 2·mt)/np)]
//! zr1m ∈ [max(zs1m + ceil(2·mt/np), zs1m + 1), floor(max_zr1/np)]
//! ```
//!
//! ## Per-pair checks
//! - `np·(zr1m − zs1m)` even, so `zp1 = (zr1 − zs1)/2` is an integer;
//! - `m1 = od/(zr1 + 2) ≥ min_module`;
//! - `np ≤ floor(π·(1 + zs1/zp1))` (planets fit around sun 1).

use crate::constants::{Millimeter, Module, OD_STEP};
use crate::gear_math::{max_planets, stage1_module};
use crate::search_bounds::SearchBounds;

/// Outside diameters visited by the sweep: `min + i·OD_STEP` for
/// `i ∈ [0, ceil((max − min)/OD_STEP))`.
///
/// The upper bound is exclusive, so `min == max` yields nothing.
pub fn outside_diameters(min: Millimeter, max: Millimeter) -> impl Iterator<Item = Millimeter> {
    let n = ((max - min) / OD_STEP).ceil();
    let n = if n.is_finite() && n > 0.0 { n as usize } else { 0 };
    (0..n).map(move |i| min + i as f64 * OD_STEP)
}

/// A stage-1 configuration that passed every `k`-independent check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageOne {
    pub outside_diameter: Millimeter,
    pub planet_count: u32,
    /// Sun teeth per planet position.
    pub normalized_sun_teeth: i64,
    /// Ring teeth per planet position.
    pub normalized_ring_teeth: i64,
    pub sun_teeth: i64,
    pub planet_teeth: i64,
    pub ring_teeth: i64,
    /// Unrounded stage-1 module.
    pub module: Module,
}

impl StageOne {
    /// Build a stage-1 configuration from normalized counts.
    ///
    /// Return
    /// ----------
    /// * `None` when the planet count would be fractional, the module falls below
    ///   `min_module`, or the planets do not fit around the sun.
    pub fn new(
        od: Millimeter,
        planet_count: u32,
        normalized_sun_teeth: i64,
        normalized_ring_teeth: i64,
        min_module: Module,
    ) -> Option<Self> {
        let np = i64::from(planet_count);
        let diff = normalized_ring_teeth - normalized_sun_teeth;
        if diff <= 0 || (np * diff) % 2 != 0 {
            return None;
        }

        let sun_teeth = np * normalized_sun_teeth;
        let ring_teeth = np * normalized_ring_teeth;
        let planet_teeth = (ring_teeth - sun_teeth) / 2;

        let module = stage1_module(od, ring_teeth as f64);
        if module < min_module {
            return None;
        }
        if planet_count > max_planets(sun_teeth as f64, planet_teeth as f64) {
            return None;
        }

        Some(StageOne {
            outside_diameter: od,
            planet_count,
            normalized_sun_teeth,
            normalized_ring_teeth,
            sun_teeth,
            planet_teeth,
            ring_teeth,
            module,
        })
    }

    /// Basic ratio of the stage, `1 + zr1/zs1`.
    pub fn basic_ratio(&self) -> f64 {
        1.0 + self.ring_teeth as f64 / self.sun_teeth as f64
    }
}

#[inline]
fn ceil_div(a: i64, b: i64) -> i64 {
    (a + b - 1).div_euclid(b)
}

/// Stream every feasible [`StageOne`] for one outside diameter and planet count.
///
/// Arguments
/// -----------------
/// * `bounds`: the run limits (`min_teeth`, `min_module` are used here).
/// * `od`: current outside diameter.
/// * `planet_count`: current number of planets (must be ≥ 1).
///
/// Return
/// ----------
/// * A lazy iterator; empty when the normalized sun range is empty.
pub fn stage_one_candidates(
    bounds: &SearchBounds,
    od: Millimeter,
    planet_count: u32,
) -> impl Iterator<Item = StageOne> + '_ {
    let np = i64::from(planet_count.max(1));
    let mt = i64::from(bounds.min_teeth);
    let max_zr1 = bounds.max_ring_teeth(od);

    let min_zs1m = ceil_div(mt, np);
    let max_zs1m = (max_zr1 - 2 * mt).div_euclid(np);
    let max_zr1m = max_zr1.div_euclid(np);
    let min_delta_m = ceil_div(2 * mt, np);

    (min_zs1m..=max_zs1m)
        .flat_map(move |zs1m| {
            let min_zr1m = (zs1m + min_delta_m).max(zs1m + 1);
            (min_zr1m..=max_zr1m).map(move |zr1m| (zs1m, zr1m))
        })
        .filter_map(move |(zs1m, zr1m)| {
            StageOne::new(od, planet_count, zs1m, zr1m, bounds.min_module)
        })
}

#[cfg(test)]
mod candidates_test {
    use super::*;

    fn bounds() -> SearchBounds {
        SearchBounds::builder()
            .outside_diameter(80.0, 80.1)
            .build()
            .unwrap()
    }

    #[test]
    fn test_outside_diameters() {
        let ods: Vec<f64> = outside_diameters(80.0, 80.1).collect();
        assert_eq!(ods, vec![80.0]);

        let ods: Vec<f64> = outside_diameters(80.0, 80.5).collect();
        assert_eq!(ods.len(), 5);
        assert!((ods[4] - 80.4).abs() < 1e-9);

        assert_eq!(outside_diameters(80.0, 80.0).count(), 0);
    }

    #[test]
    fn test_stage_one_new() {
        // np = 6, zs1 = 24, zr1 = 60 → zp1 = 18
        let s = StageOne::new(80.0, 6, 4, 10, 1.0).unwrap();
        assert_eq!((s.sun_teeth, s.planet_teeth, s.ring_teeth), (24, 18, 60));
        assert!((s.module - 80.0 / 62.0).abs() < 1e-12);
        assert!((s.basic_ratio() - 3.5).abs() < 1e-12);

        // np·diff odd → fractional planet
        assert!(StageOne::new(80.0, 3, 4, 9, 1.0).is_none());
        // module too small
        assert!(StageOne::new(50.0, 6, 4, 10, 1.0).is_none());
        // 8 planets around zs1 = 8, zp1 = 32 do not fit (π·1.25 = 3.9)
        assert!(StageOne::new(200.0, 8, 1, 9, 1.0).is_none());
    }

    #[test]
    fn test_stage_one_candidates_respect_bounds() {
        let b = bounds();
        for np in b.min_planets..=b.max_planets {
            for s in stage_one_candidates(&b, 80.0, np) {
                assert_eq!(s.planet_count, np);
                assert_eq!(s.ring_teeth, s.sun_teeth + 2 * s.planet_teeth);
                assert_eq!((s.sun_teeth + s.ring_teeth) % i64::from(np), 0);
                assert!(s.sun_teeth >= 11 && s.planet_teeth >= 11);
                assert!(s.ring_teeth <= 78);
                assert!(s.module >= 1.0);
                assert!(np <= max_planets(s.sun_teeth as f64, s.planet_teeth as f64));
            }
        }
    }

    #[test]
    fn test_stage_one_candidates_empty_when_too_small() {
        let b = bounds();
        // max_zr1 = 30 < 3·11
        assert_eq!(stage_one_candidates(&b, 32.0, 3).count(), 0);
    }

    #[test]
    fn test_stage_one_candidates_first_pair() {
        let b = bounds();
        // np = 3: zs1m starts at ceil(11/3) = 4, zr1m at 4 + ceil(22/3) = 12
        let first = stage_one_candidates(&b, 80.0, 3).next().unwrap();
        assert_eq!(first.normalized_sun_teeth, 4);
        assert_eq!(first.normalized_ring_teeth, 12);
        assert_eq!((first.sun_teeth, first.planet_teeth, first.ring_teeth), (12, 12, 36));
    }
}
