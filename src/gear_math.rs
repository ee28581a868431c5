//! # Planetary stage relations
//!
//! Closed-form relations of the sun1-input / ring1-fixed / ring2-output differential
//! planetary gearbox:
//!
//! ```text
//! gr  = 1/((1-(zr1*zp2)/(zr2*zp1))/(1+(zr1/zs1)))
//! zr  = zs + 2*zp
//! zp2 = zp1*k
//! m1*(zp1+zs1) = m2*(zp2+zs2)
//! zr2 = zr1*k + np
//! ```
//!
//! and the small rounding helpers the search applies to its outputs.

use crate::constants::{
    Millimeter, Module, Ratio, INTEGRALITY_TOLERANCE, SUN_BORE_ALLOWANCE, SUN_BORE_DEDENDUM,
};
use std::f64::consts::PI;

/// Maximum number of planets that fit around a sun without planet–planet interference.
///
/// `floor(π·(1 + zs/zp))`.
///
/// Arguments
/// -----------------
/// * `zs`: sun tooth count.
/// * `zp`: planet tooth count (must be non-zero).
///
/// Return
/// ----------
/// * The packing limit, or `0` when `zp` is not positive.
pub fn max_planets(zs: f64, zp: f64) -> u32 {
    if zp <= 0.0 {
        return 0;
    }
    let limit = (PI * (1.0 + zs / zp)).floor();
    if limit.is_finite() && limit > 0.0 {
        limit as u32
    } else {
        0
    }
}

/// Overall reduction of the differential gearbox.
///
/// Arguments
/// -----------------
/// * `zr1`, `zp1`, `zs1`: stage-1 ring, planet and sun teeth.
/// * `zr2`, `zp2`: stage-2 ring and planet teeth.
///
/// Return
/// ----------
/// * `Some(gr)` when every denominator is non-zero and the result is finite,
///   `None` otherwise (e.g. identical stage ratios give an infinite reduction).
pub fn gear_ratio(zr1: f64, zp1: f64, zs1: f64, zr2: f64, zp2: f64) -> Option<Ratio> {
    if zr2 == 0.0 || zp1 == 0.0 || zs1 == 0.0 {
        return None;
    }
    let inner = (1.0 - (zr1 * zp2) / (zr2 * zp1)) / (1.0 + zr1 / zs1);
    if inner == 0.0 {
        return None;
    }
    let gr = 1.0 / inner;
    gr.is_finite().then_some(gr)
}

/// Stage-1 module from the ring-1 tip diameter: `od/(zr1 + 2)`.
#[inline]
pub fn stage1_module(od: Millimeter, zr1: f64) -> Module {
    od / (zr1 + 2.0)
}

/// Stage-2 module keeping both stages on the same centre distance.
///
/// `m2 = m1·(zp1 + zs1)/(k·(zp1 + zs1) + np)`; `None` when the denominator is not positive.
pub fn stage2_module(m1: Module, zp1: f64, zs1: f64, k: f64, np: f64) -> Option<Module> {
    let denom = k * (zp1 + zs1) + np;
    if denom <= 0.0 {
        return None;
    }
    Some(m1 * (zp1 + zs1) / denom)
}

/// Room left inside sun 2 for a shaft: `m2·(zs2 − 1.25) − 8`, rounded to 0.1.
pub fn sun_bore_metric(m2: Module, zs2: f64) -> Millimeter {
    round_to(m2 * (zs2 - SUN_BORE_DEDENDUM) - SUN_BORE_ALLOWANCE, 1)
}

/// Whether `x` lies within [`INTEGRALITY_TOLERANCE`] of an integer.
#[inline]
pub fn is_near_integer(x: f64) -> bool {
    (x.round() - x).abs() < INTEGRALITY_TOLERANCE
}

/// Round `x` to `decimals` decimal places.
///
/// Rounds the exact binary value, ties to even: `1.5625 → 1.562`, while
/// `2.675` (stored as `2.67499…`) gives `2.67`. Decimal formatting already
/// rounds this way, so the formatted digits are parsed back.
pub fn round_to(x: f64, decimals: usize) -> f64 {
    if !x.is_finite() {
        return x;
    }
    format!("{x:.decimals$}").parse().unwrap_or(x)
}
