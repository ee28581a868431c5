//! # Constants and type definitions for the gearbox search
//!
//! This module centralizes the **sweep resolutions**, **numerical tolerances**,
//! **default search bounds**, and **common type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Sweep steps for the outside diameter and the stage multiplier `k`
//! - Tolerances used to accept near-integer stage-2 tooth counts
//! - Compiled-in defaults for [`SearchBounds`](crate::search_bounds::SearchBounds)
//! - Type aliases naming the physical meaning of the `f64`/`u32` values
//!
//! The step sizes and the integrality tolerance are empirical; changing them changes
//! which solutions are found.

// -------------------------------------------------------------------------------------------------
// Sweep resolutions and tolerances
// -------------------------------------------------------------------------------------------------

/// Step of the outside-diameter sweep (same unit as the diameters, usually mm).
pub const OD_STEP: f64 = 0.1;

/// Resolution of the stage multiplier `k = zp2/zp1`: `k` is swept on multiples of 1/10.
pub const K_STEPS_PER_UNIT: f64 = 10.0;

/// Maximum distance to the nearest integer for a stage-2 tooth count to be realizable.
pub const INTEGRALITY_TOLERANCE: f64 = 0.01;

/// Largest multiplier grid index `t` (`k = t/10`) a window may reach.
pub const MAX_K_STEP: i64 = 1 << 62;

/// Slack used when comparing the analytic `k` window bounds.
pub const K_WINDOW_EPS: f64 = 1e-6;

/// Allowance subtracted from the sun-2 root diameter when computing the bore metric.
pub const SUN_BORE_ALLOWANCE: f64 = 8.0;

/// Tooth-count offset of the bore metric `m2·(zs2 − 1.25) − 8`.
pub const SUN_BORE_DEDENDUM: f64 = 1.25;

// -------------------------------------------------------------------------------------------------
// Default bounds
// -------------------------------------------------------------------------------------------------

/// Default lower bound of the accepted gear ratio.
pub const DEFAULT_MIN_RATIO: f64 = 40.0;

/// Default upper bound of the accepted gear ratio.
pub const DEFAULT_MAX_RATIO: f64 = 60.0;

/// Default minimum tooth count for every gear of both stages.
pub const DEFAULT_MIN_TEETH: u32 = 11;

/// Default minimum module for both stages.
pub const DEFAULT_MIN_MODULE: f64 = 1.0;

/// Default minimum number of planets.
pub const DEFAULT_MIN_PLANETS: u32 = 3;

/// Default maximum number of planets.
pub const DEFAULT_MAX_PLANETS: u32 = 8;

/// Default minimum sun-2 bore metric; smaller suns cannot take a shaft.
pub const DEFAULT_MIN_SUN_BORE: f64 = 20.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Length in millimeters (outside diameters, bore metric)
pub type Millimeter = f64;
/// Gear module (pitch diameter / tooth count), in millimeters
pub type Module = f64;
/// Tooth count of a single gear
pub type Teeth = u32;
/// Overall reduction ratio of the gearbox
pub type Ratio = f64;
