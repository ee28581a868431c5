//! # Accepted gearbox configurations
//!
//! A [`Solution`] is one tooth-count combination that passed every acceptance
//! check of the [combination search](crate::search::CombinationSearch). It is
//! immutable once created.
//!
//! Serialized field names are the short table labels
//! (`GR`, `np`, `zr1`, …), so CSV exports line up with the printed table.

use crate::constants::{Millimeter, Module, Ratio, Teeth};
use crate::gear_math::round_to;
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::fmt;

/// One accepted configuration of the two-stage gearbox.
///
/// Invariants
/// -----------------
/// * `stage1_ring_teeth == stage1_sun_teeth + 2·stage1_planet_teeth`
/// * `stage2_ring_teeth == stage2_sun_teeth + 2·stage2_planet_teeth`
/// * `stage1_module`, `stage2_module` ≥ the `min_module` of the run
///
/// Rounding
/// -----------------
/// * `gear_ratio` keeps 6 decimals (the precision used for filtering);
///   [`Solution::display_ratio`] gives the 1-decimal value shown in tables.
/// * Modules keep 3 decimals, `planet_to_sun_ratio_stage1` and
///   `stage2_sun_bore_metric` keep 1 decimal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    #[serde(rename = "GR")]
    pub gear_ratio: Ratio,
    #[serde(rename = "np")]
    pub planet_count: u32,
    #[serde(rename = "zr1")]
    pub stage1_ring_teeth: Teeth,
    #[serde(rename = "zp1")]
    pub stage1_planet_teeth: Teeth,
    #[serde(rename = "zs1")]
    pub stage1_sun_teeth: Teeth,
    #[serde(rename = "grsp1")]
    pub planet_to_sun_ratio_stage1: f64,
    #[serde(rename = "m1")]
    pub stage1_module: Module,
    #[serde(rename = "zr2")]
    pub stage2_ring_teeth: Teeth,
    #[serde(rename = "zp2")]
    pub stage2_planet_teeth: Teeth,
    #[serde(rename = "zs2")]
    pub stage2_sun_teeth: Teeth,
    #[serde(rename = "m2")]
    pub stage2_module: Module,
    #[serde(rename = "zs2id")]
    pub stage2_sun_bore_metric: Millimeter,
}

/// Identity of a solution up to scale.
///
/// Two solutions with the same key differ only by their modules (they come from
/// different outside diameters); the post-processing keeps one per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScaleKey {
    pub gear_ratio: OrderedFloat<f64>,
    pub planet_count: u32,
    pub stage1: [Teeth; 3],
    pub planet_to_sun_ratio_stage1: OrderedFloat<f64>,
    pub stage2: [Teeth; 3],
}

impl Solution {
    /// Gear ratio rounded to one decimal, as displayed.
    pub fn display_ratio(&self) -> Ratio {
        round_to(self.gear_ratio, 1)
    }

    /// Key shared by all scale variants of this solution.
    pub fn scale_key(&self) -> ScaleKey {
        ScaleKey {
            gear_ratio: OrderedFloat(self.display_ratio()),
            planet_count: self.planet_count,
            stage1: [
                self.stage1_ring_teeth,
                self.stage1_planet_teeth,
                self.stage1_sun_teeth,
            ],
            planet_to_sun_ratio_stage1: OrderedFloat(self.planet_to_sun_ratio_stage1),
            stage2: [
                self.stage2_ring_teeth,
                self.stage2_planet_teeth,
                self.stage2_sun_teeth,
            ],
        }
    }

    /// Stage-1 ring tip diameter, `m1·(zr1 + 2)`.
    pub fn outside_diameter(&self) -> Millimeter {
        self.stage1_module * (f64::from(self.stage1_ring_teeth) + 2.0)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GR {:.1} | np {} | stage 1: zr {} zp {} zs {} m {:.3} | stage 2: zr {} zp {} zs {} m {:.3} | sun bore {:.1}",
            self.display_ratio(),
            self.planet_count,
            self.stage1_ring_teeth,
            self.stage1_planet_teeth,
            self.stage1_sun_teeth,
            self.stage1_module,
            self.stage2_ring_teeth,
            self.stage2_planet_teeth,
            self.stage2_sun_teeth,
            self.stage2_module,
            self.stage2_sun_bore_metric
        )
    }
}
