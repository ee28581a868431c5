//! # Search bounds
//!
//! This module defines [`SearchBounds`], the immutable set of limits that drives one
//! run of the [combination search](crate::search::CombinationSearch), together with
//! its validating builder [`SearchBoundsBuilder`].
//!
//! ## Fields
//!
//! - **Envelope** – `min_outside_diameter`, `max_outside_diameter`: the ring-1 tip
//!   diameter is swept over `[min, max)` in steps of [`OD_STEP`](crate::constants::OD_STEP).
//! - **Target** – `min_ratio`, `max_ratio`: closed window for the overall reduction.
//! - **Manufacturing** – `min_teeth` (every gear of both stages), `min_module`
//!   (both stages), `min_sun_bore` (post-filter on the sun-2 bore metric).
//! - **Planets** – `min_planets ..= max_planets`.
//!
//! ## Example
//!
//! ```rust
//! use gearbox_search::search_bounds::SearchBounds;
//!
//! let bounds = SearchBounds::builder()
//!     .outside_diameter(80.0, 90.0)
//!     .ratio(40.0, 60.0)
//!     .min_teeth(11)
//!     .planets(3, 8)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(bounds.max_planets, 8);
//! ```
use crate::constants::{
    Millimeter, Module, Ratio, Teeth, DEFAULT_MAX_PLANETS, DEFAULT_MAX_RATIO, DEFAULT_MIN_MODULE,
    DEFAULT_MIN_PLANETS, DEFAULT_MIN_RATIO, DEFAULT_MIN_SUN_BORE, DEFAULT_MIN_TEETH,
};
use crate::gearbox_errors::GearboxError;
use std::cmp::Ordering::{Equal, Greater, Less};
use std::fmt;

/// Limits of one combination search.
///
/// All values are fixed for the duration of a run. Build one with
/// [`SearchBounds::builder`] to get validation; the [`Default`] implementation
/// carries the compiled-in default constants but leaves the
/// diameter window empty (`0.0..0.0`), since the diameters have no sensible default.
///
/// Defaults
/// -----------------
/// * `min_ratio`: 40
/// * `max_ratio`: 60
/// * `min_teeth`: 11
/// * `min_module`: 1.0
/// * `min_planets`: 3
/// * `max_planets`: 8
/// * `min_sun_bore`: 20.0
///
/// See also
/// ------------
/// * [`SearchBoundsBuilder::build`] – Validation rules.
/// * [`CombinationSearch`](crate::search::CombinationSearch) – Consumer of these bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchBounds {
    pub min_outside_diameter: Millimeter,
    pub max_outside_diameter: Millimeter,
    pub min_ratio: Ratio,
    pub max_ratio: Ratio,
    pub min_teeth: Teeth,
    pub min_module: Module,
    pub min_planets: u32,
    pub max_planets: u32,
    /// Minimum sun-2 bore metric kept by the post-processing filter.
    pub min_sun_bore: Millimeter,
}

impl SearchBounds {
    /// Create a new [`SearchBoundsBuilder`] initialized with the default bounds.
    pub fn builder() -> SearchBoundsBuilder {
        SearchBoundsBuilder::new()
    }

    /// Largest stage-1 ring tooth count that still meets `min_module` at diameter `od`.
    ///
    /// The ring-1 tip diameter is `m1·(zr1 + 2)`, hence `zr1 ≤ od/m − 2`.
    pub fn max_ring_teeth(&self, od: Millimeter) -> i64 {
        (od / self.min_module - 2.0).floor() as i64
    }

    /// Smallest stage-1 ring tooth count that can carry `min_teeth` on both sun and planets.
    pub fn min_ring_teeth(&self) -> i64 {
        3 * i64::from(self.min_teeth)
    }

    /// Whether the envelope can hold any stage-1 configuration at all.
    ///
    /// Return
    /// ----------
    /// * `false` when even `max_outside_diameter` is too small for `3·min_teeth`
    ///   ring teeth at `min_module`.
    pub fn is_feasible(&self) -> bool {
        self.max_ring_teeth(self.max_outside_diameter) >= self.min_ring_teeth()
    }
}

impl Default for SearchBounds {
    fn default() -> Self {
        SearchBounds {
            min_outside_diameter: 0.0,
            max_outside_diameter: 0.0,
            min_ratio: DEFAULT_MIN_RATIO,
            max_ratio: DEFAULT_MAX_RATIO,
            min_teeth: DEFAULT_MIN_TEETH,
            min_module: DEFAULT_MIN_MODULE,
            min_planets: DEFAULT_MIN_PLANETS,
            max_planets: DEFAULT_MAX_PLANETS,
            min_sun_bore: DEFAULT_MIN_SUN_BORE,
        }
    }
}

impl fmt::Display for SearchBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "od ∈ [{}, {}), ratio ∈ [{}, {}], teeth ≥ {}, module ≥ {}, planets ∈ [{}, {}], sun bore ≥ {}",
            self.min_outside_diameter,
            self.max_outside_diameter,
            self.min_ratio,
            self.max_ratio,
            self.min_teeth,
            self.min_module,
            self.min_planets,
            self.max_planets,
            self.min_sun_bore
        )
    }
}

/// Builder for [`SearchBounds`], with validation.
#[derive(Debug, Clone)]
pub struct SearchBoundsBuilder {
    bounds: SearchBounds,
}

impl Default for SearchBoundsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBoundsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            bounds: SearchBounds::default(),
        }
    }

    pub fn outside_diameter(mut self, min: Millimeter, max: Millimeter) -> Self {
        self.bounds.min_outside_diameter = min;
        self.bounds.max_outside_diameter = max;
        self
    }
    pub fn min_outside_diameter(mut self, v: Millimeter) -> Self {
        self.bounds.min_outside_diameter = v;
        self
    }
    pub fn max_outside_diameter(mut self, v: Millimeter) -> Self {
        self.bounds.max_outside_diameter = v;
        self
    }
    pub fn ratio(mut self, min: Ratio, max: Ratio) -> Self {
        self.bounds.min_ratio = min;
        self.bounds.max_ratio = max;
        self
    }
    pub fn min_ratio(mut self, v: Ratio) -> Self {
        self.bounds.min_ratio = v;
        self
    }
    pub fn max_ratio(mut self, v: Ratio) -> Self {
        self.bounds.max_ratio = v;
        self
    }
    pub fn min_teeth(mut self, v: Teeth) -> Self {
        self.bounds.min_teeth = v;
        self
    }
    pub fn min_module(mut self, v: Module) -> Self {
        self.bounds.min_module = v;
        self
    }
    pub fn planets(mut self, min: u32, max: u32) -> Self {
        self.bounds.min_planets = min;
        self.bounds.max_planets = max;
        self
    }
    pub fn min_planets(mut self, v: u32) -> Self {
        self.bounds.min_planets = v;
        self
    }
    pub fn max_planets(mut self, v: u32) -> Self {
        self.bounds.max_planets = v;
        self
    }
    pub fn min_sun_bore(mut self, v: Millimeter) -> Self {
        self.bounds.min_sun_bore = v;
        self
    }

    // ---- Numeric helpers for PartialOrd (handle NaN as invalid) ----

    #[inline]
    fn gt0(x: f64) -> bool {
        x.partial_cmp(&0.0) == Some(Greater)
    }

    #[inline]
    fn ge0(x: f64) -> bool {
        matches!(x.partial_cmp(&0.0), Some(Greater) | Some(Equal))
    }

    #[inline]
    fn le(a: f64, b: f64) -> bool {
        matches!(a.partial_cmp(&b), Some(Less) | Some(Equal))
    }

    /// Finalize the builder and produce a [`SearchBounds`] instance.
    ///
    /// Validation rules
    /// -----------------
    /// * `0 < min_outside_diameter ≤ max_outside_diameter`, both finite.
    /// * `0 < min_ratio ≤ max_ratio`, both finite.
    /// * `min_teeth ≥ 1`.
    /// * `min_module > 0`, finite.
    /// * `1 ≤ min_planets ≤ max_planets`.
    /// * `min_sun_bore ≥ 0`.
    ///
    /// Feasibility of the envelope is **not** checked here: a window too small for
    /// `min_teeth` at `min_module` is a valid request that simply has no solution
    /// (see [`SearchBounds::is_feasible`]).
    ///
    /// Returns
    /// -----------------
    /// * `Ok(SearchBounds)` if all values are valid.
    /// * `Err(GearboxError::InvalidBounds)` naming the first violated rule.
    pub fn build(self) -> Result<SearchBounds, GearboxError> {
        let b = &self.bounds;

        if !(Self::gt0(b.min_outside_diameter) && b.min_outside_diameter.is_finite()) {
            return Err(GearboxError::InvalidBounds(format!(
                "min_outside_diameter must be positive and finite (got {})",
                b.min_outside_diameter
            )));
        }
        if !b.max_outside_diameter.is_finite()
            || !Self::le(b.min_outside_diameter, b.max_outside_diameter)
        {
            return Err(GearboxError::InvalidBounds(format!(
                "max_outside_diameter must be finite and >= min_outside_diameter (got {} < {})",
                b.max_outside_diameter, b.min_outside_diameter
            )));
        }
        if !Self::gt0(b.min_ratio) {
            return Err(GearboxError::InvalidBounds(format!(
                "min_ratio must be positive (got {})",
                b.min_ratio
            )));
        }
        if !b.max_ratio.is_finite() || !Self::le(b.min_ratio, b.max_ratio) {
            return Err(GearboxError::InvalidBounds(format!(
                "max_ratio must be finite and >= min_ratio (got {} < {})",
                b.max_ratio, b.min_ratio
            )));
        }
        if b.min_teeth == 0 {
            return Err(GearboxError::InvalidBounds(
                "min_teeth must be at least 1".into(),
            ));
        }
        if !(Self::gt0(b.min_module) && b.min_module.is_finite()) {
            return Err(GearboxError::InvalidBounds(format!(
                "min_module must be positive and finite (got {})",
                b.min_module
            )));
        }
        if b.min_planets == 0 {
            return Err(GearboxError::InvalidBounds(
                "min_planets must be at least 1".into(),
            ));
        }
        if b.min_planets > b.max_planets {
            return Err(GearboxError::InvalidBounds(format!(
                "min_planets can not be bigger than max_planets ({} > {})",
                b.min_planets, b.max_planets
            )));
        }
        if !Self::ge0(b.min_sun_bore) {
            return Err(GearboxError::InvalidBounds(format!(
                "min_sun_bore must be non-negative (got {})",
                b.min_sun_bore
            )));
        }

        Ok(self.bounds)
    }
}
