//! # Combination search engine
//!
//! Exhaustive search over integer tooth counts of a two-stage differential
//! planetary gearbox (sun 1 input, ring 1 fixed, ring 2 output).
//!
//! ## Pipeline overview
//!
//! 1. **Feasibility gate**
//!    If even the largest outside diameter cannot hold `3·min_teeth` ring teeth at
//!    `min_module`, the run stops immediately with [`SearchOutcome::Infeasible`].
//!
//! 2. **Nested sweep** (outer to inner)
//!    outside diameter (step [`OD_STEP`](crate::constants::OD_STEP)) → planet count →
//!    normalized sun/ring teeth ([`candidates`]) → multiplier `k` ([`multiplier`]).
//!    Each level prunes with the checks that only depend on the values fixed so far.
//!
//! 3. **Acceptance**
//!    [`Candidate::accept`] applies the full predicate; every accepted solution bumps
//!    the running counter reported to a [`ProgressReporter`]. Rejections are silent.
//!
//! 4. **Post-processing**
//!    bore filter → scale deduplication → sort ([`crate::post_process`]).
//!
//! ## Example
//!
//! ```rust,no_run
//! use gearbox_search::progress::Silent;
//! use gearbox_search::search::{CombinationSearch, SearchOutcome};
//! use gearbox_search::search_bounds::SearchBounds;
//!
//! let bounds = SearchBounds::builder().outside_diameter(80.0, 90.0).build()?;
//! match CombinationSearch::new(bounds).run(&mut Silent)? {
//!     SearchOutcome::Completed(report) => {
//!         for s in &report.solutions {
//!             println!("{s}");
//!         }
//!     }
//!     SearchOutcome::Infeasible(why) => println!("{why}"),
//! }
//! # Ok::<(), gearbox_search::gearbox_errors::GearboxError>(())
//! ```
//!
//! ## Determinism
//!
//! The engine holds no state between runs; identical bounds give identical
//! solutions in identical order.

pub mod candidates;
pub mod multiplier;

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::gearbox_errors::GearboxError;
use crate::post_process::{finalize, PostProcessed};
use crate::progress::{fmt_dur, ProgressReporter};
use crate::search_bounds::SearchBounds;
use crate::solution::Solution;

use candidates::{outside_diameters, stage_one_candidates};
pub use candidates::StageOne;
pub use multiplier::{Candidate, KWindow};

/// Why a search was not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Infeasibility {
    /// `floor(max_outside_diameter/min_module − 2)`.
    pub max_ring_teeth: i64,
    /// `3·min_teeth`.
    pub min_ring_teeth: i64,
}

impl fmt::Display for Infeasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No feasible solutions: od too small for mm and mt (at most {} ring teeth, {} needed).",
            self.max_ring_teeth, self.min_ring_teeth
        )
    }
}

/// Summary of a completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    /// Final solutions, filtered, deduplicated and sorted.
    pub solutions: Vec<Solution>,
    /// Number of combinations accepted by the sweep.
    pub raw_count: usize,
    /// Number left after the sun-bore filter.
    pub after_bore_filter: usize,
    pub elapsed: Duration,
}

/// Outcome of [`CombinationSearch::run`].
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Infeasible(Infeasibility),
    Completed(SearchReport),
}

impl SearchOutcome {
    /// Final solutions; empty when the bounds were infeasible.
    pub fn solutions(&self) -> &[Solution] {
        match self {
            SearchOutcome::Infeasible(_) => &[],
            SearchOutcome::Completed(report) => &report.solutions,
        }
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, SearchOutcome::Infeasible(_))
    }
}

/// The combination search engine.
///
/// Stateless apart from its bounds: [`run`](Self::run) may be called any number of
/// times and always returns the same result.
#[derive(Debug, Clone)]
pub struct CombinationSearch {
    bounds: SearchBounds,
}

impl CombinationSearch {
    pub fn new(bounds: SearchBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> &SearchBounds {
        &self.bounds
    }

    /// Check that the envelope can hold a stage-1 configuration at all.
    pub fn feasibility(&self) -> Result<(), Infeasibility> {
        if self.bounds.is_feasible() {
            Ok(())
        } else {
            Err(Infeasibility {
                max_ring_teeth: self
                    .bounds
                    .max_ring_teeth(self.bounds.max_outside_diameter),
                min_ring_teeth: self.bounds.min_ring_teeth(),
            })
        }
    }

    /// Lazily stream every candidate of the sweep, before the acceptance predicate.
    ///
    /// Return
    /// ----------
    /// * All `(stage-1 configuration, k)` pairs in enumeration order: outside
    ///   diameter, planet count, normalized sun teeth, normalized ring teeth, `k`.
    pub fn candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        let b = &self.bounds;
        outside_diameters(b.min_outside_diameter, b.max_outside_diameter)
            .flat_map(move |od| {
                (b.min_planets..=b.max_planets)
                    .flat_map(move |np| stage_one_candidates(b, od, np))
            })
            .filter_map(move |stage| {
                KWindow::for_stage(&stage, b).map(|w| (stage, w))
            })
            .flat_map(|(stage, window)| {
                window.values().map(move |k| Candidate {
                    stage,
                    multiplier: k,
                })
            })
    }

    /// Run the sweep and return every accepted combination, without post-processing.
    ///
    /// Arguments
    /// -----------------
    /// * `reporter`: receives the running count after each acceptance.
    ///
    /// Return
    /// ----------
    /// * The raw solutions in enumeration order, or the reporter's I/O error.
    pub fn enumerate(
        &self,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<Vec<Solution>, GearboxError> {
        let mut solutions = Vec::new();
        let mut current_od = f64::NAN;

        for candidate in self.candidates() {
            if candidate.stage.outside_diameter != current_od {
                current_od = candidate.stage.outside_diameter;
                debug!(od = current_od, found = solutions.len(), "sweeping outside diameter");
            }
            if let Some(solution) = candidate.accept(&self.bounds) {
                solutions.push(solution);
                reporter.on_solution(solutions.len())?;
            }
        }

        reporter.finish(solutions.len())?;
        Ok(solutions)
    }

    /// Run the full search: feasibility gate, sweep and post-processing.
    ///
    /// Return
    /// ----------
    /// * `Ok(SearchOutcome::Infeasible)` when the envelope is too small (no sweep).
    /// * `Ok(SearchOutcome::Completed)` with the final solutions otherwise.
    /// * `Err(GearboxError)` only if the progress reporter fails to write.
    pub fn run(&self, reporter: &mut dyn ProgressReporter) -> Result<SearchOutcome, GearboxError> {
        if let Err(why) = self.feasibility() {
            warn!(
                max_ring_teeth = why.max_ring_teeth,
                min_ring_teeth = why.min_ring_teeth,
                "search bounds are infeasible"
            );
            return Ok(SearchOutcome::Infeasible(why));
        }

        info!(bounds = %self.bounds, "starting combination search");
        let start = Instant::now();

        let raw = self.enumerate(reporter)?;
        let raw_count = raw.len();
        let PostProcessed {
            solutions,
            after_bore_filter,
        } = finalize(raw, self.bounds.min_sun_bore);
        let elapsed = start.elapsed();

        info!(
            raw = raw_count,
            after_bore_filter,
            unique = solutions.len(),
            elapsed = %fmt_dur(elapsed),
            "combination search finished"
        );

        Ok(SearchOutcome::Completed(SearchReport {
            solutions,
            raw_count,
            after_bore_filter,
            elapsed,
        }))
    }
}
