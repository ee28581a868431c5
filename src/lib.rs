//! # gearbox-search
//!
//! Exhaustive tooth-count search for **split-ring compound ("differential") planetary
//! gearboxes**: sun 1 is the input, ring 1 is fixed and ring 2 is the output.
//!
//! Given an outside-diameter envelope, a target reduction window and manufacturing
//! limits, the [combination search](search::CombinationSearch) enumerates every
//! integer tooth-count combination that meshes, spaces its planets evenly, fits the
//! planets around both suns and reaches the target ratio.
//!
//! ## Governing equations
//!
//! ```text
//! gr  = 1/((1-(zr1*zp2)/(zr2*zp1))/(1+(zr1/zs1)))
//! zr  = zs + 2*zp
//! zp2 = zp1*k
//! m1*(zp1+zs1) = m2*(zp2+zs2)
//! (zs+zr) % np = 0
//! zr2 = zr1*k + np
//! ```
//!
//! ## Modules
//!
//! - [`search_bounds`] – run limits and their validating builder
//! - [`search`] – the nested sweep and acceptance predicate
//! - [`post_process`] – bore filter, scale deduplication, sorting
//! - [`solution`] – the accepted configuration record
//! - [`gear_math`] – closed-form stage relations
//! - [`display`], [`export`], [`progress`], [`cli`] – terminal and file I/O
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use gearbox_search::display::SolutionsDisplayExt;
//! use gearbox_search::progress::Silent;
//! use gearbox_search::search::CombinationSearch;
//! use gearbox_search::search_bounds::SearchBounds;
//!
//! let bounds = SearchBounds::builder().outside_diameter(80.0, 85.0).build()?;
//! let outcome = CombinationSearch::new(bounds).run(&mut Silent)?;
//! println!("{}", outcome.solutions().show());
//! # Ok::<(), gearbox_search::gearbox_errors::GearboxError>(())
//! ```
//!
//! ## References
//!
//! - Juan Gg, *Split ring compound epicyclic/planetary gearbox*,
//!   <https://juangg-projects.blogspot.ca/2018/02/split-ring-compound-epicyclicplanetary.html>

pub mod cli;
pub mod constants;
pub mod display;
pub mod export;
pub mod gear_math;
pub mod gearbox_errors;
pub mod post_process;
pub mod progress;
pub mod search;
pub mod search_bounds;
pub mod solution;

pub use gearbox_errors::GearboxError;
pub use search::{CombinationSearch, SearchOutcome};
pub use search_bounds::SearchBounds;
pub use solution::Solution;
