//! # Post-processing of raw search results
//!
//! The sweep produces every accepted combination, including many that differ only
//! by scale. This module turns that raw set into the final list:
//!
//! 1. [`filter_sun_bore`] – drop solutions whose sun 2 is too small for a shaft;
//! 2. [`dedup_scale_variants`] – keep the smallest-module variant of each
//!    [`ScaleKey`](crate::solution::ScaleKey);
//! 3. [`sort_by_planet_to_sun`] – order by stage-1 planet/sun ratio.
//!
//! Every step is stable: among equal keys the enumeration order is preserved.

use crate::constants::Millimeter;
use crate::solution::Solution;
use itertools::Itertools;

/// Keep solutions with `stage2_sun_bore_metric ≥ min_sun_bore`.
pub fn filter_sun_bore(solutions: Vec<Solution>, min_sun_bore: Millimeter) -> Vec<Solution> {
    solutions
        .into_iter()
        .filter(|s| s.stage2_sun_bore_metric >= min_sun_bore)
        .collect()
}

/// Remove scale duplicates, keeping the variant with the smallest stage-1 module.
///
/// The output is ordered by ascending stage-1 module.
pub fn dedup_scale_variants(solutions: Vec<Solution>) -> Vec<Solution> {
    solutions
        .into_iter()
        .sorted_by(|a, b| a.stage1_module.total_cmp(&b.stage1_module))
        .unique_by(Solution::scale_key)
        .collect()
}

/// Sort by `planet_to_sun_ratio_stage1` ascending (stable).
pub fn sort_by_planet_to_sun(mut solutions: Vec<Solution>) -> Vec<Solution> {
    solutions.sort_by(|a, b| {
        a.planet_to_sun_ratio_stage1
            .total_cmp(&b.planet_to_sun_ratio_stage1)
    });
    solutions
}

/// Result of the full post-processing pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PostProcessed {
    pub solutions: Vec<Solution>,
    /// Number of solutions left after the bore filter, before deduplication.
    pub after_bore_filter: usize,
}

/// Run filter → dedup → sort.
pub fn finalize(raw: Vec<Solution>, min_sun_bore: Millimeter) -> PostProcessed {
    let filtered = filter_sun_bore(raw, min_sun_bore);
    let after_bore_filter = filtered.len();
    let solutions = sort_by_planet_to_sun(dedup_scale_variants(filtered));
    PostProcessed {
        solutions,
        after_bore_filter,
    }
}

#[cfg(test)]
mod post_process_test {
    use super::*;
    use crate::solution::solution_test::sample;

    #[test]
    fn test_filter_sun_bore() {
        let mut small = sample(1.2);
        small.stage2_sun_bore_metric = 19.9;
        let big = sample(1.3);
        let kept = filter_sun_bore(vec![small, big.clone()], 20.0);
        assert_eq!(kept, vec![big]);
    }

    #[test]
    fn test_dedup_keeps_smallest_module() {
        let raw = vec![sample(1.5), sample(1.29), sample(1.4)];
        let out = dedup_scale_variants(raw);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].stage1_module, 1.29);
    }

    #[test]
    fn test_dedup_keeps_distinct_keys() {
        let a = sample(1.29);
        let mut b = sample(1.3);
        b.planet_count = 3;
        let out = dedup_scale_variants(vec![b.clone(), a.clone()]);
        assert_eq!(out, vec![a, b]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut a = sample(1.5);
        a.planet_to_sun_ratio_stage1 = 1.2;
        let mut b = sample(1.4);
        b.planet_to_sun_ratio_stage1 = 0.5;
        let mut c = sample(1.3);
        c.planet_to_sun_ratio_stage1 = 1.2;
        let out = sort_by_planet_to_sun(vec![a.clone(), b.clone(), c.clone()]);
        assert_eq!(out, vec![b, a, c]);
    }

    #[test]
    fn test_finalize_counts() {
        let mut small = sample(1.1);
        small.stage2_sun_bore_metric = 10.0;
        let out = finalize(vec![small, sample(1.5), sample(1.3)], 20.0);
        assert_eq!(out.after_bore_filter, 2);
        assert_eq!(out.solutions.len(), 1);
        assert_eq!(out.solutions[0].stage1_module, 1.3);
    }
}
