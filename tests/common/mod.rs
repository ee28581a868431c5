#![allow(dead_code)]

use gearbox_search::gear_math::max_planets;
use gearbox_search::progress::Silent;
use gearbox_search::search::{CombinationSearch, SearchOutcome, SearchReport};
use gearbox_search::search_bounds::SearchBounds;
use gearbox_search::solution::Solution;

/// Default bounds with the given diameter window.
pub fn bounds(min_od: f64, max_od: f64) -> SearchBounds {
    SearchBounds::builder()
        .outside_diameter(min_od, max_od)
        .build()
        .unwrap()
}

/// Raw (unfiltered) solutions of a search.
pub fn raw_solutions(bounds: SearchBounds) -> Vec<Solution> {
    CombinationSearch::new(bounds).enumerate(&mut Silent).unwrap()
}

/// Final report of a search that is expected to be feasible.
pub fn completed(bounds: SearchBounds) -> SearchReport {
    match CombinationSearch::new(bounds).run(&mut Silent).unwrap() {
        SearchOutcome::Completed(report) => report,
        SearchOutcome::Infeasible(why) => panic!("unexpected infeasibility: {why}"),
    }
}

/// Check every per-solution invariant against the bounds that produced it.
pub fn assert_solution_valid(s: &Solution, b: &SearchBounds) {
    assert_eq!(
        s.stage1_ring_teeth,
        s.stage1_sun_teeth + 2 * s.stage1_planet_teeth,
        "stage 1 identity: {s}"
    );
    assert_eq!(
        s.stage2_ring_teeth,
        s.stage2_sun_teeth + 2 * s.stage2_planet_teeth,
        "stage 2 identity: {s}"
    );
    assert_eq!(
        (s.stage1_sun_teeth + s.stage1_ring_teeth) % s.planet_count,
        0,
        "planet spacing: {s}"
    );
    assert_eq!(
        s.stage2_ring_teeth,
        s.stage1_ring_teeth * s.stage2_planet_teeth / s.stage1_planet_teeth + s.planet_count,
        "zr2 = k·zr1 + np: {s}"
    );

    for z in [
        s.stage1_ring_teeth,
        s.stage1_planet_teeth,
        s.stage1_sun_teeth,
        s.stage2_ring_teeth,
        s.stage2_planet_teeth,
        s.stage2_sun_teeth,
    ] {
        assert!(z >= b.min_teeth, "teeth below minimum: {s}");
    }

    assert!(s.gear_ratio >= b.min_ratio && s.gear_ratio <= b.max_ratio, "ratio: {s}");
    assert!(
        s.planet_count
            <= max_planets(
                f64::from(s.stage1_sun_teeth),
                f64::from(s.stage1_planet_teeth)
            ),
        "stage 1 packing: {s}"
    );
    assert!(
        s.planet_count
            <= max_planets(
                f64::from(s.stage2_sun_teeth),
                f64::from(s.stage2_planet_teeth)
            ),
        "stage 2 packing: {s}"
    );
    assert!(s.planet_count >= b.min_planets && s.planet_count <= b.max_planets);

    // Modules are stored rounded to 3 decimals.
    assert!(s.stage1_module >= b.min_module - 5e-4, "m1: {s}");
    assert!(s.stage2_module >= b.min_module - 5e-4, "m2: {s}");
    assert!(s.outside_diameter() <= b.max_outside_diameter + 0.1, "envelope: {s}");
}
