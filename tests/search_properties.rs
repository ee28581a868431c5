mod common;

use std::collections::HashSet;

use common::{assert_solution_valid, bounds, completed, raw_solutions};
use gearbox_search::progress::Silent;
use gearbox_search::search::{CombinationSearch, SearchOutcome};
use gearbox_search::search_bounds::SearchBounds;

#[test]
fn raw_solutions_satisfy_all_constraints() {
    let b = bounds(80.0, 81.0);
    let raw = raw_solutions(b.clone());
    assert!(!raw.is_empty());
    for s in &raw {
        assert_solution_valid(s, &b);
    }
}

#[test]
fn final_solutions_satisfy_all_constraints() {
    let b = bounds(100.0, 100.5);
    let report = completed(b.clone());
    assert!(!report.solutions.is_empty());
    for s in &report.solutions {
        assert_solution_valid(s, &b);
        assert!(s.stage2_sun_bore_metric >= b.min_sun_bore);
    }
}

#[test]
fn search_is_idempotent() {
    let b = bounds(80.0, 80.5);
    let first = completed(b.clone());
    let second = completed(b);
    assert_eq!(first.solutions, second.solutions);
    assert_eq!(first.raw_count, second.raw_count);
    assert_eq!(first.after_bore_filter, second.after_bore_filter);
}

#[test]
fn final_solutions_have_no_scale_duplicates() {
    let report = completed(bounds(100.0, 102.0));
    let mut seen = HashSet::new();
    for s in &report.solutions {
        assert!(seen.insert(s.scale_key()), "duplicate scale variant: {s}");
    }
    assert!(report.solutions.len() <= report.after_bore_filter);
    assert!(report.after_bore_filter <= report.raw_count);
}

#[test]
fn dedup_keeps_lowest_module_variant() {
    let b = bounds(100.0, 102.0);
    let raw = raw_solutions(b.clone());
    let report = completed(b.clone());
    for kept in &report.solutions {
        let smallest = raw
            .iter()
            .filter(|s| s.stage2_sun_bore_metric >= b.min_sun_bore)
            .filter(|s| s.scale_key() == kept.scale_key())
            .map(|s| s.stage1_module)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(kept.stage1_module, smallest, "not the smallest variant: {kept}");
    }
}

#[test]
fn final_solutions_sorted_by_planet_to_sun_ratio() {
    let report = completed(bounds(120.0, 120.5));
    assert!(report
        .solutions
        .windows(2)
        .all(|w| w[0].planet_to_sun_ratio_stage1 <= w[1].planet_to_sun_ratio_stage1));
}

#[test]
fn too_small_envelope_is_reported_infeasible() {
    // floor(34.9 - 2) = 32 < 3·11
    let b = bounds(30.0, 34.9);
    let outcome = CombinationSearch::new(b).run(&mut Silent).unwrap();
    assert!(outcome.is_infeasible());
    assert!(outcome.solutions().is_empty());

    // floor(35 - 2) = 33: feasible, even if nothing is found
    let outcome = CombinationSearch::new(bounds(30.0, 35.0))
        .run(&mut Silent)
        .unwrap();
    assert!(!outcome.is_infeasible());
}

#[test]
fn infeasibility_uses_module_floor() {
    // With m ≥ 2, 80 mm holds at most 38 ring teeth; 3·15 = 45 needed.
    let b = SearchBounds::builder()
        .outside_diameter(70.0, 80.0)
        .min_module(2.0)
        .min_teeth(15)
        .build()
        .unwrap();
    match CombinationSearch::new(b).run(&mut Silent).unwrap() {
        SearchOutcome::Infeasible(why) => {
            assert_eq!(why.max_ring_teeth, 38);
            assert_eq!(why.min_ring_teeth, 45);
        }
        SearchOutcome::Completed(_) => panic!("expected infeasible bounds"),
    }
}

#[test]
fn widening_max_diameter_never_removes_solutions() {
    let narrow = raw_solutions(bounds(80.0, 80.3));
    let wide = raw_solutions(bounds(80.0, 81.0));
    assert!(wide.len() >= narrow.len());
    for s in &narrow {
        assert!(wide.contains(s), "lost when widening max_od: {s}");
    }
}

#[test]
fn widening_ratio_window_never_removes_solutions() {
    let narrow_bounds = SearchBounds::builder()
        .outside_diameter(100.0, 100.5)
        .ratio(45.0, 55.0)
        .build()
        .unwrap();
    let wide_bounds = SearchBounds::builder()
        .outside_diameter(100.0, 100.5)
        .ratio(40.0, 60.0)
        .build()
        .unwrap();
    let narrow = raw_solutions(narrow_bounds);
    let wide = raw_solutions(wide_bounds);
    assert!(!narrow.is_empty());
    for s in &narrow {
        assert!(s.gear_ratio >= 45.0 && s.gear_ratio <= 55.0);
        assert!(wide.contains(s), "lost when widening the ratio window: {s}");
    }
}

#[test]
fn planet_range_restricts_results() {
    let b = SearchBounds::builder()
        .outside_diameter(100.0, 100.5)
        .planets(4, 4)
        .build()
        .unwrap();
    let raw = raw_solutions(b);
    assert!(!raw.is_empty());
    assert!(raw.iter().all(|s| s.planet_count == 4));
}

#[test]
fn unbounded_ratio_window_keeps_every_solution() {
    let narrow = raw_solutions(bounds(80.0, 80.1));
    let wide_bounds = SearchBounds::builder()
        .outside_diameter(80.0, 80.1)
        .ratio(40.0, 1e300)
        .build()
        .unwrap();
    let wide = raw_solutions(wide_bounds.clone());
    assert!(wide.len() >= narrow.len());
    for s in &narrow {
        assert!(wide.contains(s), "lost with an unbounded ratio window: {s}");
    }
    for s in &wide {
        assert_solution_valid(s, &wide_bounds);
    }
}
