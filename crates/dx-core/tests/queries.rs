//! Tests for lookups, cross-tabulation and bar series.

use dx_core::{bar_series, build_summary, cross_tab, cross_tab_by_name, domain, lookup_by_region};
use dx_model::{Axis, Summary, SurveyRow};
use dx_standards::Catalog;
use proptest::prelude::*;

fn row(pairs: &[(&str, &str)]) -> SurveyRow {
    SurveyRow::from_pairs(pairs.iter().copied())
}

fn sample_summary() -> Summary {
    let rows = vec![
        row(&[("brk_government_region", "Wales"), ("cage2", "16-24"), ("q1_05", "Yes"), ("q1_07", "Yes")]),
        row(&[("brk_government_region", "Wales"), ("cage2", "16-24"), ("q1_05", "No"), ("q1_07", "Yes")]),
        row(&[("brk_government_region", "Wales"), ("cage2", "65+"), ("q1_05", "Yes"), ("q1_07", "No")]),
        row(&[("brk_government_region", "Scotland"), ("cage2", "25-34"), ("q1_05", "Yes"), ("q1_07", "Yes")]),
        row(&[("brk_government_region", "East of England"), ("cage2", "25-34"), ("q1_05", "No"), ("q1_07", "Yes")]),
    ];
    build_summary(&rows, &Catalog::builtin())
}

#[test]
fn lookup_counts_every_region_with_the_axis() {
    let summary = sample_summary();
    let counts = lookup_by_region(&summary, Axis::Device, "Laptop", None);
    assert_eq!(counts.get("wales"), Some(&2));
    assert_eq!(counts.get("scotland"), Some(&1));
    assert_eq!(counts.get("east of england"), Some(&0));
}

#[test]
fn lookup_with_age_qualifier_normalizes_the_band() {
    let summary = sample_summary();
    let counts = lookup_by_region(&summary, Axis::Device, "Smartphone", Some(" 16-24 "));
    assert_eq!(counts.get("wales"), Some(&2));
    assert_eq!(counts.get("scotland"), Some(&0));
}

#[test]
fn lookup_of_unseen_bucket_is_all_zero() {
    let summary = sample_summary();
    let counts = lookup_by_region(&summary, Axis::Device, "Wearable jetpack", None);
    assert!(counts.values().all(|count| *count == 0));
    assert!(lookup_by_region(&Summary::new(), Axis::Device, "Laptop", None).is_empty());
}

#[test]
fn age_domain_is_fixed_and_complete() {
    let summary = sample_summary();
    assert_eq!(
        domain(&summary, Axis::Age),
        vec!["16-24", "25-34", "35-44", "45-54", "55-64", "65+"]
    );
}

#[test]
fn age_self_cross_has_marginals_on_the_diagonal() {
    let summary = sample_summary();
    let grid = cross_tab(&summary, "Wales", Axis::Age, Axis::Age);
    assert_eq!(grid.cells.len(), 36);
    assert_eq!(grid.cell("16-24", "16-24").map(|c| c.count), Some(2));
    assert_eq!(grid.cell("65+", "65+").map(|c| c.count), Some(1));
    assert_eq!(grid.cell("16-24", "65+").map(|c| c.count), Some(0));
    assert_eq!(grid.cell("35-44", "35-44").map(|c| c.count), Some(0));
}

#[test]
fn cross_axis_cells_use_the_smaller_marginal() {
    let summary = sample_summary();
    let grid = cross_tab(&summary, "wales", Axis::Age, Axis::Device);
    assert_eq!(grid.cell("16-24", "Laptop").map(|c| c.count), Some(2));
    assert_eq!(grid.cell("65+", "Laptop").map(|c| c.count), Some(1));
    assert_eq!(grid.cell("65+", "Smartphone").map(|c| c.count), Some(1));
    assert_eq!(grid.region, "wales");
}

#[test]
fn unknown_region_gives_a_zero_grid() {
    let summary = sample_summary();
    let grid = cross_tab(&summary, "Narnia", Axis::Age, Axis::Device);
    assert!(!grid.is_empty());
    assert_eq!(grid.max_count(), 0);
}

#[test]
fn unknown_axis_name_gives_an_empty_grid() {
    let summary = sample_summary();
    let grid = cross_tab_by_name(&summary, "wales", "age", "shoe size");
    assert!(grid.is_empty());
    assert_eq!(grid.x_domain.len(), 6);
}

#[test]
fn bar_series_covers_the_domain() {
    let summary = sample_summary();
    let bars = bar_series(&summary, "Scotland", Axis::Age);
    assert_eq!(bars.len(), 6);
    let values: Vec<u64> = bars.iter().map(|bar| bar.value).collect();
    assert_eq!(values, vec![0, 1, 0, 0, 0, 0]);
}

proptest! {
    #[test]
    fn grids_are_always_complete(
        x in prop::sample::select(Axis::ALL.to_vec()),
        y in prop::sample::select(Axis::ALL.to_vec()),
        region in prop::sample::select(vec!["wales", "Scotland", "nowhere"]),
    ) {
        let summary = sample_summary();
        let grid = cross_tab(&summary, region, x, y);
        prop_assert_eq!(grid.cells.len(), domain(&summary, x).len() * domain(&summary, y).len());
        prop_assert_eq!(&grid.x_domain, &domain(&summary, x));
        prop_assert_eq!(&grid.y_domain, &domain(&summary, y));
    }
}
