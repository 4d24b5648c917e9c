use std::fs;

use dx_model::Axis;
use dx_standards::{Catalog, StandardsError};

#[test]
fn override_replaces_usage_set() {
    let catalog = Catalog::from_toml_str(
        r#"
        [[sets]]
        axis = "usage"
        kind = "multi"
        columns = ["q4_01", "q4_02", "q4_03"]
        labels = { q4_01 = "Email", q4_02 = "Banking" }
        "#,
    )
    .expect("parse catalog");
    let usage = catalog.indicator_set(Axis::Usage).expect("usage set");
    assert_eq!(usage.columns(), ["q4_01", "q4_02", "q4_03"].map(String::from));
    assert_eq!(usage.label("q4_02"), "Banking");
    // Unlabelled columns are their own label.
    assert_eq!(usage.label("q4_03"), "q4_03");
    // Other axes keep the built-in tables.
    assert_eq!(catalog.label(Axis::Device, "q1_07"), "Smartphone");
}

#[test]
fn dataset_section_overrides_columns_and_adds_aliases() {
    let catalog = Catalog::from_toml_str(
        r#"
        [dataset]
        region_column = " region "
        affirmative = "Y"

        [dataset.region_aliases]
        "North East England" = "North East"
        "#,
    )
    .expect("parse catalog");
    assert_eq!(catalog.dataset.region_column, "region");
    assert_eq!(catalog.dataset.age_column, "cage2");
    assert_eq!(catalog.dataset.affirmative, "Y");
    let aliases = &catalog.dataset.region_aliases;
    assert_eq!(aliases.canonical("North East England"), "north east");
    assert_eq!(aliases.canonical("Eastern"), "east of england");
}

#[test]
fn single_set_with_order() {
    let catalog = Catalog::from_toml_str(
        r#"
        [[sets]]
        axis = "age"
        kind = "single"
        columns = ["age_band"]
        labels = { "16 to 24" = "16-24", "25 plus" = "25+" }
        order = ["16-24", "25+"]
        "#,
    )
    .expect("parse catalog");
    assert_eq!(
        catalog.domain_order(Axis::Age),
        Some(["16-24".to_string(), "25+".to_string()].as_slice())
    );
    assert_eq!(catalog.label(Axis::Age, "16 TO 24"), "16-24");
}

#[test]
fn single_set_needs_one_column() {
    let error = Catalog::from_toml_str(
        r#"
        [[sets]]
        axis = "health"
        kind = "single"
        columns = ["q3", "q4"]
        "#,
    )
    .expect_err("two columns");
    assert!(matches!(
        error,
        StandardsError::InvalidSet {
            axis: Axis::Health,
            ..
        }
    ));
}

#[test]
fn ordinal_override_without_order_is_rejected() {
    let error = Catalog::from_toml_str(
        r#"
        [[sets]]
        axis = "age"
        kind = "single"
        columns = ["cage2"]
        "#,
    )
    .expect_err("age without order");
    assert!(matches!(
        error,
        StandardsError::InvalidSet { axis: Axis::Age, .. }
    ));
}

#[test]
fn ordinal_override_must_be_single_valued() {
    let error = Catalog::from_toml_str(
        r#"
        [[sets]]
        axis = "income"
        kind = "multi"
        columns = ["q11_a", "q11_b"]
        order = ["Low", "High"]
        "#,
    )
    .expect_err("multi income");
    assert!(matches!(
        error,
        StandardsError::InvalidSet {
            axis: Axis::Income,
            ..
        }
    ));
}

#[test]
fn duplicate_axis_is_rejected() {
    let error = Catalog::from_toml_str(
        r#"
        [[sets]]
        axis = "device"
        kind = "multi"
        columns = ["a"]

        [[sets]]
        axis = "device"
        kind = "multi"
        columns = ["b"]
        "#,
    )
    .expect_err("duplicate");
    assert!(matches!(
        error,
        StandardsError::DuplicateSet { axis: Axis::Device }
    ));
}

#[test]
fn unknown_axis_is_a_parse_error() {
    let error = Catalog::from_toml_str(
        r#"
        [[sets]]
        axis = "weather"
        kind = "multi"
        columns = ["a"]
        "#,
    )
    .expect_err("unknown axis");
    assert!(matches!(error, StandardsError::Toml { .. }));
}

#[test]
fn loads_from_disk_and_reports_missing_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("catalog.toml");
    fs::write(&path, "[dataset]\nage_column = \"age\"\n").expect("write catalog");
    let catalog = Catalog::load(&path).expect("load catalog");
    assert_eq!(catalog.dataset.age_column, "age");

    let missing = Catalog::load(&dir.path().join("absent.toml")).expect_err("missing");
    assert!(matches!(missing, StandardsError::Io { .. }));
}
