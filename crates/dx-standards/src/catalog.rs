#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::Path;

use dx_model::Axis;
use dx_normalization::{AFFIRMATIVE_TOKEN, RegionAliases};
use tracing::debug;

use crate::builtin::{
    AGE_BANDS, AGE_COLUMN, DEVICES, HEALTH_CONDITIONS, INCOME_BANDS, INCOME_COLUMN, INCOME_ORDER,
    REGION_COLUMN, USAGE_REASONS,
};
use crate::config::CatalogFile;
use crate::error::{Result, StandardsError};
use crate::indicator::{IndicatorKind, IndicatorSet};

/// Where the shared row dimensions live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetColumns {
    pub region_column: String,
    pub age_column: String,
    /// Cell text that marks a yes/no indicator column as present.
    pub affirmative: String,
    pub region_aliases: RegionAliases,
}

impl Default for DatasetColumns {
    fn default() -> Self {
        Self {
            region_column: REGION_COLUMN.to_string(),
            age_column: AGE_COLUMN.to_string(),
            affirmative: AFFIRMATIVE_TOKEN.to_string(),
            region_aliases: RegionAliases::default(),
        }
    }
}

/// Static label and domain tables for every configured axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub dataset: DatasetColumns,
    sets: BTreeMap<Axis, IndicatorSet>,
}

impl Catalog {
    /// A catalog with dataset columns but no indicator sets.
    pub fn empty(dataset: DatasetColumns) -> Self {
        Self {
            dataset,
            sets: BTreeMap::new(),
        }
    }

    /// The survey's built-in code tables.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty(DatasetColumns::default());
        for set in builtin_sets() {
            catalog.insert(set);
        }
        catalog
    }

    /// Parses catalog overrides and applies them on top of [`Catalog::builtin`].
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::parse(text, Path::new("<inline>"))
    }

    /// Reads catalog overrides from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, origin: &Path) -> Result<Self> {
        let file: CatalogFile = toml::from_str(text).map_err(|source| StandardsError::Toml {
            path: origin.to_path_buf(),
            source,
        })?;
        let mut catalog = Self::builtin();
        file.apply(&mut catalog, origin)?;
        debug!(
            origin = %origin.display(),
            sets = catalog.sets.len(),
            "catalog overrides applied"
        );
        Ok(catalog)
    }

    /// Adds or replaces the set for its axis.
    pub fn insert(&mut self, set: IndicatorSet) {
        self.sets.insert(set.axis, set);
    }

    #[must_use]
    pub fn with_set(mut self, set: IndicatorSet) -> Self {
        self.insert(set);
        self
    }

    pub fn indicator_set(&self, axis: Axis) -> Option<&IndicatorSet> {
        self.sets.get(&axis)
    }

    pub fn sets(&self) -> impl Iterator<Item = &IndicatorSet> {
        self.sets.values()
    }

    /// Display label for `key` on `axis`; misses return `key` unchanged,
    /// including for axes the catalog does not define.
    pub fn label<'a>(&'a self, axis: Axis, key: &'a str) -> &'a str {
        match self.sets.get(&axis) {
            Some(set) => set.label(key),
            None => key,
        }
    }

    /// Fixed display order for ordinal axes; `None` when the order comes
    /// from the data.
    pub fn domain_order(&self, axis: Axis) -> Option<&[String]> {
        self.sets.get(&axis).and_then(IndicatorSet::order)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_sets() -> Vec<IndicatorSet> {
    let mut sets = vec![
        IndicatorSet::from_table(
            Axis::Age,
            single_column(AGE_COLUMN),
            AGE_BANDS.iter().map(|band| (*band, *band)),
        )
        .with_order(AGE_BANDS.iter().copied()),
        IndicatorSet::from_table(
            Axis::Income,
            single_column(INCOME_COLUMN),
            INCOME_BANDS.iter().copied(),
        )
        .with_order(INCOME_ORDER.iter().copied()),
    ];
    for (axis, table) in [
        (Axis::Health, HEALTH_CONDITIONS),
        (Axis::Device, DEVICES),
        (Axis::Usage, USAGE_REASONS),
    ] {
        let columns = table.iter().map(|(column, _)| (*column).to_string()).collect();
        sets.push(IndicatorSet::from_table(
            axis,
            IndicatorKind::Multi { columns },
            table.iter().copied(),
        ));
    }
    sets
}

fn single_column(column: &str) -> IndicatorKind {
    IndicatorKind::Single {
        column: column.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_defines_every_axis() {
        let catalog = Catalog::builtin();
        for axis in Axis::ALL {
            assert!(catalog.indicator_set(axis).is_some(), "missing {axis}");
        }
    }

    #[test]
    fn builtin_tables_pass_set_validation() {
        let catalog = Catalog::builtin();
        let age = IndicatorSet::single(
            Axis::Age,
            AGE_COLUMN,
            AGE_BANDS.iter().map(|band| (*band, *band)),
        )
        .expect("age table")
        .with_order(AGE_BANDS.iter().copied());
        assert_eq!(catalog.indicator_set(Axis::Age), Some(&age));
        let income = IndicatorSet::single(Axis::Income, INCOME_COLUMN, INCOME_BANDS.iter().copied())
            .expect("income table")
            .with_order(INCOME_ORDER.iter().copied());
        assert_eq!(catalog.indicator_set(Axis::Income), Some(&income));
        for (axis, table) in [
            (Axis::Health, HEALTH_CONDITIONS),
            (Axis::Device, DEVICES),
            (Axis::Usage, USAGE_REASONS),
        ] {
            let set = IndicatorSet::multi(axis, table.iter().copied()).expect("multi table");
            assert_eq!(catalog.indicator_set(axis), Some(&set), "{axis}");
        }
    }

    #[test]
    fn ordinal_axes_have_fixed_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.domain_order(Axis::Age).map(<[String]>::len),
            Some(AGE_BANDS.len())
        );
        assert_eq!(
            catalog.domain_order(Axis::Income).map(<[String]>::len),
            Some(INCOME_ORDER.len())
        );
        assert!(catalog.domain_order(Axis::Health).is_none());
        assert!(catalog.domain_order(Axis::Device).is_none());
    }

    #[test]
    fn unknown_code_is_its_own_label() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.label(Axis::Device, "q9_99"), "q9_99");
        assert_eq!(catalog.label(Axis::Device, "q1_07"), "Smartphone");
    }

    #[test]
    fn damaged_pound_sign_maps_to_same_band() {
        let catalog = Catalog::builtin();
        let clean = catalog.label(
            Axis::Income,
            "£200 to £299 per week / £10,400 to £15,599 per year",
        );
        let damaged = catalog.label(
            Axis::Income,
            "\u{FFFD}200 to \u{FFFD}299 per week / \u{FFFD}10,400 to \u{FFFD}15,599 per year",
        );
        assert_eq!(clean, "£10,400-£15,599");
        assert_eq!(clean, damaged);
    }

    #[test]
    fn every_income_label_is_in_the_order() {
        let catalog = Catalog::builtin();
        let set = catalog.indicator_set(Axis::Income).expect("income set");
        let order = set.order().expect("income order");
        for (_, label) in set.labels() {
            assert!(order.iter().any(|entry| entry == label), "{label} not ordered");
        }
    }
}
