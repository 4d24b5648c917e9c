//! Aggregation engine: respondent rows to nested region counts.
//!
//! One pass per indicator set, `O(rows × columns)`. Every later view reads
//! the resulting [`Summary`] instead of re-scanning rows.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::{debug, info, info_span, warn};

use dx_model::{AxisIndex, AxisTally, PartialSummary, Summary, SurveyRow};
use dx_normalization::{is_affirmative_token, normalize_key};
use dx_standards::{Catalog, DatasetColumns, IndicatorKind, IndicatorSet};

/// Counts one indicator set per region.
///
/// Rows without a region value are skipped. Missing indicator cells count
/// as not present. For multi-valued sets every column the row carries
/// registers its bucket, even when the answer is not affirmative, so
/// zero counts survive into flattened output.
pub fn aggregate(
    rows: &[SurveyRow],
    set: &IndicatorSet,
    dataset: &DatasetColumns,
) -> PartialSummary {
    let mut regions: BTreeMap<String, AxisTally> = BTreeMap::new();
    let mut region_names: BTreeMap<String, String> = BTreeMap::new();
    // Bucket key to the spelling used when the catalog has no label for it.
    let mut spellings: BTreeMap<String, String> = BTreeMap::new();
    let mut skipped = 0usize;

    for row in rows {
        let Some(raw_region) = row.get(&dataset.region_column) else {
            skipped += 1;
            continue;
        };
        let region = normalize_key(raw_region);
        if region.is_empty() {
            skipped += 1;
            continue;
        }
        region_names
            .entry(region.clone())
            .or_insert_with(|| raw_region.trim().to_string());
        let age = row
            .get(&dataset.age_column)
            .map(normalize_key)
            .filter(|age| !age.is_empty());
        let tally = regions.entry(region).or_default();
        tally.respondents += 1;

        match &set.kind {
            IndicatorKind::Single { column } => {
                let Some(raw) = row.get(column) else {
                    continue;
                };
                let key = normalize_key(raw);
                if key.is_empty() {
                    continue;
                }
                tally
                    .buckets
                    .entry(key.clone())
                    .or_default()
                    .observe(age.as_deref(), true);
                spellings
                    .entry(key)
                    .or_insert_with(|| raw.trim().to_string());
            }
            IndicatorKind::Multi { columns } => {
                for column in columns {
                    let Some(raw) = row.get(column) else {
                        continue;
                    };
                    let key = normalize_key(column);
                    let hit = is_affirmative_token(raw, &dataset.affirmative);
                    tally
                        .buckets
                        .entry(key.clone())
                        .or_default()
                        .observe(age.as_deref(), hit);
                    spellings.entry(key).or_insert_with(|| column.clone());
                }
            }
        }
    }

    if skipped > 0 {
        debug!(axis = %set.axis, skipped, "rows without a region value skipped");
    }

    PartialSummary {
        axis: set.axis,
        index: build_index(set, spellings),
        regions,
        region_names,
    }
}

/// Resolves labels once and fixes the observed-key order: catalog column
/// order for multi-valued sets, sorted keys otherwise.
fn build_index(set: &IndicatorSet, spellings: BTreeMap<String, String>) -> AxisIndex {
    let mut index = AxisIndex::new(set.bucket_kind(), set.order().map(<[String]>::to_vec));
    let observed: Vec<String> = match &set.kind {
        IndicatorKind::Multi { columns } => columns
            .iter()
            .map(|column| normalize_key(column))
            .filter(|key| spellings.contains_key(key))
            .collect(),
        IndicatorKind::Single { .. } => spellings.keys().cloned().collect(),
    };
    for key in &observed {
        let label = if set.has_label(key) {
            set.label(key).to_string()
        } else {
            spellings.get(key).cloned().unwrap_or_else(|| key.clone())
        };
        index.labels.insert(key.clone(), label);
    }
    index.observed = observed;
    index
}

/// Aggregates every indicator set in the catalog into one summary.
pub fn build_summary(rows: &[SurveyRow], catalog: &Catalog) -> Summary {
    let span = info_span!("aggregate", rows = rows.len());
    let _guard = span.enter();
    let start = Instant::now();

    if !rows.is_empty()
        && rows
            .iter()
            .all(|row| row.get(&catalog.dataset.region_column).is_none())
    {
        warn!(
            column = %catalog.dataset.region_column,
            "region column missing from every row; summary will be empty"
        );
    }

    let mut summary = Summary::new();
    for set in catalog.sets() {
        let partial = aggregate(rows, set, &catalog.dataset);
        debug!(
            axis = %set.axis,
            regions = partial.regions.len(),
            buckets = partial.index.observed.len(),
            "indicator set aggregated"
        );
        summary.insert(partial);
    }

    info!(
        regions = summary.regions.len(),
        axes = summary.axes.len(),
        respondents = summary.respondents(),
        duration_ms = start.elapsed().as_millis(),
        "summary built"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use dx_model::{Axis, BucketKind};

    fn row(pairs: &[(&str, &str)]) -> SurveyRow {
        SurveyRow::from_pairs(pairs.iter().copied())
    }

    fn device_set() -> IndicatorSet {
        IndicatorSet::multi(Axis::Device, [("q1_05", "Laptop"), ("q1_07", "Smartphone")])
            .expect("device set")
    }

    #[test]
    fn region_spellings_collapse_to_one_key() {
        let rows = [
            row(&[("brk_government_region", "Scotland"), ("cage2", "16-24"), ("q1_05", "Yes")]),
            row(&[("brk_government_region", "scotland "), ("cage2", "16-24"), ("q1_05", "No")]),
        ];
        let partial = aggregate(&rows, &device_set(), &DatasetColumns::default());
        assert_eq!(partial.regions.len(), 1);
        let tally = &partial.regions["scotland"];
        assert_eq!(tally.respondents, 2);
        assert_eq!(tally.buckets["q1_05"].total, 1);
        assert_eq!(tally.buckets["q1_05"].count(Some("16-24")), 1);
        assert_eq!(partial.region_names["scotland"], "Scotland");
        assert_eq!(partial.index.label("q1_05"), "Laptop");
    }

    #[test]
    fn absent_columns_register_nothing() {
        let rows = [row(&[("brk_government_region", "Wales"), ("q1_07", "no")])];
        let partial = aggregate(&rows, &device_set(), &DatasetColumns::default());
        let tally = &partial.regions["wales"];
        assert!(tally.bucket("q1_05").is_none());
        assert_eq!(tally.buckets["q1_07"].total, 0);
        assert_eq!(partial.index.observed, vec!["q1_07"]);
    }

    #[test]
    fn rows_without_region_are_skipped() {
        let rows = [
            row(&[("cage2", "65+"), ("q1_05", "Yes")]),
            row(&[("brk_government_region", "  "), ("q1_05", "Yes")]),
        ];
        let partial = aggregate(&rows, &device_set(), &DatasetColumns::default());
        assert!(partial.regions.is_empty());
    }

    #[test]
    fn single_valued_unmapped_value_keeps_its_spelling() {
        let set = IndicatorSet::single(Axis::Income, "q11", [("Don't know", "Don't know")])
            .expect("income set");
        let rows = [
            row(&[("brk_government_region", "London"), ("q11", " Don't Know ")]),
            row(&[("brk_government_region", "London"), ("q11", "Lottery win")]),
            row(&[("brk_government_region", "London"), ("q11", "")]),
        ];
        let partial = aggregate(&rows, &set, &DatasetColumns::default());
        assert_eq!(partial.index.kind, BucketKind::Single);
        assert_eq!(partial.index.label("don't know"), "Don't know");
        assert_eq!(partial.index.label("lottery win"), "Lottery win");
        let tally = &partial.regions["london"];
        assert_eq!(tally.respondents, 3);
        assert_eq!(tally.buckets.len(), 2);
    }

    #[test]
    fn configured_affirmative_token_is_honoured() {
        let dataset = DatasetColumns {
            affirmative: "Y".to_string(),
            ..DatasetColumns::default()
        };
        let rows = [row(&[("brk_government_region", "Wales"), ("q1_05", "y")])];
        let partial = aggregate(&rows, &device_set(), &dataset);
        assert_eq!(partial.regions["wales"].buckets["q1_05"].total, 1);
    }
}
