//! Flat record and bar-chart projections of a summary.

use dx_model::{Axis, BarDatum, CountRecord, Summary};
use dx_normalization::normalize_key;

use crate::query::domain;

/// Flattens the summary into one record per (region, axis, category, age).
///
/// Buckets that share a display label are merged. Zero counts recorded at
/// aggregation time are kept. Rows without an age band contribute to
/// totals only, so they never appear here. Pass `None` to flatten every
/// axis.
pub fn flatten(summary: &Summary, axis: Option<Axis>) -> Vec<CountRecord> {
    let mut records: Vec<CountRecord> = Vec::new();
    for (region_key, region) in &summary.regions {
        for (current, tally) in &region.axes {
            if axis.is_some_and(|wanted| wanted != *current) {
                continue;
            }
            let Some(index) = summary.axis_index(*current) else {
                continue;
            };
            let start = records.len();
            for key in &index.observed {
                let Some(bucket) = tally.bucket(key) else {
                    continue;
                };
                let category = index.label(key);
                for (age, count) in &bucket.by_age {
                    let merged = records[start..]
                        .iter()
                        .position(|record| record.category == category && record.age == *age);
                    match merged {
                        Some(offset) => records[start + offset].count += count,
                        None => records.push(CountRecord {
                            region: region_key.clone(),
                            axis: *current,
                            category: category.to_string(),
                            age: age.clone(),
                            count: *count,
                        }),
                    }
                }
            }
        }
    }
    records
}

/// Per-category totals for one region, across the axis's full domain.
///
/// Categories the region never hit are present with zero. An unknown
/// region yields zeros; an axis absent from the summary yields nothing.
pub fn bar_series(summary: &Summary, region: &str, axis: Axis) -> Vec<BarDatum> {
    let region_key = normalize_key(region);
    let index = summary.axis_index(axis);
    let tally = summary
        .region(&region_key)
        .and_then(|region| region.axis(axis));
    domain(summary, axis)
        .into_iter()
        .map(|category| {
            let value = match (index, tally) {
                (Some(index), Some(tally)) => {
                    tally.count_of(index.keys_for_label(&category), None)
                }
                _ => 0,
            };
            BarDatum { category, value }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::build_summary;
    use dx_model::SurveyRow;
    use dx_standards::Catalog;

    #[test]
    fn same_label_in_two_regions_stays_separate() {
        let rows: Vec<SurveyRow> = ["Wales", "Scotland", "wales"]
            .into_iter()
            .map(|region| {
                SurveyRow::from_pairs([
                    ("brk_government_region", region),
                    ("cage2", "16-24"),
                    ("q1_05", "Yes"),
                ])
            })
            .collect();
        let summary = build_summary(&rows, &Catalog::builtin());
        let records = flatten(&summary, Some(Axis::Device));
        let counts: Vec<(&str, &str, u64)> = records
            .iter()
            .map(|record| (record.region.as_str(), record.category.as_str(), record.count))
            .collect();
        assert_eq!(counts, vec![("scotland", "Laptop", 1), ("wales", "Laptop", 2)]);
    }
}
