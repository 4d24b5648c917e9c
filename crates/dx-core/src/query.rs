//! Read-only queries over a built [`Summary`].
//!
//! Queries take display labels (what a user picked from a legend or a
//! dropdown) and resolve them to bucket keys through the axis index.
//! Region and age arguments are normalized here, the same way the
//! aggregation engine normalized them.

use tracing::warn;

use dx_model::{
    Axis, AxisIndex, AxisTally, BucketKind, CrossTabCell, CrossTabGrid, RegionCounts, Summary,
};
use dx_normalization::normalize_key;

/// Ordered labels of `axis`; empty when the summary does not carry it.
pub fn domain(summary: &Summary, axis: Axis) -> Vec<String> {
    summary
        .axis_index(axis)
        .map(AxisIndex::domain)
        .unwrap_or_default()
}

/// Bucket keys a user-facing bucket name refers to.
///
/// Exact label matches win. Failing that, the name is compared
/// case-insensitively against labels, then against raw bucket keys, so a
/// column code such as `q1_07` selects its bucket too.
pub fn bucket_keys<'a>(index: &'a AxisIndex, bucket: &str) -> Vec<&'a str> {
    let exact: Vec<&str> = index
        .observed
        .iter()
        .map(String::as_str)
        .filter(|key| index.label(key) == bucket)
        .collect();
    if !exact.is_empty() {
        return exact;
    }
    let wanted = normalize_key(bucket);
    let by_label: Vec<&str> = index
        .observed
        .iter()
        .map(String::as_str)
        .filter(|key| normalize_key(index.label(key)) == wanted)
        .collect();
    if !by_label.is_empty() {
        return by_label;
    }
    index
        .observed
        .iter()
        .map(String::as_str)
        .filter(|key| *key == wanted)
        .collect()
}

/// Count of one bucket in every region, optionally narrowed to one age band.
///
/// Every region that carries `axis` appears in the result, with zero when
/// the bucket was never hit there. Unknown buckets therefore yield all
/// zeros, and an axis missing from the summary yields an empty map.
pub fn lookup_by_region(
    summary: &Summary,
    axis: Axis,
    bucket: &str,
    age: Option<&str>,
) -> RegionCounts {
    let mut counts = RegionCounts::new();
    let Some(index) = summary.axis_index(axis) else {
        return counts;
    };
    let keys = bucket_keys(index, bucket);
    let age = age.map(normalize_key);
    for (region_key, region) in &summary.regions {
        if let Some(tally) = region.axis(axis) {
            let count = tally.count_of(keys.iter().copied(), age.as_deref());
            counts.insert(region_key.clone(), count);
        }
    }
    counts
}

/// One side of a cross-tabulation: an axis's domain plus the region's
/// marginal count for each label.
struct Side<'a> {
    axis: Option<Axis>,
    kind: Option<BucketKind>,
    index: Option<&'a AxisIndex>,
    tally: Option<&'a AxisTally>,
    domain: Vec<String>,
}

impl<'a> Side<'a> {
    fn new(summary: &'a Summary, region: &str, axis: Option<Axis>) -> Self {
        let index = axis.and_then(|axis| summary.axis_index(axis));
        let tally = match (axis, summary.region(region)) {
            (Some(axis), Some(region)) => region.axis(axis),
            _ => None,
        };
        Self {
            axis,
            kind: index.map(|index| index.kind),
            index,
            tally,
            domain: index.map(AxisIndex::domain).unwrap_or_default(),
        }
    }

    fn marginal(&self, label: &str) -> u64 {
        match (self.index, self.tally) {
            (Some(index), Some(tally)) => tally.count_of(index.keys_for_label(label), None),
            _ => 0,
        }
    }
}

/// Pairwise grid of approximate joint counts for one region.
///
/// The summary holds marginals only, so an off-diagonal cell is the
/// smaller of the two marginals. Crossing an axis with itself gives each
/// bucket's own count on the diagonal, and zero between distinct buckets
/// of a single-valued axis since no row can sit in both. Ordinal axes
/// keep their fixed domain, so absent bands appear with zero counts.
pub fn cross_tab(summary: &Summary, region: &str, x: Axis, y: Axis) -> CrossTabGrid {
    cross_tab_axes(summary, region, Some(x), Some(y))
}

/// [`cross_tab`] over axis selectors as typed by a user.
///
/// An unrecognized selector is an empty domain for that side, which makes
/// the whole grid empty.
pub fn cross_tab_by_name(summary: &Summary, region: &str, x: &str, y: &str) -> CrossTabGrid {
    cross_tab_axes(summary, region, resolve_selector(x), resolve_selector(y))
}

pub(crate) fn resolve_selector(selector: &str) -> Option<Axis> {
    let axis = Axis::from_selector(selector);
    if axis.is_none() {
        warn!(selector, "unknown axis selector; treating as an empty domain");
    }
    axis
}

pub(crate) fn cross_tab_axes(
    summary: &Summary,
    region: &str,
    x: Option<Axis>,
    y: Option<Axis>,
) -> CrossTabGrid {
    let region = normalize_key(region);
    let x_side = Side::new(summary, &region, x);
    let y_side = Side::new(summary, &region, y);
    let same_axis = x_side.axis.is_some() && x_side.axis == y_side.axis;
    let exclusive = same_axis && x_side.kind == Some(BucketKind::Single);

    let mut cells = Vec::with_capacity(x_side.domain.len() * y_side.domain.len());
    for x_label in &x_side.domain {
        let x_count = x_side.marginal(x_label);
        for y_label in &y_side.domain {
            let count = if same_axis && x_label == y_label {
                x_count
            } else if exclusive {
                0
            } else {
                x_count.min(y_side.marginal(y_label))
            };
            cells.push(CrossTabCell {
                x: x_label.clone(),
                y: y_label.clone(),
                count,
            });
        }
    }

    CrossTabGrid {
        region,
        x_domain: x_side.domain,
        y_domain: y_side.domain,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dx_model::{BucketTally, PartialSummary};
    use std::collections::BTreeMap;

    fn partial(axis: Axis, kind: BucketKind, counts: &[(&str, &str, u64)]) -> PartialSummary {
        let mut index = AxisIndex::new(kind, None);
        let mut regions: BTreeMap<String, AxisTally> = BTreeMap::new();
        for (region, key, total) in counts {
            let tally = regions.entry((*region).to_string()).or_default();
            tally.respondents += total;
            tally.buckets.insert(
                (*key).to_string(),
                BucketTally {
                    total: *total,
                    by_age: BTreeMap::new(),
                },
            );
            if !index.observed.iter().any(|seen| seen.as_str() == *key) {
                index.observed.push((*key).to_string());
            }
        }
        PartialSummary {
            axis,
            index,
            regions,
            region_names: BTreeMap::new(),
        }
    }

    #[test]
    fn bucket_keys_fall_back_to_raw_codes() {
        let mut index = AxisIndex::new(BucketKind::Multi, None);
        index.observed = vec!["q1_05".to_string(), "q1_07".to_string()];
        index.labels.insert("q1_05".to_string(), "Laptop".to_string());
        assert_eq!(bucket_keys(&index, "Laptop"), vec!["q1_05"]);
        assert_eq!(bucket_keys(&index, "laptop"), vec!["q1_05"]);
        assert_eq!(bucket_keys(&index, "Q1_07"), vec!["q1_07"]);
        assert!(bucket_keys(&index, "Tablet").is_empty());
    }

    #[test]
    fn self_cross_of_single_axis_is_diagonal() {
        let mut summary = Summary::new();
        summary.insert(partial(
            Axis::Income,
            BucketKind::Single,
            &[("wales", "low", 4), ("wales", "high", 2)],
        ));
        let grid = cross_tab(&summary, "Wales", Axis::Income, Axis::Income);
        assert_eq!(grid.cell("low", "low").map(|c| c.count), Some(4));
        assert_eq!(grid.cell("low", "high").map(|c| c.count), Some(0));
        assert_eq!(grid.cell("high", "high").map(|c| c.count), Some(2));
    }

    #[test]
    fn self_cross_of_multi_axis_uses_min() {
        let mut summary = Summary::new();
        summary.insert(partial(
            Axis::Device,
            BucketKind::Multi,
            &[("wales", "a", 5), ("wales", "b", 3)],
        ));
        let grid = cross_tab(&summary, "wales", Axis::Device, Axis::Device);
        assert_eq!(grid.cell("a", "b").map(|c| c.count), Some(3));
        assert_eq!(grid.cell("a", "a").map(|c| c.count), Some(5));
    }

    #[test]
    fn unknown_selector_gives_empty_grid() {
        let mut summary = Summary::new();
        summary.insert(partial(Axis::Device, BucketKind::Multi, &[("wales", "a", 1)]));
        let grid = cross_tab_by_name(&summary, "wales", "device", "postcode");
        assert!(grid.is_empty());
        assert_eq!(grid.x_domain, vec!["a"]);
        assert!(grid.y_domain.is_empty());
    }
}
