//! Nested region × axis × bucket counts.
//!
//! A [`Summary`] is built once per dataset load and never mutated after
//! construction. Every map key in here is already normalized (trimmed,
//! lower-cased) by the aggregation engine, so readers must normalize their
//! lookup keys the same way.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::axis::Axis;

/// How many buckets a single row may contribute to on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketKind {
    /// One logical value per row (age band, income band).
    Single,
    /// One yes/no column per bucket; a row may hit several.
    Multi,
}

/// Count for one bucket, with the age band of each contributing row kept
/// as a secondary dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketTally {
    pub total: u64,
    pub by_age: BTreeMap<String, u64>,
}

impl BucketTally {
    /// Records one row's contribution. A miss still registers the age band
    /// with a zero count so the bucket shows up in flattened output.
    pub fn observe(&mut self, age: Option<&str>, hit: bool) {
        let increment = u64::from(hit);
        self.total += increment;
        if let Some(age) = age {
            *self.by_age.entry(age.to_string()).or_insert(0) += increment;
        }
    }

    /// Total count, or the per-age count when `age` is given.
    pub fn count(&self, age: Option<&str>) -> u64 {
        match age {
            Some(age) => self.by_age.get(age).copied().unwrap_or(0),
            None => self.total,
        }
    }
}

/// Bucket counts for one axis within one region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTally {
    /// Rows from this region scanned for the axis.
    pub respondents: u64,
    pub buckets: BTreeMap<String, BucketTally>,
}

impl AxisTally {
    pub fn bucket(&self, key: &str) -> Option<&BucketTally> {
        self.buckets.get(key)
    }

    /// Sum of the counts of every bucket in `keys`.
    pub fn count_of<'a>(&self, keys: impl IntoIterator<Item = &'a str>, age: Option<&str>) -> u64 {
        keys.into_iter()
            .filter_map(|key| self.buckets.get(key))
            .map(|tally| tally.count(age))
            .sum()
    }
}

/// Dataset-wide metadata for one axis: labels and domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisIndex {
    pub kind: BucketKind,
    /// Bucket key to display label, resolved once at aggregation time.
    pub labels: BTreeMap<String, String>,
    /// Bucket keys seen in the data, in a stable order.
    pub observed: Vec<String>,
    /// Fixed display order of labels for ordinal axes.
    pub order: Option<Vec<String>>,
}

impl AxisIndex {
    pub fn new(kind: BucketKind, order: Option<Vec<String>>) -> Self {
        Self {
            kind,
            labels: BTreeMap::new(),
            observed: Vec::new(),
            order,
        }
    }

    /// Display label for a bucket key; unmapped keys are their own label.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.get(key).map_or(key, String::as_str)
    }

    /// The full ordered set of labels this axis is drawn over.
    ///
    /// The fixed order wins when present; otherwise the observed keys'
    /// labels, de-duplicated, in observation order.
    pub fn domain(&self) -> Vec<String> {
        if let Some(order) = &self.order {
            return order.clone();
        }
        let mut domain: Vec<String> = Vec::with_capacity(self.observed.len());
        for key in &self.observed {
            let label = self.label(key);
            if !domain.iter().any(|existing| existing == label) {
                domain.push(label.to_string());
            }
        }
        domain
    }

    /// Every observed bucket key whose label is `label`.
    pub fn keys_for_label<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.observed
            .iter()
            .map(String::as_str)
            .filter(move |key| self.label(key) == label)
    }
}

/// Aggregation output for a single indicator set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialSummary {
    pub axis: Axis,
    pub index: AxisIndex,
    pub regions: BTreeMap<String, AxisTally>,
    /// Normalized region key to the first raw spelling seen.
    pub region_names: BTreeMap<String, String>,
}

/// All axes for one region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub name: String,
    pub respondents: u64,
    pub axes: BTreeMap<Axis, AxisTally>,
}

impl RegionSummary {
    pub fn axis(&self, axis: Axis) -> Option<&AxisTally> {
        self.axes.get(&axis)
    }
}

/// Region → axis → bucket → count, plus per-axis label/domain metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub regions: BTreeMap<String, RegionSummary>,
    pub axes: BTreeMap<Axis, AxisIndex>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one indicator set's counts in, replacing any earlier
    /// aggregation of the same axis.
    pub fn insert(&mut self, partial: PartialSummary) {
        let PartialSummary {
            axis,
            index,
            regions,
            region_names,
        } = partial;
        for region in self.regions.values_mut() {
            region.axes.remove(&axis);
        }
        for (key, tally) in regions {
            let entry = self.regions.entry(key.clone()).or_default();
            if entry.name.is_empty() {
                entry.name = region_names.get(&key).cloned().unwrap_or(key);
            }
            entry.respondents = entry.respondents.max(tally.respondents);
            entry.axes.insert(axis, tally);
        }
        self.axes.insert(axis, index);
    }

    pub fn region(&self, key: &str) -> Option<&RegionSummary> {
        self.regions.get(key)
    }

    pub fn axis_index(&self, axis: Axis) -> Option<&AxisIndex> {
        self.axes.get(&axis)
    }

    pub fn has_axis(&self, axis: Axis) -> bool {
        self.axes.contains_key(&axis)
    }

    pub fn region_keys(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Total rows seen across regions.
    pub fn respondents(&self) -> u64 {
        self.regions.values().map(|region| region.respondents).sum()
    }
}
