//! Records handed to rendering adapters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::axis::Axis;

/// Normalized region key to count, for choropleth coloring.
pub type RegionCounts = BTreeMap<String, u64>;

/// One flattened summary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRecord {
    pub region: String,
    pub axis: Axis,
    /// Display label of the bucket on `axis`.
    pub category: String,
    /// Normalized age band of the contributing rows.
    pub age: String,
    pub count: u64,
}

/// One bar in a per-region bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarDatum {
    pub category: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossTabCell {
    pub x: String,
    pub y: String,
    pub count: u64,
}

/// Dense two-axis grid for one region.
///
/// `cells` holds exactly `x_domain.len() * y_domain.len()` entries, x-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossTabGrid {
    pub region: String,
    pub x_domain: Vec<String>,
    pub y_domain: Vec<String>,
    pub cells: Vec<CrossTabCell>,
}

impl CrossTabGrid {
    pub fn cell(&self, x: &str, y: &str) -> Option<&CrossTabCell> {
        self.cells.iter().find(|cell| cell.x == x && cell.y == y)
    }

    pub fn max_count(&self) -> u64 {
        self.cells.iter().map(|cell| cell.count).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Fill value for one map feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionShade {
    /// Region name as it appears on the feature.
    pub feature: String,
    /// Summary region key the feature reconciled to.
    pub region: String,
    pub count: u64,
}

/// Per-feature values plus the color-scale extent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoroplethFill {
    pub shades: Vec<RegionShade>,
    pub min: u64,
    pub max: u64,
}

/// Current map filter, owned by the caller and passed in on each query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoroplethSelection {
    pub axis: Axis,
    /// Bucket label, e.g. `Smartphone`.
    pub bucket: String,
    /// Optional age band qualifier, e.g. `65+`.
    pub age: Option<String>,
}

/// Current heatmap axes, owned by the caller and passed in on each query.
///
/// Axis names stay strings here because they arrive straight from a
/// selector; the query layer resolves them leniently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapSelection {
    pub region: String,
    pub x: String,
    pub y: String,
}
