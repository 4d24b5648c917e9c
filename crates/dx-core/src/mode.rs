//! Mode-filtered access to a summary.

use dx_model::{Axis, BarDatum, CrossTabGrid, Mode, RegionCounts, Summary};

use crate::query::{cross_tab_axes, domain, lookup_by_region, resolve_selector};
use crate::views::bar_series;

/// A summary seen through one [`Mode`].
///
/// The indicator axis the mode does not select behaves as if it were
/// absent: empty domain, no counts. Both indicator sets stay aggregated,
/// so switching mode is a new view, not a re-scan.
#[derive(Debug, Clone, Copy)]
pub struct ModeView<'a> {
    summary: &'a Summary,
    mode: Mode,
}

impl<'a> ModeView<'a> {
    pub fn new(summary: &'a Summary, mode: Mode) -> Self {
        Self { summary, mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn indicator_axis(&self) -> Axis {
        self.mode.indicator_axis()
    }

    /// `axis` if the mode exposes it.
    pub fn visible(&self, axis: Axis) -> Option<Axis> {
        self.mode.exposes(axis).then_some(axis)
    }

    /// Axes available for selection, in display order.
    pub fn axes(&self) -> Vec<Axis> {
        Axis::ALL
            .into_iter()
            .filter(|axis| self.mode.exposes(*axis) && self.summary.has_axis(*axis))
            .collect()
    }

    pub fn domain(&self, axis: Axis) -> Vec<String> {
        match self.visible(axis) {
            Some(axis) => domain(self.summary, axis),
            None => Vec::new(),
        }
    }

    /// Choropleth counts for a bucket of the active indicator axis.
    pub fn lookup_by_region(&self, bucket: &str, age: Option<&str>) -> RegionCounts {
        lookup_by_region(self.summary, self.indicator_axis(), bucket, age)
    }

    pub fn cross_tab(&self, region: &str, x: Axis, y: Axis) -> CrossTabGrid {
        cross_tab_axes(self.summary, region, self.visible(x), self.visible(y))
    }

    pub fn cross_tab_by_name(&self, region: &str, x: &str, y: &str) -> CrossTabGrid {
        let x = resolve_selector(x).and_then(|axis| self.visible(axis));
        let y = resolve_selector(y).and_then(|axis| self.visible(axis));
        cross_tab_axes(self.summary, region, x, y)
    }

    pub fn bar_series(&self, region: &str, axis: Axis) -> Vec<BarDatum> {
        match self.visible(axis) {
            Some(axis) => bar_series(self.summary, region, axis),
            None => Vec::new(),
        }
    }
}
