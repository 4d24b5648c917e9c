//! A loaded dataset with its summary, ready to answer view queries.

use tracing::{debug, info_span};

use dx_ingest::{Dataset, DatasetSource, RegionFeature, load_dataset};
use dx_model::{
    ChoroplethFill, ChoroplethSelection, CrossTabGrid, HeatmapSelection, Mode, Summary,
};
use dx_standards::Catalog;

use crate::aggregate::build_summary;
use crate::choropleth::shade_regions;
use crate::mode::ModeView;
use crate::query::lookup_by_region;

/// Summary, catalog and map features for one successful load.
///
/// There is no session for a failed load; [`Session::load`] returns the
/// load error instead.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    summary: Summary,
    headers: Vec<String>,
    features: Vec<RegionFeature>,
}

impl Session {
    /// Aggregates `dataset` once; rows are not kept.
    pub fn from_dataset(dataset: Dataset, catalog: Catalog) -> Self {
        let summary = build_summary(&dataset.rows, &catalog);
        Self {
            catalog,
            summary,
            headers: dataset.headers,
            features: dataset.features,
        }
    }

    pub fn load(source: &DatasetSource, catalog: Catalog) -> dx_ingest::Result<Self> {
        let dataset = load_dataset(source)?;
        Ok(Self::from_dataset(dataset, catalog))
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn features(&self) -> &[RegionFeature] {
        &self.features
    }

    pub fn view(&self, mode: Mode) -> ModeView<'_> {
        ModeView::new(&self.summary, mode)
    }

    /// Map fill for the current bucket and age selection.
    ///
    /// Without boundary features the survey's own region names stand in as
    /// features, so the fill still lists every region.
    pub fn choropleth(&self, selection: &ChoroplethSelection) -> ChoroplethFill {
        let span = info_span!("choropleth", axis = %selection.axis, bucket = %selection.bucket);
        let _guard = span.enter();
        let counts = lookup_by_region(
            &self.summary,
            selection.axis,
            &selection.bucket,
            selection.age.as_deref(),
        );
        let aliases = &self.catalog.dataset.region_aliases;
        let fill = if self.features.is_empty() {
            shade_regions(
                self.summary.regions.values().map(|region| region.name.as_str()),
                &counts,
                aliases,
            )
        } else {
            shade_regions(
                self.features.iter().map(|feature| feature.name.as_str()),
                &counts,
                aliases,
            )
        };
        debug!(shades = fill.shades.len(), min = fill.min, max = fill.max, "choropleth filled");
        fill
    }

    /// Heatmap grid for the selected region and axes under `mode`.
    pub fn heatmap(&self, selection: &HeatmapSelection, mode: Mode) -> CrossTabGrid {
        self.view(mode)
            .cross_tab_by_name(&selection.region, &selection.x, &selection.y)
    }
}
