use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info_span};

use dx_core::Session;
use dx_ingest::DatasetSource;
use dx_model::{Axis, BucketKind, Summary};
use dx_standards::{Catalog, IndicatorKind};

/// Built-in catalog, or the built-in one with a TOML file's overrides.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            Catalog::load(path).with_context(|| format!("load catalog {}", path.display()))
        }
        None => Ok(Catalog::builtin()),
    }
}

/// Loads the survey (and any boundary files) and aggregates it.
pub fn open_session(
    survey: &Path,
    boundaries: &[PathBuf],
    region_property: &str,
    catalog: Catalog,
) -> Result<Session> {
    let span = info_span!("session", survey = %survey.display());
    let _guard = span.enter();
    let source = DatasetSource::new(survey)
        .with_boundaries(boundaries)
        .with_region_property(region_property);
    let session = Session::load(&source, catalog)
        .with_context(|| format!("load survey {}", survey.display()))?;
    debug!(
        regions = session.summary().regions.len(),
        features = session.features().len(),
        "session ready"
    );
    Ok(session)
}

/// One line of the `summary` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionOverview {
    pub region: String,
    pub respondents: u64,
    /// Sum of bucket counts per axis; multi-valued axes can exceed the
    /// respondent count.
    pub hits: BTreeMap<Axis, u64>,
}

pub fn region_overview(summary: &Summary) -> Vec<RegionOverview> {
    summary
        .regions
        .values()
        .map(|region| RegionOverview {
            region: region.name.clone(),
            respondents: region.respondents,
            hits: region
                .axes
                .iter()
                .map(|(axis, tally)| (*axis, tally.buckets.values().map(|b| b.total).sum()))
                .collect(),
        })
        .collect()
}

/// One row of the `catalog` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub axis: Axis,
    pub kind: BucketKind,
    pub column: String,
    /// Column code for multi-valued sets, normalized response text otherwise.
    pub key: String,
    pub label: String,
}

pub fn catalog_entries(catalog: &Catalog, axis: Option<Axis>) -> Vec<CatalogEntry> {
    let mut entries = Vec::new();
    for set in catalog.sets() {
        if axis.is_some_and(|wanted| wanted != set.axis) {
            continue;
        }
        match &set.kind {
            IndicatorKind::Multi { columns } => {
                entries.extend(columns.iter().map(|column| CatalogEntry {
                    axis: set.axis,
                    kind: BucketKind::Multi,
                    column: column.clone(),
                    key: column.clone(),
                    label: set.label(column).to_string(),
                }));
            }
            IndicatorKind::Single { column } => {
                entries.extend(set.labels().map(|(key, label)| CatalogEntry {
                    axis: set.axis,
                    kind: BucketKind::Single,
                    column: column.clone(),
                    key: key.to_string(),
                    label: label.to_string(),
                }));
            }
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use dx_ingest::Dataset;
    use dx_model::SurveyRow;

    #[test]
    fn overview_sums_bucket_hits() {
        let rows = vec![
            SurveyRow::from_pairs([
                ("brk_government_region", "Wales"),
                ("cage2", "16-24"),
                ("q1_05", "Yes"),
                ("q1_07", "Yes"),
            ]),
            SurveyRow::from_pairs([("brk_government_region", "wales"), ("q1_05", "No")]),
        ];
        let session = Session::from_dataset(Dataset::from_rows(rows), Catalog::builtin());
        let overview = region_overview(session.summary());
        assert_eq!(overview.len(), 1);
        assert_eq!(overview[0].region, "Wales");
        assert_eq!(overview[0].respondents, 2);
        assert_eq!(overview[0].hits.get(&Axis::Device), Some(&2));
        assert_eq!(overview[0].hits.get(&Axis::Age), Some(&1));
    }

    #[test]
    fn catalog_entries_filter_by_axis() {
        let entries = catalog_entries(&Catalog::builtin(), Some(Axis::Device));
        assert!(entries.iter().all(|entry| entry.axis == Axis::Device));
        assert_eq!(entries.first().map(|e| e.key.as_str()), Some("q1_01"));
        assert_eq!(entries.first().map(|e| e.label.as_str()), Some("Smart TV"));
    }

    #[test]
    fn missing_catalog_file_has_context() {
        let error = load_catalog(Some(Path::new("/nonexistent/catalog.toml")))
            .expect_err("missing file");
        assert!(error.to_string().contains("load catalog"));
    }
}
