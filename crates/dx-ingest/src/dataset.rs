//! One-shot dataset loading.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, info_span};

use dx_model::SurveyRow;

use crate::csv_table::read_survey_csv;
use crate::error::Result;
use crate::geo::{REGION_NAME_PROPERTY, RegionFeature, read_feature_collection};

/// Where a session's inputs live.
#[derive(Debug, Clone)]
pub struct DatasetSource {
    pub survey: PathBuf,
    pub boundaries: Vec<PathBuf>,
    pub region_property: String,
}

impl DatasetSource {
    pub fn new(survey: impl Into<PathBuf>) -> Self {
        Self {
            survey: survey.into(),
            boundaries: Vec::new(),
            region_property: REGION_NAME_PROPERTY.to_string(),
        }
    }

    #[must_use]
    pub fn with_boundaries<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.boundaries.extend(paths.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_region_property(mut self, property: impl Into<String>) -> Self {
        self.region_property = property.into();
        self
    }
}

/// Every input of a session, fully parsed.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<SurveyRow>,
    /// Boundary features of every file, concatenated in input order.
    pub features: Vec<RegionFeature>,
}

impl Dataset {
    pub fn from_rows(rows: Vec<SurveyRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }
}

/// Loads the survey and every boundary file.
///
/// Resolves once with everything or fails with the first error; callers
/// must not build a summary from a failed load.
pub fn load_dataset(source: &DatasetSource) -> Result<Dataset> {
    let span = info_span!("load", survey = %source.survey.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_survey_csv(&source.survey)?;
    let mut features = Vec::new();
    for path in &source.boundaries {
        features.extend(load_boundaries(path, &source.region_property)?);
    }

    info!(
        rows = table.rows.len(),
        columns = table.headers.len(),
        features = features.len(),
        duration_ms = start.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(Dataset {
        headers: table.headers,
        rows: table.rows,
        features,
    })
}

fn load_boundaries(path: &Path, property: &str) -> Result<Vec<RegionFeature>> {
    let features = read_feature_collection(path, property)?;
    tracing::debug!(path = %path.display(), features = features.len(), "boundaries read");
    Ok(features)
}
