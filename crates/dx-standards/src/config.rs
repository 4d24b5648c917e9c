#![deny(unsafe_code)]

//! TOML catalog overrides.
//!
//! ```toml
//! [dataset]
//! region_column = "region"
//!
//! [dataset.region_aliases]
//! "Eastern" = "East of England"
//!
//! [[sets]]
//! axis = "usage"
//! kind = "multi"
//! columns = ["q4_01", "q4_02"]
//! labels = { q4_01 = "Email", q4_02 = "Banking" }
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use dx_model::Axis;

use crate::catalog::Catalog;
use crate::error::{Result, StandardsError};
use crate::indicator::IndicatorSet;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    #[serde(default)]
    pub dataset: Option<DatasetSection>,
    #[serde(default)]
    pub sets: Vec<SetSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetSection {
    pub region_column: Option<String>,
    pub age_column: Option<String>,
    pub affirmative: Option<String>,
    #[serde(default)]
    pub region_aliases: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetKind {
    Single,
    Multi,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetSection {
    pub axis: Axis,
    pub kind: SetKind,
    pub columns: Vec<String>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub order: Option<Vec<String>>,
}

impl CatalogFile {
    /// Applies dataset overrides and replaces the sets named in the file.
    pub fn apply(&self, catalog: &mut Catalog, origin: &Path) -> Result<()> {
        if let Some(dataset) = &self.dataset {
            dataset.apply(catalog, origin)?;
        }
        let mut seen = BTreeSet::new();
        for section in &self.sets {
            if !seen.insert(section.axis) {
                return Err(StandardsError::DuplicateSet { axis: section.axis });
            }
            catalog.insert(section.to_indicator_set()?);
        }
        Ok(())
    }
}

impl DatasetSection {
    fn apply(&self, catalog: &mut Catalog, origin: &Path) -> Result<()> {
        let dataset = &mut catalog.dataset;
        if let Some(column) = &self.region_column {
            dataset.region_column = non_blank(column, "region_column", origin)?;
        }
        if let Some(column) = &self.age_column {
            dataset.age_column = non_blank(column, "age_column", origin)?;
        }
        if let Some(token) = &self.affirmative {
            dataset.affirmative = non_blank(token, "affirmative", origin)?;
        }
        for (alias, canonical) in &self.region_aliases {
            dataset.region_aliases.insert(alias, canonical);
        }
        Ok(())
    }
}

impl SetSection {
    /// Validates the section and builds its set.
    ///
    /// Ordinal axes must be single-valued and declare their `order`, since
    /// their domain is fixed by the catalog rather than by the data.
    pub fn to_indicator_set(&self) -> Result<IndicatorSet> {
        if self.axis.is_ordinal() {
            if self.kind != SetKind::Single {
                return Err(StandardsError::invalid_set(
                    self.axis,
                    "ordinal axis must be single-valued",
                ));
            }
            if self.order.as_ref().is_none_or(Vec::is_empty) {
                return Err(StandardsError::invalid_set(
                    self.axis,
                    "ordinal axis needs a non-empty order",
                ));
            }
        }
        let set = match self.kind {
            SetKind::Single => {
                let [column] = self.columns.as_slice() else {
                    return Err(StandardsError::invalid_set(
                        self.axis,
                        format!(
                            "single-valued set needs exactly one column, got {}",
                            self.columns.len()
                        ),
                    ));
                };
                IndicatorSet::single(self.axis, column, &self.labels)?
            }
            SetKind::Multi => IndicatorSet::multi(
                self.axis,
                self.columns.iter().map(|column| {
                    let label = self.labels.get(column).unwrap_or(column);
                    (column.as_str(), label.clone())
                }),
            )?,
        };
        Ok(match &self.order {
            Some(order) => set.with_order(order.iter().cloned()),
            None => set,
        })
    }
}

fn non_blank(value: &str, field: &str, origin: &Path) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StandardsError::InvalidDataset {
            path: origin.to_path_buf(),
            message: format!("{field} must not be blank"),
        });
    }
    Ok(trimmed.to_string())
}
