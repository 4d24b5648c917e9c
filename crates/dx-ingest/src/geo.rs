//! GeoJSON region boundaries.
//!
//! Only the region name is interpreted; geometry is carried through
//! untouched for the map renderer.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{IngestError, Result};

/// Feature property naming the European Electoral Region.
pub const REGION_NAME_PROPERTY: &str = "EER13NM";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionFeature {
    /// Raw region name from the feature properties.
    pub name: String,
    pub geometry: Value,
}

pub fn read_feature_collection(path: &Path, property: &str) -> Result<Vec<RegionFeature>> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::from_io(path, e))?;
    parse_feature_collection(&text, path, property)
}

pub fn parse_feature_collection(
    text: &str,
    origin: &Path,
    property: &str,
) -> Result<Vec<RegionFeature>> {
    let document: Value = serde_json::from_str(text).map_err(|source| IngestError::GeoJsonParse {
        path: origin.to_path_buf(),
        source,
    })?;
    let is_collection = document.get("type").and_then(Value::as_str) == Some("FeatureCollection");
    let features = match document.get("features").and_then(Value::as_array) {
        Some(features) if is_collection => features,
        _ => {
            return Err(IngestError::NotFeatureCollection {
                path: origin.to_path_buf(),
            });
        }
    };

    let mut out = Vec::with_capacity(features.len());
    for (index, feature) in features.iter().enumerate() {
        let name = feature
            .get("properties")
            .and_then(|properties| properties.get(property))
            .and_then(Value::as_str)
            .ok_or_else(|| IngestError::MissingRegionName {
                path: origin.to_path_buf(),
                index,
                property: property.to_string(),
            })?;
        out.push(RegionFeature {
            name: name.to_string(),
            geometry: feature.get("geometry").cloned().unwrap_or(Value::Null),
        });
    }
    Ok(out)
}
