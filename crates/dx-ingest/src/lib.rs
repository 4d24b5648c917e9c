//! Loading the digital exclusion survey export and region boundaries.

pub mod csv_table;
pub mod dataset;
pub mod error;
pub mod geo;

pub use csv_table::{SurveyTable, read_survey_csv, read_survey_csv_from_reader};
pub use dataset::{Dataset, DatasetSource, load_dataset};
pub use error::{IngestError, Result};
pub use geo::{
    REGION_NAME_PROPERTY, RegionFeature, parse_feature_collection, read_feature_collection,
};
