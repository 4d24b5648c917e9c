pub mod axis;
pub mod error;
pub mod row;
pub mod summary;
pub mod view;

pub use axis::{Axis, Mode};
pub use error::{ModelError, Result};
pub use row::SurveyRow;
pub use summary::{
    AxisIndex, AxisTally, BucketKind, BucketTally, PartialSummary, RegionSummary, Summary,
};
pub use view::{
    BarDatum, ChoroplethFill, ChoroplethSelection, CountRecord, CrossTabCell, CrossTabGrid,
    HeatmapSelection, RegionCounts, RegionShade,
};
