//! Aggregation engine and view queries for the digital exclusion survey.
//!
//! Rows are aggregated once into a [`dx_model::Summary`]; every view
//! (choropleth, bar chart, heatmap, flat records) reads the summary.

pub mod aggregate;
pub mod choropleth;
pub mod mode;
pub mod query;
pub mod session;
pub mod views;

pub use aggregate::{aggregate, build_summary};
pub use choropleth::shade_regions;
pub use mode::ModeView;
pub use query::{bucket_keys, cross_tab, cross_tab_by_name, domain, lookup_by_region};
pub use session::Session;
pub use views::{bar_series, flatten};
