#![deny(unsafe_code)]

pub mod builtin;
pub mod catalog;
pub mod config;
pub mod error;
pub mod indicator;

pub use crate::catalog::{Catalog, DatasetColumns};
pub use crate::config::{CatalogFile, SetKind, SetSection};
pub use crate::error::StandardsError;
pub use crate::indicator::{IndicatorKind, IndicatorSet};
