//! Row normalization for digital exclusion survey data.
//!
//! Every value that becomes a map key (region names, age bands, bucket
//! keys) goes through [`normalize_key`], on both the aggregation path and
//! the query path.

pub mod normalization;

pub use normalization::key::{
    AFFIRMATIVE_TOKEN, is_affirmative, is_affirmative_token, normalize_key,
};
pub use normalization::region::RegionAliases;
