//! CLI library components for the digital exclusion atlas.

pub mod commands;
pub mod logging;
pub mod render;
