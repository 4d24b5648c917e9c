//! CLI argument definitions for the digital exclusion atlas.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use dx_ingest::REGION_NAME_PROPERTY;
use dx_model::{Axis, Mode};

#[derive(Parser)]
#[command(
    name = "dx-atlas",
    version,
    about = "Digital exclusion atlas - regional counts from survey exports",
    long_about = "Aggregate a digital exclusion survey export by region and axis.\n\n\
                  Axes: age, income, health, device, usage.\n\
                  Views: flat records, per-region bars, choropleth fills and\n\
                  min-of-marginals heatmap grids."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// TOML file overriding the built-in columns and labels.
    #[arg(long = "catalog", value_name = "TOML", global = true)]
    pub catalog: Option<PathBuf>,

    /// Result format.
    #[arg(long = "format", value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Respondents and bucket hits per region.
    Summary(SurveyArgs),

    /// Flat region/category/age-band counts.
    Records(RecordsArgs),

    /// One region's counts over an axis's full domain.
    Bars(BarsArgs),

    /// Per-region counts for one bucket, shaded onto map features.
    Lookup(LookupArgs),

    /// Heatmap grid crossing two axes within one region.
    Crosstab(CrossTabArgs),

    /// List the configured indicator sets.
    Catalog(CatalogArgs),
}

#[derive(Args)]
pub struct SurveyArgs {
    /// Survey export in CSV form.
    #[arg(value_name = "SURVEY_CSV")]
    pub survey: PathBuf,
}

#[derive(Args)]
pub struct RecordsArgs {
    #[command(flatten)]
    pub survey: SurveyArgs,

    /// Only this axis (default: all).
    #[arg(long = "axis")]
    pub axis: Option<Axis>,
}

#[derive(Args)]
pub struct BarsArgs {
    #[command(flatten)]
    pub survey: SurveyArgs,

    #[arg(long = "region")]
    pub region: String,

    #[arg(long = "axis")]
    pub axis: Axis,
}

#[derive(Args)]
pub struct LookupArgs {
    #[command(flatten)]
    pub survey: SurveyArgs,

    #[arg(long = "axis")]
    pub axis: Axis,

    /// Bucket label, or its column code.
    #[arg(long = "bucket")]
    pub bucket: String,

    /// Narrow counts to one age band.
    #[arg(long = "age")]
    pub age: Option<String>,

    /// GeoJSON boundary files; regions come from the survey when omitted.
    #[arg(long = "geo", value_name = "GEOJSON")]
    pub geo: Vec<PathBuf>,

    /// Feature property holding the region name.
    #[arg(long = "region-property", default_value = REGION_NAME_PROPERTY)]
    pub region_property: String,
}

#[derive(Args)]
pub struct CrossTabArgs {
    #[command(flatten)]
    pub survey: SurveyArgs,

    #[arg(long = "region")]
    pub region: String,

    /// Row axis.
    #[arg(long = "x")]
    pub x: String,

    /// Column axis.
    #[arg(long = "y")]
    pub y: String,

    /// Which indicator set is active.
    #[arg(long = "mode", default_value = "device")]
    pub mode: Mode,
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Only this axis (default: all).
    #[arg(long = "axis")]
    pub axis: Option<Axis>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
