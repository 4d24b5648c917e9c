//! Digital exclusion atlas CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use dx_cli::commands::{catalog_entries, load_catalog, open_session, region_overview};
use dx_cli::logging::{LogConfig, LogFormat, init_logging};
use dx_cli::render::{
    OutputFormat, bars_table, catalog_table, choropleth_table, crosstab_table, overview_table,
    records_table, render,
};
use dx_core::{bar_series, flatten};
use dx_ingest::REGION_NAME_PROPERTY;
use dx_model::ChoroplethSelection;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<String> {
    let format = match cli.format {
        OutputFormatArg::Table => OutputFormat::Table,
        OutputFormatArg::Json => OutputFormat::Json,
    };
    let catalog = load_catalog(cli.catalog.as_deref())?;
    match &cli.command {
        Command::Summary(args) => {
            let session = open_session(&args.survey, &[], REGION_NAME_PROPERTY, catalog)?;
            let overview = region_overview(session.summary());
            render(format, overview.as_slice(), overview_table)
        }
        Command::Records(args) => {
            let session = open_session(&args.survey.survey, &[], REGION_NAME_PROPERTY, catalog)?;
            let records = flatten(session.summary(), args.axis);
            render(format, records.as_slice(), records_table)
        }
        Command::Bars(args) => {
            let session = open_session(&args.survey.survey, &[], REGION_NAME_PROPERTY, catalog)?;
            let bars = bar_series(session.summary(), &args.region, args.axis);
            render(format, bars.as_slice(), bars_table)
        }
        Command::Lookup(args) => {
            let session =
                open_session(&args.survey.survey, &args.geo, &args.region_property, catalog)?;
            let fill = session.choropleth(&ChoroplethSelection {
                axis: args.axis,
                bucket: args.bucket.clone(),
                age: args.age.clone(),
            });
            render(format, &fill, choropleth_table)
        }
        Command::Crosstab(args) => {
            let session = open_session(&args.survey.survey, &[], REGION_NAME_PROPERTY, catalog)?;
            let grid = session
                .view(args.mode)
                .cross_tab_by_name(&args.region, &args.x, &args.y);
            render(format, &grid, crosstab_table)
        }
        Command::Catalog(args) => {
            let entries = catalog_entries(&catalog, args.axis);
            render(format, entries.as_slice(), catalog_table)
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig::default()
        .with_level(cli.verbosity.tracing_level_filter())
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()));
    if let Some(level) = cli.log_level {
        config.level = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
