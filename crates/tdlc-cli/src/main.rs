//! TDLC case-timeline CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tdlc_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_averages, run_awaiting, run_calendar, run_classify, run_daily, run_evolution,
    run_quarterly, run_totals,
};
use crate::types::RunContext;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let ctx = RunContext {
        data_dir: cli.data_dir.clone(),
        format: cli.format,
        output: cli.output.clone(),
    };
    let result = match &cli.command {
        Command::Averages(args) => run_averages(&ctx, args),
        Command::Evolution(args) => run_evolution(&ctx, args),
        Command::Quarterly(args) => run_quarterly(&ctx, args),
        Command::Awaiting(args) => run_awaiting(&ctx, args),
        Command::Calendar(args) => run_calendar(&ctx, args),
        Command::Totals => run_totals(&ctx),
        Command::Daily(args) => run_daily(&ctx, args),
        Command::Classify(args) => run_classify(&ctx, args),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
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
