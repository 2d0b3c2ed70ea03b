//! Inventory browser CLI.

use clap::{ColorChoice, Parser};
use inv_cli::logging::{LogConfig, LogFormat, init_logging};
use inv_cli::settings::Settings;
use std::io::{self, IsTerminal};
use std::path::Path;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{AppContext, run_export, run_kits, run_list, run_shell_session};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let ctx = match app_context(&cli) {
        Ok(ctx) => ctx,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let result = match &cli.command {
        Command::List(args) => run_list(&ctx, args),
        Command::Kits => run_kits(&ctx),
        Command::Export(args) => run_export(&ctx, args),
        Command::Shell(args) => run_shell_session(&ctx, args),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("{error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Settings from `--config` (which must exist) or `./inventory.toml`.
fn app_context(cli: &Cli) -> anyhow::Result<AppContext> {
    let settings = match &cli.config {
        Some(path) if !path.exists() => {
            anyhow::bail!("settings file not found: {}", path.display())
        }
        Some(path) => Settings::load_from(path),
        None => Settings::load_from_dir(Path::new(".")),
    };
    let source = settings.document_source(cli.source.as_deref());
    Ok(AppContext { settings, source })
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
