#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

mod analyze;
mod cli;
mod error_fmt;
mod report;

use clap::Parser;
use eyre::{Result, WrapErr};
use std::path::Path;

use crate::cli::{Cli, Commands, FILE_GUARD, JSON_MODE};
use crate::error_fmt::{exit_code_for_error, format_error_json, humanize};

fn main() {
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "swath failed");
        if JSON_MODE.get().copied().unwrap_or(false) {
            println!("{}", format_error_json(&e));
        } else {
            eprintln!("{}", humanize(&e));
        }
        std::process::exit(exit_code_for_error(&e));
    }
}

fn run(cli: Cli) -> Result<()> {
    color_eyre::install()?;

    let (cfg, found) = load_config(&cli.config)?;
    init_tracing(cli.json, cli.log_level.as_deref(), &cfg.logging)?;
    if !found {
        tracing::info!(path = %cli.config.display(), "config not found; using defaults");
    }

    match cli.cmd {
        Commands::Analyze {
            readings,
            impute,
            width,
        } => analyze::run_analyze(&cfg, &readings, &impute, width, cli.json),
        Commands::Template { count, spacing } => {
            analyze::run_template(&cfg, count, spacing, cli.json)
        }
        Commands::Layout => analyze::run_layout(&cfg, cli.json),
    }
}

/// Read and validate the session config. A missing file yields defaults;
/// the flag reports whether the file was there.
fn load_config(path: &Path) -> Result<(swath_config::Config, bool)> {
    if !path.exists() {
        return Ok((swath_config::Config::default(), false));
    }
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("invalid config {}: cannot read file", path.display()))?;
    let cfg = swath_config::load_toml(&text)
        .map_err(|e| eyre::eyre!("invalid config {}: {}", path.display(), e))?;
    cfg.validate()
        .wrap_err_with(|| format!("invalid config {}", path.display()))?;
    Ok((cfg, true))
}

/// Install the global subscriber: console on stderr (pretty or JSON lines)
/// plus an optional JSON-lines file from `[logging]`.
fn init_tracing(json: bool, cli_level: Option<&str>, logging: &swath_config::Logging) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let level = cli_level
        .or(logging.level.as_deref())
        .unwrap_or("warn");
    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| eyre::eyre!("invalid config: log level '{level}': {e}"))?,
    };

    let (pretty, json_console) = if json {
        (None, Some(fmt::layer().json().with_writer(std::io::stderr)))
    } else {
        (Some(fmt::layer().with_writer(std::io::stderr)), None)
    };

    let file_layer = match logging.file.as_deref() {
        Some(file) => {
            use tracing_appender::rolling::{RollingFileAppender, Rotation};

            let path = Path::new(file);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| eyre::eyre!("invalid config: logging.file '{file}' has no file name"))?;
            let rotation = match logging.rotation.as_deref() {
                Some("daily") => Rotation::DAILY,
                Some("hourly") => Rotation::HOURLY,
                _ => Rotation::NEVER,
            };
            let appender = RollingFileAppender::builder()
                .rotation(rotation)
                .filename_prefix(name.to_string_lossy().into_owned())
                .build(dir)
                .map_err(|e| eyre::eyre!("open log file {file}: {e}"))?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);
            Some(fmt::layer().json().with_ansi(false).with_writer(writer))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json_console)
        .with(file_layer)
        .try_init()
        .map_err(|e| eyre::eyre!("failed to initialize logging: {e}"))?;
    Ok(())
}
