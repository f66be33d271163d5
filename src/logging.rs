//! Tracing setup: this crate's events go to stdout (with source location) and
//! to the log file; dependency events only go to stdout.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    filter::filter_fn, fmt::layer as fmt_layer, prelude::*, EnvFilter, Registry,
};

use crate::config::LoggingConfig;

const CRATE_TARGET: &str = "recipe_finder";
const DEFAULT_LEVEL: &str = "info";

/// Install the global subscriber. The returned guard must be held for as long
/// as file logging should keep flushing.
pub fn init(config: &LoggingConfig) -> anyhow::Result<WorkerGuard> {
    let (directory, file_name) = split_log_path(Path::new(&config.file))?;
    std::fs::create_dir_all(&directory)
        .with_context(|| format!("failed to create log directory {:?}", directory))?;

    let (file_writer, guard) =
        tracing_appender::non_blocking(rolling::never(&directory, &file_name));

    let ours = filter_fn(|meta| is_crate_target(meta.target()));
    let theirs = filter_fn(|meta| !is_crate_target(meta.target()));

    Registry::default()
        .with(level_filter(config))
        .with(
            fmt_layer()
                .with_writer(std::io::stdout)
                .with_file(true)
                .with_line_number(true)
                .with_filter(ours.clone()),
        )
        .with(fmt_layer().with_writer(std::io::stdout).with_filter(theirs))
        .with(
            fmt_layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(ours),
        )
        .try_init()
        .context("failed to init tracing subscriber")?;

    tracing::debug!(file = %config.file, "logging initialised");
    Ok(guard)
}

/// `RUST_LOG` wins over the configured level.
fn level_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(configured_level(config)))
}

fn configured_level(config: &LoggingConfig) -> &str {
    config
        .level
        .as_deref()
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_LEVEL)
}

fn is_crate_target(target: &str) -> bool {
    target.starts_with(CRATE_TARGET)
}

fn split_log_path(path: &Path) -> anyhow::Result<(PathBuf, String)> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("invalid log file path {:?}", path))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((directory, file_name.to_string()))
}
