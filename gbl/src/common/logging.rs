// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "gbl_log.txt";

/// The log file goes in the user's cache folder, never the current folder: the current
/// folder is a git working tree, and a stray log file there would show up in the
/// `gbl add` list.
#[must_use]
pub fn get_log_file_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_FILE_NAME)
}

/// Note that if you wrap this up in a non blocking writer, the guard has to outlive
/// every log call, so keep it simple and write directly.
///
/// # Errors
///
/// Returns an error if the path has no parent folder or no file name.
pub fn try_create_file_appender(
    path: &Path,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access folder of {}. It might not exist, or you don't have the required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or you don't have the required permissions.",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}

/// Installs the global tracing subscriber, writing to the file at `path`.
///
/// # Errors
///
/// Returns an error if the file appender can't be created or a global subscriber is
/// already installed.
pub fn try_initialize_logging_global(
    path: &Path,
    level_filter: LevelFilter,
) -> miette::Result<()> {
    let file_appender = try_create_file_appender(path)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_filter(level_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .map_err(|error| miette::miette!("Could not initialize logging: {error}"))
}
