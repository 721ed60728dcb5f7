//! Tracing setup.
//!
//! The terminal is in raw mode on the alternate screen while the game runs, so
//! log output can only go to a file. Without `SNAKE_LOG_PATH` no subscriber is
//! installed and every `tracing` macro is a no-op.
//!
//! Precedence for the filter: `RUST_LOG` > [`DEFAULT_FILTER`].

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

pub const DEFAULT_FILTER: &str = "info";

/// Install the file subscriber if a log path is configured.
///
/// The returned guard flushes the background writer when dropped; keep it alive
/// for the whole process.
pub fn init(config: &Config) -> Result<Option<WorkerGuard>> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file = path
        .file_name()
        .with_context(|| format!("log path {:?} has no file name", path))?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("could not create log directory {:?}", dir))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(Some(guard))
}
