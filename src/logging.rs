//! Logging setup for approve-scripts.
//!
//! Claude Code reads the hook's stdout as protocol, so diagnostics only ever
//! go to an append-mode file, and only when `APPROVE_SCRIPTS_LOG` is set.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

/// Install a file-backed tracing subscriber if logging is enabled.
pub fn init(settings: &LogSettings) -> Result<()> {
    let Some(directive) = &settings.filter else {
        return Ok(());
    };

    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("Invalid log filter: {}", directive))?;
    let file = open_log_file(&settings.file)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install subscriber: {}", e))?;

    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}
