//! File-backed logging.
//!
//! The terminal is the render surface, so log records never go to stdout or
//! stderr. They are written to the file named by `ORRERY_LOG_PATH`.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};

use crate::settings::LOG_FILTER_ENV;

/// Install the global logger writing to `path`.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_FILTER_ENV, "info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .write_style(env_logger::WriteStyle::Never)
        .try_init()
        .context("installing logger")?;
    Ok(())
}
