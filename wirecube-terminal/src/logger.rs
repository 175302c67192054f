//! Logging setup.
//!
//! The terminal belongs to the canvas, so records go to a file instead of stderr.

use std::fs::File;
use std::path::PathBuf;

use env_logger::{Env, Target};

use crate::error::{AppError, AppResult};

pub const LOG_FILE_NAME: &str = "wirecube.log";

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Where the log file is written
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Install `env_logger` writing to [`log_path`]. Returns the path.
pub fn init() -> AppResult<PathBuf> {
    let path = log_path();
    let file = File::create(&path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| AppError::Logger(e.to_string()))?;
    Ok(path)
}
