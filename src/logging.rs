//! Diagnostic logging
//!
//! The terminal belongs to the UI, so log records go to a file. The level is
//! taken from `RUST_LOG` and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use env_logger::{Env, Target};

use crate::error::ArchiveError;

const LOG_DIR: &str = "astro-archive";
const LOG_FILE: &str = "astro-archive.log";

pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(LOG_DIR).join(LOG_FILE))
}

/// Install the global logger, appending to `path`
pub fn init(path: &Path) -> Result<(), ArchiveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| ArchiveError::Log(e.to_string()))
}
