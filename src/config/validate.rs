//! Target directory resolution and validation.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::types::Config;
use crate::errors::RenumberError;

/// Directory to operate on: the given path, or the current working directory.
pub fn resolve_target_dir(given: Option<&Path>) -> io::Result<PathBuf> {
    match given {
        Some(p) => Ok(p.to_path_buf()),
        None => env::current_dir(),
    }
}

impl Config {
    /// Target must exist and be a directory (symlinks to directories are followed).
    pub fn validate(&self) -> Result<(), RenumberError> {
        let dir = &self.target_dir;
        let meta = fs::metadata(dir).map_err(|e| RenumberError::scan(dir, e))?;
        if !meta.is_dir() {
            return Err(RenumberError::NotADirectory(dir.clone()));
        }
        debug!(path = %dir.display(), "Target directory validated");
        Ok(())
    }
}
