//! Staging directory lifecycle.
//!
//! Files are moved into a private, dot-prefixed child of the target directory
//! so their canonical names can never collide with files not yet renamed.
//! The name is salted with caller-supplied entropy; creation uses
//! `create_dir`, which refuses any pre-existing entry.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

use super::helpers::describe_io_error;
use crate::errors::RenumberError;

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Prefix shared by every staging directory name.
pub const STAGING_PREFIX: &str = ".renumber-staging.";

/// Staging directory name for the given entropy.
pub fn staging_dir_name(entropy: u64) -> String {
    format!("{STAGING_PREFIX}{entropy:016x}")
}

/// Entropy from pid, wall-clock nanos and a process-wide sequence.
pub fn default_entropy() -> u64 {
    let pid = u64::from(std::process::id());
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    nanos ^ pid.rotate_left(32) ^ seq.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// An existing staging directory. Dropping it without [`StagingDir::remove`]
/// attempts a best-effort `remove_dir`.
#[derive(Debug)]
pub struct StagingDir {
    path: PathBuf,
    removed: bool,
}

impl StagingDir {
    /// Create the staging directory inside `target`.
    pub fn create(target: &Path, entropy: u64) -> Result<Self, RenumberError> {
        let path = target.join(staging_dir_name(entropy));
        create_private_dir(&path).map_err(|source| RenumberError::StagingCreate {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "created staging directory");
        Ok(Self {
            path,
            removed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the (expected empty) staging directory.
    pub fn remove(mut self) -> Result<(), RenumberError> {
        self.removed = true;
        fs::remove_dir(&self.path).map_err(|source| RenumberError::StagingRemove {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "removed staging directory");
        Ok(())
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        if let Err(e) = fs::remove_dir(&self.path) {
            warn!(
                path = %self.path.display(),
                "staging directory left behind; files in it can be moved back by hand: {}",
                describe_io_error("remove staging directory", &self.path, &e)
            );
        }
    }
}

#[cfg(unix)]
fn create_private_dir(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().mode(0o700).create(path)
}

#[cfg(not(unix))]
fn create_private_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir(path)
}
