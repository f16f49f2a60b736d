//! The renumbering pipeline: Measure, Stage, Commit, Cleanup.
//!
//! Stage moves every regular file of the target directory into a fresh staging
//! directory under its canonical name; Commit moves them back. Because the
//! target holds no canonical names while files are in staging, no rename can
//! overwrite a file that has not been renamed yet.
//!
//! Per-file failures are collected as [`Warning`]s and never abort the run.
//! Fatal errors leave already staged files inside the staging directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::RenumberError;
use crate::fs_ops::{
    ScanOrder, StagingDir, collect_regular_files, count_regular_files, describe_io_error,
    describe_rename_error, set_times, stamp_for,
};
use crate::naming::{NameFormat, os_extension_of, parse_index};

/// A non-fatal, per-item failure.
#[derive(Debug, Error)]
pub enum Warning {
    #[error("{}", describe_rename_error(.from, .to, .source))]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("{}", describe_io_error("set timestamps", .path, .source))]
    Timestamp { path: PathBuf, source: io::Error },

    #[error(transparent)]
    StagingRemove(RenumberError),
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Regular files counted in the Measure phase
    pub found: usize,
    /// Zero-pad width used for the new names
    pub width: usize,
    /// Files moved into staging
    pub staged: usize,
    /// Files moved back under their new names
    pub committed: usize,
    pub warnings: Vec<Warning>,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.committed == self.found
    }
}

/// One rename a run would perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Compute the renames a run would perform without touching the filesystem.
pub fn plan(config: &Config) -> Result<Vec<PlannedRename>, RenumberError> {
    config.validate()?;
    let dir = &config.target_dir;
    let files = collect_regular_files(dir, config.order)?;
    let format = NameFormat::for_count(files.len());
    let planned = files
        .into_iter()
        .enumerate()
        .map(|(index, entry)| PlannedRename {
            to: dir.join(format.canonical_name(index, os_extension_of(&entry.name))),
            from: entry.path,
        })
        .collect();
    Ok(planned)
}

/// Renumber the regular files of `config.target_dir`.
///
/// `entropy` salts the staging directory name; see
/// [`crate::fs_ops::default_entropy`].
pub fn run(config: &Config, entropy: u64) -> Result<RunReport, RenumberError> {
    config.validate()?;
    let dir = &config.target_dir;

    let found = count_regular_files(dir)?;
    let format = NameFormat::for_count(found);
    let mut report = RunReport {
        found,
        width: format.width(),
        ..Default::default()
    };
    info!(dir = %dir.display(), files = found, width = report.width, "Measured target directory");
    if found == 0 {
        info!(dir = %dir.display(), "No regular files to renumber");
        return Ok(report);
    }

    let staging = StagingDir::create(dir, entropy)?;
    report.staged = stage(dir, &staging, format, config.order, &mut report.warnings)?;
    report.committed = commit(dir, &staging, &mut report.warnings)?;

    if let Err(e) = staging.remove() {
        warn!(code = e.code(), "{}", e);
        report.warnings.push(Warning::StagingRemove(e));
    }

    info!(
        dir = %dir.display(),
        found = report.found,
        staged = report.staged,
        committed = report.committed,
        warnings = report.warnings.len(),
        "Renumbering finished"
    );
    Ok(report)
}

/// Move each file into staging under its canonical name. A failed rename
/// still consumes its index.
fn stage(
    dir: &Path,
    staging: &StagingDir,
    format: NameFormat,
    order: ScanOrder,
    warnings: &mut Vec<Warning>,
) -> Result<usize, RenumberError> {
    let mut staged = 0;
    for (index, entry) in collect_regular_files(dir, order)?.into_iter().enumerate() {
        let to = staging
            .path()
            .join(format.canonical_name(index, os_extension_of(&entry.name)));
        match fs::rename(&entry.path, &to) {
            Ok(()) => {
                debug!(from = %entry.path.display(), to = %to.display(), index, "staged");
                staged += 1;
            }
            Err(source) => {
                let w = Warning::Rename {
                    from: entry.path,
                    to,
                    source,
                };
                warn!(index, "{}", w);
                warnings.push(w);
            }
        }
    }
    info!(staged, "Stage phase complete");
    Ok(staged)
}

/// Move staged files back into `dir` and normalize their timestamps.
fn commit(
    dir: &Path,
    staging: &StagingDir,
    warnings: &mut Vec<Warning>,
) -> Result<usize, RenumberError> {
    let now = SystemTime::now();
    let mut committed = 0;
    for entry in collect_regular_files(staging.path(), ScanOrder::Directory)? {
        let to = dir.join(&entry.name);
        // rename(2) replaces an existing target; never clobber a file that
        // appeared in the target directory meanwhile.
        if fs::symlink_metadata(&to).is_ok() {
            let w = Warning::Rename {
                from: entry.path,
                to,
                source: io::Error::from(io::ErrorKind::AlreadyExists),
            };
            warn!("{}", w);
            warnings.push(w);
            continue;
        }
        if let Err(source) = fs::rename(&entry.path, &to) {
            let w = Warning::Rename {
                from: entry.path,
                to,
                source,
            };
            warn!("{}", w);
            warnings.push(w);
            continue;
        }
        committed += 1;

        let stamp = stamp_for(now, parse_index(&entry.name).unwrap_or(0));
        if let Err(source) = set_times(&to, stamp) {
            let w = Warning::Timestamp { path: to, source };
            warn!("{}", w);
            warnings.push(w);
        } else {
            debug!(path = %to.display(), "committed");
        }
    }
    info!(committed, "Commit phase complete");
    Ok(committed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use std::collections::BTreeSet;
    use std::ffi::OsString;

    fn names(dir: &Path) -> BTreeSet<OsString> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect()
    }

    #[test]
    fn empty_directory_is_noop() {
        let dir = assert_fs::TempDir::new().unwrap();
        let report = run(&Config::new(dir.path()), 1).unwrap();
        assert_eq!(report.found, 0);
        assert_eq!(report.staged, 0);
        assert!(names(dir.path()).is_empty(), "no staging directory should remain");
    }

    #[test]
    fn renames_with_padding_and_extensions() {
        let dir = assert_fs::TempDir::new().unwrap();
        for i in 0..12 {
            dir.child(format!("file-{i}.dat")).write_str(&i.to_string()).unwrap();
        }
        let report = run(&Config::new(dir.path()), 2).unwrap();
        assert!(report.is_clean(), "warnings: {:?}", report.warnings);
        assert_eq!(report.width, 2);

        let expected: BTreeSet<OsString> = (0..12).map(|i| OsString::from(format!("{i:02}.dat"))).collect();
        assert_eq!(names(dir.path()), expected);
    }

    #[test]
    fn plan_does_not_touch_files() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("b.txt").write_str("b").unwrap();
        dir.child("a.png").write_str("a").unwrap();
        let mut cfg = Config::new(dir.path());
        cfg.order = ScanOrder::Lexical;

        let planned = plan(&cfg).unwrap();
        assert_eq!(
            planned,
            vec![
                PlannedRename { from: dir.path().join("a.png"), to: dir.path().join("0.png") },
                PlannedRename { from: dir.path().join("b.txt"), to: dir.path().join("1.txt") },
            ]
        );
        dir.child("a.png").assert("a");
        dir.child("b.txt").assert("b");
    }

    #[test]
    fn plan_width_follows_listed_files() {
        let dir = assert_fs::TempDir::new().unwrap();
        for i in 0..11 {
            dir.child(format!("f{i:02}.raw")).write_str("r").unwrap();
        }
        dir.child(".hidden").write_str("h").unwrap();
        let mut cfg = Config::new(dir.path());
        cfg.order = ScanOrder::Lexical;

        let planned = plan(&cfg).unwrap();
        assert_eq!(planned.len(), 11);
        assert_eq!(planned[0].to, dir.path().join("00.raw"));
        assert_eq!(planned[10].to, dir.path().join("10.raw"));
    }

    #[test]
    fn commit_refuses_to_overwrite_existing_target() {
        let dir = assert_fs::TempDir::new().unwrap();
        let staging = StagingDir::create(dir.path(), 3).unwrap();
        fs::write(staging.path().join("0.txt"), "staged").unwrap();
        dir.child("0.txt").write_str("intruder").unwrap();

        let mut warnings = Vec::new();
        let committed = commit(dir.path(), &staging, &mut warnings).unwrap();
        assert_eq!(committed, 0);
        assert!(matches!(warnings.as_slice(), [Warning::Rename { .. }]));
        dir.child("0.txt").assert("intruder");

        fs::remove_file(staging.path().join("0.txt")).unwrap();
        staging.remove().unwrap();
    }
}
