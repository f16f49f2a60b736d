//! Directory scanning.
//! - Only regular, non-hidden entries are reported; entry types are read
//!   without following symlinks.
//! - Listing order is whatever the platform returns unless `ScanOrder::Lexical`
//!   is requested.

use std::ffi::OsString;
use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::errors::RenumberError;

/// How files are ordered before indices are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanOrder {
    /// Directory-listing order (unspecified, often inode or insertion order).
    #[default]
    Directory,
    /// Byte-wise ascending file name.
    Lexical,
}

/// A regular file found in a scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: OsString,
    pub path: PathBuf,
}

/// Lazy listing of the regular files of one directory. Not restartable.
#[derive(Debug)]
pub struct RegularFiles {
    dir: PathBuf,
    inner: ReadDir,
}

impl Iterator for RegularFiles {
    type Item = Result<FileEntry, RenumberError>;

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.inner.by_ref() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => return Some(Err(RenumberError::scan(&self.dir, e))),
            };
            let name = entry.file_name();
            if is_hidden(&name) {
                continue;
            }
            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => return Some(Err(RenumberError::scan(path, e))),
            };
            if !file_type.is_file() {
                trace!(path = %path.display(), "skipping non-regular entry");
                continue;
            }
            return Some(Ok(FileEntry { name, path }));
        }
        None
    }
}

fn is_hidden(name: &OsString) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// Open `dir` and list its regular, non-hidden files lazily.
pub fn list_regular_files(dir: &Path) -> Result<RegularFiles, RenumberError> {
    let inner = fs::read_dir(dir).map_err(|e| RenumberError::scan(dir, e))?;
    Ok(RegularFiles {
        dir: dir.to_path_buf(),
        inner,
    })
}

/// Count the regular, non-hidden files of `dir`.
pub fn count_regular_files(dir: &Path) -> Result<usize, RenumberError> {
    let mut count = 0;
    for entry in list_regular_files(dir)? {
        entry?;
        count += 1;
    }
    Ok(count)
}

/// Materialize the listing of `dir` in the requested order.
pub fn collect_regular_files(dir: &Path, order: ScanOrder) -> Result<Vec<FileEntry>, RenumberError> {
    let mut files = list_regular_files(dir)?.collect::<Result<Vec<_>, _>>()?;
    if order == ScanOrder::Lexical {
        files.sort_by(|a, b| a.name.cmp(&b.name));
    }
    Ok(files)
}
