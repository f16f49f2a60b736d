//! Typed error definitions for renumber.
//! Fatal failure modes carry the offending path and the underlying I/O error
//! so logs and tests can match on them.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fs_ops::describe_io_error;

#[derive(Debug, Error)]
pub enum RenumberError {
    #[error("Target is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("{}", describe_io_error("scan directory", .path, .source))]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}", describe_io_error("create staging directory", .path, .source))]
    StagingCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}", describe_io_error("remove staging directory", .path, .source))]
    StagingRemove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RenumberError {
    /// Stable short code for structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            RenumberError::NotADirectory(_) => "not_a_directory",
            RenumberError::Scan { .. } => "scan_error",
            RenumberError::StagingCreate { .. } => "staging_create_error",
            RenumberError::StagingRemove { .. } => "staging_remove_error",
        }
    }

    pub(crate) fn scan(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RenumberError::Scan {
            path: path.into(),
            source,
        }
    }
}
