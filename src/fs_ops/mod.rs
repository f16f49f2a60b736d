//! Filesystem operations: modularized.

mod helpers;
mod scan;
mod staging;
mod times;

pub use helpers::{describe_io_error, describe_rename_error};
pub use scan::{
    FileEntry, RegularFiles, ScanOrder, collect_regular_files, count_regular_files,
    list_regular_files,
};
pub use staging::{STAGING_PREFIX, StagingDir, default_entropy, staging_dir_name};
pub use times::{set_times, stamp_for};
