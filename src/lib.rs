//! Core library for `renumber`.
//!
//! Renames every regular, non-hidden file of a directory to a zero-padded
//! sequence number that keeps the original extension (`00.jpg`, `01.png`, ...).
//! Files pass through a private staging directory so old and new names never
//! collide.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod naming;
pub mod output;
pub mod pipeline;

pub use config::{Config, LogLevel, resolve_target_dir};
pub use errors::RenumberError;
pub use fs_ops::{ScanOrder, StagingDir, default_entropy};
pub use naming::{NameFormat, base_name, extension_of, pad_width};
pub use pipeline::{PlannedRename, RunReport, Warning, plan, run};
