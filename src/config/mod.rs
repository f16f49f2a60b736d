//! Config module.
//! Runtime settings are built from CLI flags only: there is no config file
//! and no environment variable is consulted.

pub mod types;
mod validate;

pub use types::{Config, LogLevel};
pub use validate::resolve_target_dir;
