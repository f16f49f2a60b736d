//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - At most one positional DIRECTORY; extra positionals are a usage error.
//! - --debug is a shorthand for --log-level debug.

use clap::{CommandFactory, FromArgMatches, Parser, ValueHint};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::fs_ops::ScanOrder;
use crate::naming::base_name;

/// Renumber the files of a directory into a zero-padded sequence
/// (0.jpg, 1.png, ...), keeping each file's extension.
#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Rename all files in a directory (or the current directory) in numerical order"
)]
pub struct Args {
    /// Directory to renumber (defaults to the current directory).
    #[arg(value_name = "DIRECTORY", value_hint = ValueHint::DirPath)]
    pub directory: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Dry-run: log planned renames but do not modify the filesystem.
    #[arg(long, help = "Show what would be renamed, but do not modify files")]
    pub dry_run: bool,

    /// Assign numbers in file name order instead of directory order.
    #[arg(long, help = "Number files in byte-wise name order instead of directory order")]
    pub sort: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.sort {
            cfg.order = ScanOrder::Lexical;
        }
    }
}

/// Parse `argv`, naming the program after the basename of `argv[0]` in usage
/// and help output. Exits the process on usage errors.
pub fn parse_from<I, T>(argv: I) -> Args
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let mut cmd = Args::command();
    if let Some(bin) = argv.first().and_then(|a| a.to_str()).map(base_name)
        && !bin.is_empty()
    {
        cmd = cmd.bin_name(bin.to_string());
    }
    let matches = cmd.get_matches_from(argv);
    Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

pub fn parse() -> Args {
    parse_from(std::env::args_os())
}
