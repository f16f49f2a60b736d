//! Application orchestrator.
//! Builds the config from CLI flags, initializes logging, validates the target
//! and runs (or plans) the renumbering.

use anyhow::{Context, Result};
use tracing::{debug, error};

use renumber::cli::Args;
use renumber::output as out;
use renumber::{
    Config, RenumberError, default_entropy, plan, resolve_target_dir, run as run_pipeline,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let target_dir = resolve_target_dir(args.directory.as_deref())
        .map_err(|e| {
            out::print_error(&format!("Could not determine the current directory: {e}"));
            e
        })
        .context("determine target directory")?;

    let mut cfg = Config::new(target_dir);
    args.apply_overrides(&mut cfg);

    init_tracing(&cfg.log_level, args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting renumber: {:?}", args);

    if cfg.dry_run {
        let planned = plan(&cfg).inspect_err(log_fatal)?;
        for p in &planned {
            out::print_info(&format!(
                "Dry-run: would rename '{}' -> '{}'",
                p.from.display(),
                p.to.display()
            ));
        }
        out::print_info(&format!(
            "Dry-run: {} file(s) in '{}' would be renumbered",
            planned.len(),
            cfg.target_dir.display()
        ));
        return Ok(());
    }

    let report = run_pipeline(&cfg, default_entropy()).inspect_err(log_fatal)?;
    if !report.warnings.is_empty() {
        out::print_warn(&format!(
            "{} of {} file(s) renumbered with {} warning(s); see messages above",
            report.committed,
            report.found,
            report.warnings.len()
        ));
    }
    Ok(())
}

fn log_fatal(e: &RenumberError) {
    let code = e.code();
    match e {
        RenumberError::NotADirectory(path) => {
            error!(code, path = %path.display(), "Target is not a directory")
        }
        RenumberError::Scan { path, .. } => {
            error!(code, path = %path.display(), error = %e, "Failed to scan directory")
        }
        RenumberError::StagingCreate { path, .. } => {
            error!(code, path = %path.display(), error = %e, "Failed to create staging directory; no file was touched")
        }
        RenumberError::StagingRemove { path, .. } => {
            error!(code, path = %path.display(), error = %e, "Failed to remove staging directory")
        }
    }
}
