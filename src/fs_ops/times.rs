//! Timestamp normalization for committed files.

use filetime::{FileTime, set_file_times};
use std::io;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::trace;

/// Timestamp assigned to the file with `index`: `base + index µs`, so mtime
/// order follows numeric order. Falls back to `base` if the sum overflows.
pub fn stamp_for(base: SystemTime, index: u64) -> SystemTime {
    base.checked_add(Duration::from_micros(index)).unwrap_or(base)
}

/// Set both atime and mtime of `path` to `at`.
pub fn set_times(path: &Path, at: SystemTime) -> io::Result<()> {
    let ft = FileTime::from_system_time(at);
    set_file_times(path, ft, ft)?;
    trace!(path = %path.display(), "set atime/mtime");
    Ok(())
}
