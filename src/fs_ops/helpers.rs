//! I/O error helpers.
//!
//! Turns an `io::Error` into a single human-readable line: operation, path,
//! system error text, a platform-aware hint and the raw OS code.
//!
//! Usage:
//!   // fatal paths wrap the error in `RenumberError`, whose Display uses this
//!   // per-file warnings log it directly
//!   warn!(message = %describe_io_error("rename", &from, &e));

use std::io;
use std::path::Path;

#[cfg(unix)]
fn os_hint(code: i32) -> Option<&'static str> {
    match code {
        libc::EACCES | libc::EPERM => {
            Some("permission denied; check ownership and write permissions.")
        }
        libc::EXDEV => Some("cross-filesystem; atomic rename not possible."),
        libc::EBUSY => Some("resource busy; ensure no other process is using it."),
        libc::ENOENT => Some("path not found; it may have been removed concurrently."),
        libc::EEXIST => Some("already exists; remove the stale entry and retry."),
        libc::ENOTEMPTY => Some("directory not empty; inspect it for leftover files."),
        libc::ENOTDIR => Some("a path component is not a directory."),
        libc::ENOSPC => Some("insufficient space on device."),
        libc::EROFS => Some("read-only filesystem; cannot write here."),
        libc::ENAMETOOLONG => Some("filename or path too long; shorten path segments."),
        libc::EMFILE => Some("process file descriptor limit reached; close files or raise limits."),
        libc::ENFILE => Some("system-wide file table overflow; reduce open files."),
        _ => None,
    }
}

#[cfg(windows)]
fn os_hint(code: i32) -> Option<&'static str> {
    match code {
        5 => Some("access denied; check permissions."),      // ERROR_ACCESS_DENIED
        17 => Some("not same device; cross-filesystem move."), // ERROR_NOT_SAME_DEVICE
        32 => Some("sharing violation; file is in use."),    // ERROR_SHARING_VIOLATION
        2 | 3 => Some("path not found; it may have been removed concurrently."),
        80 | 183 => Some("already exists; remove the stale entry and retry."),
        145 => Some("directory not empty; inspect it for leftover files."), // ERROR_DIR_NOT_EMPTY
        112 => Some("insufficient disk space."),             // ERROR_DISK_FULL
        206 => Some("filename or path too long (MAX_PATH exceeded)."),
        _ => None,
    }
}

#[cfg(not(any(unix, windows)))]
fn os_hint(_code: i32) -> Option<&'static str> {
    None
}

fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => {
            Some("permission denied; check ownership and write permissions.")
        }
        io::ErrorKind::NotFound => Some("path not found; it may have been removed concurrently."),
        io::ErrorKind::AlreadyExists => Some("already exists; remove the stale entry and retry."),
        _ => None,
    }
}

/// Format `"<op> '<path>': <os error> - <hint> [os code: N]"`.
pub fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    match e.raw_os_error() {
        Some(code) => {
            if let Some(hint) = os_hint(code) {
                msg.push_str(" - ");
                msg.push_str(hint);
            }
            msg.push_str(&format!(" [os code: {}]", code));
        }
        None => {
            if let Some(hint) = kind_hint(e.kind()) {
                msg.push_str(" - ");
                msg.push_str(hint);
            }
        }
    }
    msg
}

/// Same as [`describe_io_error`] for a rename between two paths.
pub fn describe_rename_error(from: &Path, to: &Path, e: &io::Error) -> String {
    let op = format!("rename to '{}' from", to.display());
    describe_io_error(&op, from, e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notfound_fallback_hint_includes_path() {
        let p = Path::new("/nonexistent/path/for/test");
        let msg = describe_io_error("open", p, &io::Error::from(io::ErrorKind::NotFound));
        assert!(msg.contains("open"));
        assert!(msg.contains("/nonexistent/path/for/test"));
        assert!(msg.contains("path not found"));
        assert!(!msg.contains("os code"));
    }

    #[cfg(unix)]
    #[test]
    fn enospc_hint_and_code_present() {
        let p = Path::new("/tmp");
        let msg = describe_io_error("rename", p, &io::Error::from_raw_os_error(libc::ENOSPC));
        assert!(msg.contains("insufficient space"), "msg was: {}", msg);
        assert!(msg.contains(&format!("[os code: {}]", libc::ENOSPC)));
    }

    #[cfg(unix)]
    #[test]
    fn enotempty_hint_present() {
        let p = Path::new("/tmp/.renumber-staging.0");
        let msg = describe_io_error(
            "remove staging directory",
            p,
            &io::Error::from_raw_os_error(libc::ENOTEMPTY),
        );
        assert!(msg.contains("not empty"), "msg was: {}", msg);
    }

    #[test]
    fn rename_message_names_both_paths() {
        let msg = describe_rename_error(
            Path::new("dir/a.txt"),
            Path::new("dir/.stage/0.txt"),
            &io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(msg.contains("dir/a.txt"));
        assert!(msg.contains("dir/.stage/0.txt"));
        assert!(msg.contains("permission denied"));
    }
}
