//! Name helpers: basenames, extensions and the zero-padded sequence format.

use std::ffi::{OsStr, OsString};

/// Final component of an argv-style path, or the whole string when it has
/// no separator.
pub fn base_name(path: &str) -> &str {
    #[cfg(windows)]
    let cut = path.rfind(['/', '\\']);
    #[cfg(not(windows))]
    let cut = path.rfind('/');
    match cut {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

/// Extension of `name` including the dot: `"photo.jpg"` -> `".jpg"`.
/// A dot-leading name with no other dot is all extension (`".bashrc"`).
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) => &name[i..],
        None => "",
    }
}

/// [`extension_of`] for file names that may not be valid UTF-8.
pub fn os_extension_of(name: &OsStr) -> &OsStr {
    let bytes = name.as_encoded_bytes();
    match bytes.iter().rposition(|&b| b == b'.') {
        // SAFETY: the split point sits right before an ASCII byte, which is a
        // valid boundary of the platform encoding.
        Some(i) => unsafe { OsStr::from_encoded_bytes_unchecked(&bytes[i..]) },
        None => OsStr::new(""),
    }
}

/// Digits needed to print the largest index of `count` files (minimum 1).
pub fn pad_width(count: usize) -> usize {
    let mut largest = count.saturating_sub(1);
    let mut width = 1;
    while largest >= 10 {
        largest /= 10;
        width += 1;
    }
    width
}

/// Leading decimal index of a canonical name: `"007.png"` -> `Some(7)`.
pub fn parse_index(name: &OsStr) -> Option<u64> {
    let bytes = name.as_encoded_bytes();
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    std::str::from_utf8(&bytes[..digits]).ok()?.parse().ok()
}

/// Fixed-width naming scheme for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameFormat {
    width: usize,
}

impl NameFormat {
    /// Format sized for `count` files.
    pub fn for_count(count: usize) -> Self {
        Self {
            width: pad_width(count),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `index` zero-padded to the width, followed by `ext` unchanged.
    pub fn canonical_name(&self, index: usize, ext: &OsStr) -> OsString {
        let mut name = OsString::from(format!("{:0width$}", index, width = self.width));
        name.push(ext);
        name
    }
}
