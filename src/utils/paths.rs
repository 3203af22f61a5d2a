//! Path display helpers.

use std::path::Path;

/// File name component of `path` for use in diagnostics, falling back to
/// the full path when there is no final component (e.g. `..`).
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
