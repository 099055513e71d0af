// src/sheet/fs_utils.rs

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Write through a sibling temp file, then rename it over `path`.
/// A failed write leaves the previous target untouched.
pub(crate) fn replace_file<F>(path: &Path, write: F) -> AppResult<()>
where
    F: FnOnce(&Path) -> AppResult<()>,
{
    let tmp = temp_sibling(path);

    if let Err(e) = write(&tmp) {
        fs::remove_file(&tmp).ok();
        return Err(e);
    }

    fs::rename(&tmp, path).map_err(|e| {
        fs::remove_file(&tmp).ok();
        AppError::TargetWrite(format!("cannot replace '{}': {e}", path.display()))
    })
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "target".to_string());

    // same directory, so the final rename stays on one filesystem
    path.with_file_name(format!(".{name}.tmp-{}", std::process::id()))
}
