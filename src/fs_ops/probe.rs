//! Read-only, symlink-aware filesystem queries.
//! Existence and symlink checks use `symlink_metadata` (no following);
//! real-directory checks use `metadata` (following). `NotFound` maps to
//! absent; every other failure surfaces as `NosyncError::Io`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::NosyncError;

/// Whether anything occupies `path` (a dangling symlink counts).
pub(crate) fn entry_exists(path: &Path) -> Result<bool, NosyncError> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(NosyncError::io("stat", path)(e)),
    }
}

/// Whether `path` itself is a symlink.
pub(crate) fn is_symlink(path: &Path) -> Result<bool, NosyncError> {
    match fs::symlink_metadata(path) {
        Ok(meta) => Ok(meta.file_type().is_symlink()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(NosyncError::io("stat", path)(e)),
    }
}

/// The raw symlink target, or `None` when `path` is absent or not a symlink.
pub(crate) fn symlink_target(path: &Path) -> Result<Option<PathBuf>, NosyncError> {
    if !is_symlink(path)? {
        return Ok(None);
    }
    fs::read_link(path)
        .map(Some)
        .map_err(NosyncError::io("readlink", path))
}

/// Whether `path` resolves to a real directory (symlinks followed; a
/// dangling symlink is not a directory).
pub(crate) fn is_real_dir(path: &Path) -> Result<bool, NosyncError> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(NosyncError::io("stat", path)(e)),
    }
}

/// Whether `link` is a symlink whose target names `want_target_base`.
///
/// The comparison is lenient: an exact match or a matching final component
/// both count, so a pair stays recognized even if the link was created with
/// an absolute target or the parent directory has since moved.
pub(crate) fn symlink_points_to(link: &Path, want_target_base: &str) -> Result<bool, NosyncError> {
    let Some(target) = symlink_target(link)? else {
        return Ok(false);
    };
    if target.as_os_str() == want_target_base {
        return Ok(true);
    }
    Ok(target
        .file_name()
        .is_some_and(|base| base == want_target_base))
}
