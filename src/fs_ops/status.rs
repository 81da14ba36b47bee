//! Read-only state inspection.
//! Classifies a path into one of the four on-disk configurations without
//! mutating anything. Nothing is cached: the filesystem is the sole source
//! of truth and every call recomputes from scratch.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::errors::NosyncError;

use super::entry::EntryPair;
use super::probe;

/// The mutually exclusive on-disk configurations of an entry pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Configuration {
    /// The logical path is a real directory; the marked slot is empty.
    Active,
    /// The marked path is a real directory bridged by the expected symlink.
    Excluded,
    /// Something occupies a slot that is neither the expected directory nor
    /// the expected symlink.
    Foreign,
    /// Neither slot is occupied.
    Missing,
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Configuration::Active => "active",
            Configuration::Excluded => "excluded",
            Configuration::Foreign => "foreign",
            Configuration::Missing => "missing",
        };
        f.write_str(s)
    }
}

/// Snapshot of an entry pair's observable state.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub logical_path: PathBuf,
    pub marked_path: PathBuf,
    /// Whether the logical slot holds a symlink (matching or not).
    pub has_symlink: bool,
    /// The raw symlink target, when one is present.
    pub symlink_target: Option<PathBuf>,
    /// Whether the real directory currently lives at the marked path.
    pub real_is_marked: bool,
    pub state: Configuration,
}

/// Inspect the current configuration of `path` (either name form accepted).
///
/// Fails with `NotFound` only when neither candidate slot is occupied; any
/// other unreadable state propagates as `Io`.
pub fn inspect(path: &Path) -> Result<StatusReport, NosyncError> {
    let pair = EntryPair::from_path(path)?;

    let symlink_target = probe::symlink_target(&pair.logical_path)?;
    let has_symlink = symlink_target.is_some();
    let real_is_marked = probe::is_real_dir(&pair.marked_path)?;

    let state = classify(&pair)?;
    if state == Configuration::Missing {
        return Err(NosyncError::NotFound(path.to_path_buf()));
    }

    debug!(
        logical = %pair.logical_path.display(),
        marked = %pair.marked_path.display(),
        %state,
        "inspected"
    );

    Ok(StatusReport {
        logical_path: pair.logical_path,
        marked_path: pair.marked_path,
        has_symlink,
        symlink_target,
        real_is_marked,
        state,
    })
}

/// Total classification of an entry pair into a `Configuration`.
///
/// Resolution order: a real directory at the marked path wins (Excluded when
/// the matching symlink bridges it, Foreign otherwise); then a real,
/// non-symlink directory at the logical path with an empty marked slot is
/// Active; then two empty slots are Missing; everything else is Foreign.
pub(crate) fn classify(pair: &EntryPair) -> Result<Configuration, NosyncError> {
    if probe::is_real_dir(&pair.marked_path)? {
        return if probe::symlink_points_to(&pair.logical_path, &pair.marked_name)? {
            Ok(Configuration::Excluded)
        } else {
            Ok(Configuration::Foreign)
        };
    }

    let logical_is_link = probe::is_symlink(&pair.logical_path)?;
    if !logical_is_link && probe::is_real_dir(&pair.logical_path)? {
        return if probe::entry_exists(&pair.marked_path)? {
            // Marked slot holds a non-directory leftover.
            Ok(Configuration::Foreign)
        } else {
            Ok(Configuration::Active)
        };
    }

    if !probe::entry_exists(&pair.logical_path)? && !probe::entry_exists(&pair.marked_path)? {
        return Ok(Configuration::Missing);
    }

    Ok(Configuration::Foreign)
}
