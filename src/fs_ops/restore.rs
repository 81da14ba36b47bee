//! The restore transition: Excluded -> Active.
//! Unlinks the bridge symlink first, then renames the marked directory back.
//! That ordering bounds the window in which the pair looks inconsistent: a
//! crash between the two steps leaves a marked directory with no symlink,
//! which the marked-input recovery path below can finish by hand.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::errors::NosyncError;
use crate::options::Options;
use crate::output;

use super::Outcome;
use super::entry::EntryPair;
use super::probe;

/// Move a directory back into the active state.
///
/// Accepts either name form; both normalize to the same pair.
pub fn restore(path: &Path, opts: &Options) -> Result<Outcome, NosyncError> {
    let pair = EntryPair::from_path(path)?;

    // Primary path: the expected symlink bridges the pair.
    if probe::symlink_points_to(&pair.logical_path, &pair.marked_name)? {
        if opts.dry_run {
            output::print_user(&format!("DRY-RUN: rm {}", pair.logical_path.display()));
            output::print_user(&format!(
                "DRY-RUN: mv {} {}",
                pair.marked_path.display(),
                pair.logical_path.display()
            ));
            return Ok(Outcome::DryRun);
        }

        fs::remove_file(&pair.logical_path)
            .map_err(NosyncError::io("unlink", &pair.logical_path))?;
        if !probe::entry_exists(&pair.marked_path)? {
            return Err(NosyncError::Inconsistent(pair.marked_path.clone()));
        }
        fs::rename(&pair.marked_path, &pair.logical_path)
            .map_err(NosyncError::io("rename", &pair.marked_path))?;

        info!(
            dir = %pair.logical_path.display(),
            "restored directory (symlink removed, renamed back)"
        );
        return Ok(Outcome::Transitioned);
    }

    // Already restored: a real, non-symlink entry holds the logical slot and
    // the marked slot is empty.
    if probe::entry_exists(&pair.logical_path)?
        && !probe::entry_exists(&pair.marked_path)?
        && !probe::is_symlink(&pair.logical_path)?
    {
        debug!(dir = %pair.logical_path.display(), "already restored: no symlink, no marked directory");
        return Ok(Outcome::AlreadyInTarget);
    }

    // Marked-name input: recover a pair whose symlink was lost or never
    // created by renaming the marked directory straight back.
    if pair.input_was_marked {
        if let Some(target) = probe::symlink_target(&pair.logical_path)? {
            // Non-matching by construction: a matching link was handled above.
            return Err(NosyncError::conflict(
                &pair.logical_path,
                format!(
                    "occupied by a symlink to '{}' instead of '{}'",
                    target.display(),
                    pair.marked_name
                ),
            ));
        }
        if probe::entry_exists(&pair.logical_path)? {
            return Err(NosyncError::conflict(
                &pair.logical_path,
                "destination exists and is not a symlink",
            ));
        }

        if opts.dry_run {
            output::print_user(&format!(
                "DRY-RUN: mv {} {}",
                pair.marked_path.display(),
                pair.logical_path.display()
            ));
            return Ok(Outcome::DryRun);
        }

        fs::rename(&pair.marked_path, &pair.logical_path)
            .map_err(NosyncError::io("rename", &pair.marked_path))?;
        info!(
            dir = %pair.logical_path.display(),
            "restored directory (renamed back without symlink)"
        );
        return Ok(Outcome::Transitioned);
    }

    Err(NosyncError::InvalidState {
        link: pair.logical_path.clone(),
        expected_target: pair.marked_name.clone(),
    })
}
