//! The exclude transition: Active -> Excluded.
//! Renames the directory to its marked name, then bridges the original
//! location with a symlink. The rename is the one reversible multi-step
//! mutation in this tool: if link creation fails, a single compensating
//! rename restores the pre-operation state.

use std::env;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::errors::NosyncError;
use crate::marker::NOSYNC_SUFFIX;
use crate::options::Options;
use crate::output;

use super::Outcome;
use super::entry::EntryPair;
use super::probe;

/// Move a directory into the excluded state.
///
/// Accepts either name form. A marked-name input means "ensure the symlink
/// exists for this already-marked directory" rather than a rename.
pub fn exclude(path: &Path, opts: &Options) -> Result<Outcome, NosyncError> {
    let pair = EntryPair::from_path(path)?;
    if pair.input_was_marked {
        ensure_symlink(&pair, opts)
    } else {
        exclude_logical(&pair, opts)
    }
}

/// Marked-name input: the directory already carries the suffix; only the
/// bridge symlink may be missing.
fn ensure_symlink(pair: &EntryPair, opts: &Options) -> Result<Outcome, NosyncError> {
    if probe::entry_exists(&pair.logical_path)? {
        if probe::symlink_points_to(&pair.logical_path, &pair.marked_name)? {
            debug!(link = %pair.logical_path.display(), "already excluded: symlink exists");
            return Ok(Outcome::AlreadyInTarget);
        }
        return Err(NosyncError::conflict(
            &pair.logical_path,
            format!("exists and is not a symlink to '{}'", pair.marked_name),
        ));
    }

    if opts.dry_run {
        output::print_user(&format!(
            "DRY-RUN: ln -s {} {}",
            pair.marked_name,
            pair.logical_path.display()
        ));
        return Ok(Outcome::DryRun);
    }

    link_step(pair)?;
    info!(
        link = %pair.logical_path.display(),
        target = %pair.marked_name,
        "created symlink for marked directory"
    );
    Ok(Outcome::Transitioned)
}

/// Logical-name input: full rename-then-link sequence with rollback.
fn exclude_logical(pair: &EntryPair, opts: &Options) -> Result<Outcome, NosyncError> {
    if let Some(target) = probe::symlink_target(&pair.logical_path)? {
        // A symlink already occupies the slot; decide by its target.
        if target.to_string_lossy().ends_with(NOSYNC_SUFFIX) {
            debug!(link = %pair.logical_path.display(), "already excluded: symlink points to a marked target");
            return Ok(Outcome::AlreadyInTarget);
        }
        return Err(NosyncError::conflict(
            &pair.logical_path,
            format!(
                "is a symlink to '{}', which does not carry the {} suffix",
                target.display(),
                NOSYNC_SUFFIX
            ),
        ));
    }

    if !probe::entry_exists(&pair.logical_path)? {
        return Err(NosyncError::NotFound(pair.logical_path.clone()));
    }
    if !probe::is_real_dir(&pair.logical_path)? {
        return Err(NosyncError::invalid_input(
            &pair.logical_path,
            "not a directory",
        ));
    }
    if probe::entry_exists(&pair.marked_path)? {
        return Err(NosyncError::conflict(
            &pair.marked_path,
            "target already exists; check `nosync status` or run `nosync restore`",
        ));
    }

    if opts.dry_run {
        output::print_user(&format!(
            "DRY-RUN: mv {} {}",
            pair.logical_path.display(),
            pair.marked_path.display()
        ));
        output::print_user(&format!(
            "DRY-RUN: ln -s {} {}",
            pair.marked_name,
            pair.logical_path.display()
        ));
        return Ok(Outcome::DryRun);
    }

    fs::rename(&pair.logical_path, &pair.marked_path)
        .map_err(NosyncError::io("rename", &pair.logical_path))?;

    if let Err(e) = link_step(pair) {
        // Compensating rename; attempted once, never retried. On rollback
        // failure the directory stays marked without a symlink, which
        // `status` reports as foreign rather than hiding it.
        match fs::rename(&pair.marked_path, &pair.logical_path) {
            Ok(()) => debug!(
                dir = %pair.logical_path.display(),
                "rolled back rename after failed symlink creation"
            ),
            Err(rb) => warn!(
                dir = %pair.marked_path.display(),
                error = %rb,
                "rollback rename failed; directory left marked without a symlink"
            ),
        }
        return Err(e);
    }

    info!(
        dir = %pair.marked_path.display(),
        link = %pair.logical_path.display(),
        "excluded directory"
    );
    Ok(Outcome::Transitioned)
}

/// Create the bridge symlink. The target is the bare marked name, not an
/// absolute path, so the pair survives a move of the parent directory.
fn link_step(pair: &EntryPair) -> Result<(), NosyncError> {
    // Env override so integration tests can exercise the rollback path.
    if env::var_os("NOSYNC_FORCE_LINK_FAIL").is_some() {
        return Err(NosyncError::Io {
            op: "symlink",
            path: pair.logical_path.clone(),
            source: io::Error::other("forced failure (NOSYNC_FORCE_LINK_FAIL)"),
        });
    }
    make_symlink(&pair.marked_name, &pair.logical_path)
}

#[cfg(unix)]
fn make_symlink(target: &str, link: &Path) -> Result<(), NosyncError> {
    std::os::unix::fs::symlink(target, link).map_err(NosyncError::io("symlink", link))
}

#[cfg(windows)]
fn make_symlink(target: &str, link: &Path) -> Result<(), NosyncError> {
    std::os::windows::fs::symlink_dir(target, link).map_err(NosyncError::io("symlink", link))
}
