//! Input normalization: one place that turns a caller-supplied path into
//! the canonical pair of candidate paths, before any decision is made.
//! Callers may address either the logical or the marked form; both derive
//! the same pair.

use std::path::{Path, PathBuf};

use crate::errors::NosyncError;
use crate::marker;

/// The two candidate locations for one directory entry. A view, recomputed
/// per call; transitions mutate the filesystem, never this value.
#[derive(Debug, Clone)]
pub struct EntryPair {
    /// Absolute path of the containing directory.
    pub parent: PathBuf,
    /// Basename without the marker suffix.
    pub logical_name: String,
    /// Basename with the marker suffix.
    pub marked_name: String,
    /// `parent` joined with `logical_name`.
    pub logical_path: PathBuf,
    /// `parent` joined with `marked_name`.
    pub marked_path: PathBuf,
    /// Whether the caller addressed the marked form directly.
    pub input_was_marked: bool,
}

impl EntryPair {
    /// Derive the pair from an absolute input path.
    ///
    /// The final component must be valid UTF-8 (the marker contract is
    /// textual) and must not be the bare marker suffix itself.
    pub fn from_path(input: &Path) -> Result<Self, NosyncError> {
        let base = input
            .file_name()
            .ok_or_else(|| NosyncError::invalid_input(input, "path has no base name"))?;
        let base = base
            .to_str()
            .ok_or_else(|| NosyncError::invalid_input(input, "base name is not valid UTF-8"))?;
        let parent = input
            .parent()
            .ok_or_else(|| NosyncError::invalid_input(input, "path has no parent directory"))?
            .to_path_buf();

        let logical_name = marker::unmarked(base).to_string();
        if logical_name.is_empty() {
            return Err(NosyncError::invalid_input(
                input,
                "name is only the marker suffix",
            ));
        }
        let marked_name = marker::marked(base);

        let logical_path = parent.join(&logical_name);
        let marked_path = parent.join(&marked_name);

        Ok(EntryPair {
            parent,
            logical_name,
            marked_name,
            logical_path,
            marked_path,
            input_was_marked: marker::is_marked(base),
        })
    }
}
