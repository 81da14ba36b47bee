//! The `.nosync` suffix codec.
//! Pure string functions, no filesystem access. The literal is load-bearing:
//! the external sync service keys off this exact suffix.

/// Reserved suffix that excludes a directory from the sync scan.
pub const NOSYNC_SUFFIX: &str = ".nosync";

/// Whether `name` already carries the marker suffix.
pub fn is_marked(name: &str) -> bool {
    name.ends_with(NOSYNC_SUFFIX)
}

/// Append the marker suffix unless already present (idempotent).
pub fn marked(name: &str) -> String {
    if is_marked(name) {
        name.to_string()
    } else {
        format!("{name}{NOSYNC_SUFFIX}")
    }
}

/// Strip the marker suffix if present, else return the input unchanged (idempotent).
pub fn unmarked(name: &str) -> &str {
    name.strip_suffix(NOSYNC_SUFFIX).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marked_appends_suffix() {
        assert_eq!(marked("Projects"), "Projects.nosync");
    }

    #[test]
    fn marked_is_idempotent() {
        assert_eq!(marked("Projects.nosync"), "Projects.nosync");
        assert_eq!(marked(&marked("Projects")), marked("Projects"));
    }

    #[test]
    fn unmarked_strips_suffix() {
        assert_eq!(unmarked("Projects.nosync"), "Projects");
        assert_eq!(unmarked("Projects"), "Projects");
    }

    #[test]
    fn unmarked_of_marked_equals_unmarked() {
        for name in ["Projects", "Projects.nosync", "a.b", ".hidden", "x.nosync.nosync"] {
            assert_eq!(unmarked(&marked(name)), unmarked(name));
        }
    }

    #[test]
    fn dotted_names_keep_inner_dots() {
        assert_eq!(marked("photos.2024"), "photos.2024.nosync");
        assert_eq!(unmarked("photos.2024.nosync"), "photos.2024");
    }

    #[test]
    fn bare_suffix_unmarks_to_empty() {
        // EntryPair rejects this form; the codec itself stays total.
        assert_eq!(unmarked(".nosync"), "");
        assert!(is_marked(".nosync"));
    }
}
