//! Path expansion and default path helpers.
//! Expands `~`, absolutizes against the current directory, and cleans the
//! result lexically. Symlinks are never resolved here: the logical path a
//! user addresses may itself be a symlink this tool manages.

use std::env;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::errors::NosyncError;

/// Resolve a raw user-supplied path to an absolute, lexically cleaned path.
///
/// - empty input is `InvalidInput`
/// - `~` and `~/...` expand to the user's home directory
/// - `~user` forms pass through untouched
/// - relative paths are joined to the current directory
/// - `.` components are dropped and `..` components pop lexically
pub fn expand_path(raw: &Path) -> Result<PathBuf, NosyncError> {
    if raw.as_os_str().is_empty() {
        return Err(NosyncError::invalid_input(raw, "empty path"));
    }

    let expanded = match raw.to_str() {
        Some("~") => {
            dirs::home_dir().ok_or_else(|| NosyncError::invalid_input(raw, "cannot determine home directory"))?
        }
        Some(s) if s.starts_with("~/") => {
            let home = dirs::home_dir()
                .ok_or_else(|| NosyncError::invalid_input(raw, "cannot determine home directory"))?;
            home.join(&s[2..])
        }
        // Non-UTF-8 or no tilde: take the path as given.
        _ => raw.to_path_buf(),
    };

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(NosyncError::io("getcwd", raw))?;
        cwd.join(expanded)
    };

    Ok(clean(&absolute))
}

/// Lexical cleanup: drop `.`, pop on `..` (never past the root).
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    out.pop();
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// OS-appropriate default log file path (data dir).
pub fn default_log_path() -> Option<PathBuf> {
    if let Some(mut base) = dirs::data_dir() {
        base.push("nosync");
        // ensure dir exists (best-effort)
        let _ = fs::create_dir_all(&base);
        base.push("nosync.log");
        Some(base)
    } else {
        env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".local")
                .join("share")
                .join("nosync")
                .join("nosync.log")
        })
    }
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn empty_path_is_invalid() {
        let err = expand_path(Path::new("")).unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
    }

    #[test]
    fn absolute_path_passes_through() {
        let p = expand_path(Path::new("/tmp/somewhere")).unwrap();
        assert_eq!(p, PathBuf::from("/tmp/somewhere"));
    }

    #[test]
    fn relative_path_joins_cwd() {
        let p = expand_path(Path::new("sub/dir")).unwrap();
        let cwd = env::current_dir().unwrap();
        assert_eq!(p, cwd.join("sub/dir"));
    }

    #[test]
    fn dot_and_dotdot_are_cleaned() {
        let p = expand_path(Path::new("/a/b/../c/./d")).unwrap();
        assert_eq!(p, PathBuf::from("/a/c/d"));
    }

    #[test]
    fn dotdot_does_not_escape_root() {
        let p = expand_path(Path::new("/../..")).unwrap();
        assert_eq!(p, PathBuf::from("/"));
    }

    #[test]
    #[serial]
    fn tilde_expands_to_home() {
        let td = tempfile::tempdir().unwrap();
        unsafe {
            env::set_var("HOME", td.path());
        }
        let p = expand_path(Path::new("~/Projects")).unwrap();
        assert_eq!(p, td.path().join("Projects"));
        let bare = expand_path(Path::new("~")).unwrap();
        assert_eq!(bare, td.path());
    }

    #[test]
    #[serial]
    fn tilde_user_passes_through() {
        let p = expand_path(Path::new("~somebody/x")).unwrap();
        // Unexpanded and relative, so it lands under the cwd, as in the original tool.
        assert!(p.ends_with("~somebody/x"));
    }
}
