use nosync::{Configuration, inspect};
use std::fs;
use tempfile::tempdir;

#[test]
fn plain_directory_is_active() {
    let td = tempdir().unwrap();
    let dir = td.path().join("Projects");
    fs::create_dir(&dir).unwrap();

    let report = inspect(&dir).unwrap();
    assert_eq!(report.state, Configuration::Active);
    assert!(!report.has_symlink);
    assert!(report.symlink_target.is_none());
    assert!(!report.real_is_marked);
    assert_eq!(report.logical_path, dir);
    assert_eq!(report.marked_path, td.path().join("Projects.nosync"));
}

#[test]
fn missing_pair_is_not_found() {
    let td = tempdir().unwrap();
    let err = inspect(&td.path().join("absent")).unwrap_err();
    assert_eq!(err.kind(), "not_found");
}

#[test]
fn plain_file_in_logical_slot_is_foreign() {
    let td = tempdir().unwrap();
    let file = td.path().join("notes");
    fs::write(&file, "text").unwrap();

    let report = inspect(&file).unwrap();
    assert_eq!(report.state, Configuration::Foreign);
    assert!(!report.real_is_marked);
}

#[cfg(unix)]
#[test]
fn excluded_pair_is_reported_with_symlink_target() {
    let td = tempdir().unwrap();
    let marked = td.path().join("Projects.nosync");
    fs::create_dir(&marked).unwrap();
    std::os::unix::fs::symlink("Projects.nosync", td.path().join("Projects")).unwrap();

    // Either name form yields the same report.
    for input in ["Projects", "Projects.nosync"] {
        let report = inspect(&td.path().join(input)).unwrap();
        assert_eq!(report.state, Configuration::Excluded);
        assert!(report.has_symlink);
        assert_eq!(
            report.symlink_target.as_deref(),
            Some(std::path::Path::new("Projects.nosync"))
        );
        assert!(report.real_is_marked);
    }
}

#[cfg(unix)]
#[test]
fn marked_dir_without_symlink_is_foreign() {
    let td = tempdir().unwrap();
    fs::create_dir(td.path().join("data.nosync")).unwrap();

    let report = inspect(&td.path().join("data")).unwrap();
    assert_eq!(report.state, Configuration::Foreign);
    assert!(!report.has_symlink);
    assert!(report.real_is_marked);
}

#[cfg(unix)]
#[test]
fn foreign_symlink_next_to_marked_dir_is_foreign() {
    let td = tempdir().unwrap();
    fs::create_dir(td.path().join("data.nosync")).unwrap();
    fs::create_dir(td.path().join("elsewhere")).unwrap();
    std::os::unix::fs::symlink("elsewhere", td.path().join("data")).unwrap();

    let report = inspect(&td.path().join("data")).unwrap();
    assert_eq!(report.state, Configuration::Foreign);
    assert!(report.has_symlink);
}

#[cfg(unix)]
#[test]
fn dangling_symlink_alone_is_foreign() {
    let td = tempdir().unwrap();
    std::os::unix::fs::symlink("ghost.nosync", td.path().join("ghost")).unwrap();

    let report = inspect(&td.path().join("ghost")).unwrap();
    assert_eq!(report.state, Configuration::Foreign);
    assert!(report.has_symlink);
    assert!(!report.real_is_marked);
}
