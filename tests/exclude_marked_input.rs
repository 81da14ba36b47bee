#![cfg(unix)]

use nosync::{Configuration, Options, Outcome, exclude, inspect};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn marked_input_creates_the_missing_symlink() {
    let td = tempdir().unwrap();
    let marked = td.path().join("Projects.nosync");
    fs::create_dir(&marked).unwrap();

    let outcome = exclude(&marked, &Options::default()).unwrap();
    assert_eq!(outcome, Outcome::Transitioned);

    let link = td.path().join("Projects");
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_link(&link).unwrap(), Path::new("Projects.nosync"));
    assert_eq!(inspect(&link).unwrap().state, Configuration::Excluded);
}

#[test]
fn marked_input_with_correct_symlink_is_a_noop() {
    let td = tempdir().unwrap();
    fs::create_dir(td.path().join("Projects.nosync")).unwrap();
    std::os::unix::fs::symlink("Projects.nosync", td.path().join("Projects")).unwrap();

    let outcome = exclude(&td.path().join("Projects.nosync"), &Options::default()).unwrap();
    assert_eq!(outcome, Outcome::AlreadyInTarget);
}

#[test]
fn marked_input_with_occupied_logical_slot_is_a_conflict() {
    let td = tempdir().unwrap();
    fs::create_dir(td.path().join("Projects.nosync")).unwrap();
    fs::write(td.path().join("Projects"), "in the way").unwrap();

    let err = exclude(&td.path().join("Projects.nosync"), &Options::default()).unwrap_err();
    assert_eq!(err.kind(), "conflict");
    assert_eq!(
        fs::read_to_string(td.path().join("Projects")).unwrap(),
        "in the way"
    );
}

#[test]
fn marked_input_with_foreign_symlink_is_a_conflict() {
    let td = tempdir().unwrap();
    fs::create_dir(td.path().join("Projects.nosync")).unwrap();
    fs::create_dir(td.path().join("other")).unwrap();
    std::os::unix::fs::symlink("other", td.path().join("Projects")).unwrap();

    let err = exclude(&td.path().join("Projects.nosync"), &Options::default()).unwrap_err();
    assert_eq!(err.kind(), "conflict");
}
