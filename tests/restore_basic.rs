#![cfg(unix)]

use nosync::{Configuration, Options, Outcome, exclude, inspect, restore};
use std::fs;
use tempfile::tempdir;

#[test]
fn restore_undoes_a_prior_exclude() {
    let td = tempdir().unwrap();
    let dir = td.path().join("Projects");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("a.txt"), "alpha").unwrap();

    exclude(&dir, &Options::default()).unwrap();
    let outcome = restore(&dir, &Options::default()).unwrap();
    assert_eq!(outcome, Outcome::Transitioned);

    assert!(dir.is_dir());
    assert!(
        !fs::symlink_metadata(&dir)
            .unwrap()
            .file_type()
            .is_symlink()
    );
    assert!(!td.path().join("Projects.nosync").exists());
    assert_eq!(fs::read_to_string(dir.join("a.txt")).unwrap(), "alpha");
    assert_eq!(inspect(&dir).unwrap().state, Configuration::Active);
}

#[test]
fn restore_accepts_the_marked_name() {
    let td = tempdir().unwrap();
    let dir = td.path().join("Projects");
    fs::create_dir(&dir).unwrap();

    exclude(&dir, &Options::default()).unwrap();
    let outcome = restore(&td.path().join("Projects.nosync"), &Options::default()).unwrap();
    assert_eq!(outcome, Outcome::Transitioned);
    assert_eq!(inspect(&dir).unwrap().state, Configuration::Active);
}

#[test]
fn restore_twice_is_a_noop() {
    let td = tempdir().unwrap();
    let dir = td.path().join("Projects");
    fs::create_dir(&dir).unwrap();

    exclude(&dir, &Options::default()).unwrap();
    assert_eq!(
        restore(&dir, &Options::default()).unwrap(),
        Outcome::Transitioned
    );
    assert_eq!(
        restore(&dir, &Options::default()).unwrap(),
        Outcome::AlreadyInTarget
    );
}
