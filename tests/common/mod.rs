//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use strand_bindings::BoundaryFailure;

/// Assert that `result` failed at the boundary and that its rendered text
/// matches `pattern`. Returns the failure for further checks.
#[track_caller]
pub fn assert_raises_regex<T: Debug>(
    result: Result<T, BoundaryFailure>,
    pattern: &str,
) -> BoundaryFailure {
    let err = match result {
        Ok(value) => panic!("expected a BoundaryFailure matching /{pattern}/, got Ok({value:?})"),
        Err(err) => err,
    };
    let re = Regex::new(pattern).expect("test pattern is valid");
    assert!(
        re.is_match(&err.to_string()),
        "'{err}' does not match /{pattern}/"
    );
    err
}

/// Write `contents` to `relative` under `dir`, creating parent directories.
pub fn write_fixture(dir: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}
