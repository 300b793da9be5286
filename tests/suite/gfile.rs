//! File bindings

use strand_bindings::StatusCode;
use strand_bindings::gfile::{ReadableFile, WritableFile, exists, glob};
use tempfile::TempDir;

use crate::common::{assert_raises_regex, write_fixture};

#[test]
fn writable_then_readable_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calls.vcf");

    let mut out = WritableFile::new(&path).unwrap();
    out.write("##fileformat=VCFv4.2\n").unwrap();
    out.write("chr1\t100\n").unwrap();
    out.close().unwrap();
    assert!(exists(&path));

    let mut input = ReadableFile::new(&path).unwrap();
    assert_eq!(
        input.readline().unwrap().as_deref(),
        Some("##fileformat=VCFv4.2\n")
    );
    assert_eq!(input.readline().unwrap().as_deref(), Some("chr1\t100\n"));
    assert_eq!(input.readline().unwrap(), None);
    input.close().unwrap();
}

#[test]
fn read_lines_returns_file_order() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "reads.txt", "c\na\nb");

    let mut input = ReadableFile::new(&path).unwrap();
    assert_eq!(input.read_lines().unwrap(), vec!["c\n", "a\n", "b"]);
}

#[test]
fn opening_missing_file_names_operation_and_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.bam");

    let err = assert_raises_regex(
        ReadableFile::new(&path),
        r"^gfile\.ReadableFile\.New: NOT_FOUND: .*absent\.bam",
    );
    assert_eq!(err.code(), StatusCode::NotFound);
}

#[test]
fn creating_in_missing_directory_raises() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no").join("such").join("dir.txt");
    assert_raises_regex(WritableFile::new(&path), r"gfile\.WritableFile\.New");
}

#[test]
fn glob_returns_sorted_matches() {
    let dir = TempDir::new().unwrap();
    for name in ["s3.bam", "s1.bam", "s2.bam", "s1.bam.bai"] {
        write_fixture(dir.path(), name, "");
    }

    let pattern = format!("{}/s?.bam", dir.path().display());
    let found = glob(&pattern).unwrap();
    let names: Vec<&str> = found
        .iter()
        .map(|p| p.rsplit('/').next().unwrap())
        .collect();
    assert_eq!(names, vec!["s1.bam", "s2.bam", "s3.bam"]);
}

#[test]
fn glob_invalid_pattern_raises() {
    assert_raises_regex(glob("[z-a"), r"^gfile\.Glob: INVALID_ARGUMENT");
}
