//! Bindings for native file access.
//!
//! Handles wrap the native ones and raise [`BoundaryFailure`] from every
//! fallible call.

use std::path::Path;

use strand_core::gfile as native;
use strand_types::OperationName;

use crate::boundary::{BoundaryFailure, StatusOrExt, raise_if_error, unwrap_or_raise};

const WRITABLE_NEW: OperationName = OperationName::new("gfile.WritableFile.New");
const WRITABLE_WRITE: OperationName = OperationName::new("gfile.WritableFile.write");
const WRITABLE_CLOSE: OperationName = OperationName::new("gfile.WritableFile.close");
const READABLE_NEW: OperationName = OperationName::new("gfile.ReadableFile.New");
const READABLE_READLINE: OperationName = OperationName::new("gfile.ReadableFile.Readline");
const READABLE_CLOSE: OperationName = OperationName::new("gfile.ReadableFile.close");
const GLOB: OperationName = OperationName::new("gfile.Glob");

#[derive(Debug)]
pub struct WritableFile(native::WritableFile);

impl WritableFile {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, BoundaryFailure> {
        unwrap_or_raise(WRITABLE_NEW, native::WritableFile::create(path)).map(Self)
    }

    pub fn write(&mut self, contents: &str) -> Result<(), BoundaryFailure> {
        raise_if_error(WRITABLE_WRITE, self.0.write(contents))
    }

    pub fn close(self) -> Result<(), BoundaryFailure> {
        raise_if_error(WRITABLE_CLOSE, self.0.close())
    }
}

#[derive(Debug)]
pub struct ReadableFile(native::ReadableFile);

impl ReadableFile {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, BoundaryFailure> {
        unwrap_or_raise(READABLE_NEW, native::ReadableFile::open(path)).map(Self)
    }

    /// Next line with its newline, or `None` at end of file.
    pub fn readline(&mut self) -> Result<Option<String>, BoundaryFailure> {
        self.0.readline().or_raise(READABLE_READLINE)
    }

    /// All remaining lines, in file order.
    pub fn read_lines(&mut self) -> Result<Vec<String>, BoundaryFailure> {
        self.0.lines().collect::<Result<Vec<_>, _>>().or_raise(READABLE_READLINE)
    }

    pub fn close(self) -> Result<(), BoundaryFailure> {
        raise_if_error(READABLE_CLOSE, self.0.close())
    }
}

#[must_use]
pub fn exists(path: impl AsRef<Path>) -> bool {
    native::exists(path)
}

pub fn glob(pattern: &str) -> Result<Vec<String>, BoundaryFailure> {
    native::glob(pattern).or_raise(GLOB)
}
