//! File access for native callers.
//!
//! Handles are owned by exactly one caller. Every IO failure becomes a
//! [`Status`] whose message starts with the path involved.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::iter;
use std::path::{Component, Path, PathBuf};

use globset::GlobBuilder;
use ignore::WalkBuilder;
use strand_types::{Status, StatusOr};

use crate::hts_verbose::{self, HtsLogLevel};

/// Characters that make a path component a pattern rather than a literal.
const GLOB_META: [char; 4] = ['*', '?', '[', '{'];

/// A file opened for writing. Created (or truncated) on open.
///
/// Call [`close`](Self::close) to observe flush and sync errors; dropping an
/// unclosed handle flushes best-effort and logs failures.
#[derive(Debug)]
pub struct WritableFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl WritableFile {
    pub fn create(path: impl AsRef<Path>) -> StatusOr<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|e| Status::from_io(path.display(), &e))?;
        if hts_verbose::enabled(HtsLogLevel::Debug) {
            tracing::debug!(path = %path.display(), "Opened file for writing");
        }
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&mut self, contents: &str) -> StatusOr<()> {
        self.writer
            .write_all(contents.as_bytes())
            .map_err(|e| Status::from_io(self.path.display(), &e))
    }

    /// Flush buffered data and sync it to disk.
    pub fn close(mut self) -> StatusOr<()> {
        self.writer
            .flush()
            .map_err(|e| Status::from_io(self.path.display(), &e))?;
        self.writer
            .get_ref()
            .sync_all()
            .map_err(|e| Status::from_io(self.path.display(), &e))
    }
}

// After a successful `close` the buffer is empty and this flush is a no-op.
impl Drop for WritableFile {
    fn drop(&mut self) {
        if let Err(err) = self.writer.flush() {
            tracing::warn!(path = %self.path.display(), "Failed to flush unclosed file: {err}");
        }
    }
}

/// A file opened for line-by-line reading.
#[derive(Debug)]
pub struct ReadableFile {
    path: PathBuf,
    reader: BufReader<File>,
}

impl ReadableFile {
    pub fn open(path: impl AsRef<Path>) -> StatusOr<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|e| Status::from_io(path.display(), &e))?;
        Ok(Self {
            path,
            reader: BufReader::new(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next line including its trailing newline, if the file has one.
    /// Returns `None` at end of file.
    pub fn readline(&mut self) -> StatusOr<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| Status::from_io(self.path.display(), &e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Remaining lines, in file order. Stops after the first error.
    pub fn lines(&mut self) -> impl Iterator<Item = StatusOr<String>> + '_ {
        let mut failed = false;
        iter::from_fn(move || {
            if failed {
                return None;
            }
            match self.readline() {
                Ok(line) => line.map(Ok),
                Err(status) => {
                    failed = true;
                    Some(Err(status))
                }
            }
        })
    }

    pub fn close(self) -> StatusOr<()> {
        Ok(())
    }
}

#[must_use]
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Paths matching `pattern`, sorted.
///
/// Supports `*`, `?`, `[...]`, `{a,b}` within a component and `**` across
/// components. The walk starts at the longest literal directory prefix of
/// the pattern; a missing prefix yields no matches. Repeated separators and
/// interior `.` components are ignored.
pub fn glob(pattern: &str) -> StatusOr<Vec<String>> {
    glob_from(Path::new("."), pattern)
}

/// [`glob`] with relative patterns resolved against `cwd`. Matches are
/// reported in the pattern's own form, relative or absolute.
fn glob_from(cwd: &Path, pattern: &str) -> StatusOr<Vec<String>> {
    let normalized: PathBuf = Path::new(pattern).components().collect();
    let normalized = normalized.to_string_lossy();
    let matcher = GlobBuilder::new(&normalized)
        .literal_separator(true)
        .build()
        .map_err(|e| {
            Status::invalid_argument(format!("invalid glob pattern '{pattern}': {e}"))
        })?
        .compile_matcher();

    let (base, depth) = split_literal_prefix(Path::new(normalized.as_ref()));
    let Some(depth) = depth else {
        // No metacharacters: the pattern names a single path.
        return Ok(if !pattern.is_empty() && exists(cwd.join(pattern)) {
            vec![pattern.to_string()]
        } else {
            Vec::new()
        });
    };

    let root = if base.as_os_str().is_empty() {
        cwd.to_path_buf()
    } else {
        cwd.join(&base)
    };
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut walker = WalkBuilder::new(&root);
    walker.standard_filters(false).follow_links(false);
    if let Some(depth) = depth {
        walker.max_depth(Some(depth));
    }

    let mut matches = Vec::new();
    for entry in walker.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(pattern, "Skipping unreadable glob entry: {err}");
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let Ok(below) = entry.path().strip_prefix(&root) else {
            continue;
        };
        let candidate = base.join(below);
        if !matcher.is_match(&candidate) {
            continue;
        }
        match candidate.into_os_string().into_string() {
            Ok(path) => matches.push(path),
            Err(raw) => {
                tracing::debug!(pattern, path = ?raw, "Skipping non-UTF-8 glob match");
            }
        }
    }
    matches.sort();
    if hts_verbose::enabled(HtsLogLevel::Debug) {
        tracing::debug!(pattern, count = matches.len(), "Glob matched");
    }
    Ok(matches)
}

/// Split `pattern` into its literal directory prefix and the walk depth
/// needed below it.
///
/// The outer `Option` is `None` when the pattern has no metacharacters at
/// all. The inner `Option` is `None` for unbounded (`**`) depth.
fn split_literal_prefix(pattern: &Path) -> (PathBuf, Option<Option<usize>>) {
    let mut base = PathBuf::new();
    let mut components = pattern.components().peekable();
    while let Some(component) = components.peek() {
        if is_pattern_component(component) {
            break;
        }
        base.push(component);
        components.next();
    }

    let rest: Vec<Component<'_>> = components.collect();
    if rest.is_empty() {
        return (base, None);
    }
    let unbounded = rest.iter().any(|c| c.as_os_str() == "**");
    let depth = if unbounded { None } else { Some(rest.len()) };
    (base, Some(depth))
}

fn is_pattern_component(component: &Component<'_>) -> bool {
    match component {
        Component::Normal(part) => part.to_string_lossy().contains(GLOB_META),
        _ => false,
    }
}
