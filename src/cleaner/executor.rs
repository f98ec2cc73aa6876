//! Executor that removes (or just records) resolved paths.

use crate::cleaner::summary::Summary;
use crate::error::{CleanError, Result};
use crate::mode::Mode;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Whether a recorded path was a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
        }
    }
}

/// Snapshot of a path taken just before it is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRecord {
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Bytes held by the path, recursively for directories.
    pub size: u64,
}

impl DeleteRecord {
    /// Inspect `path`, returning `None` when nothing is there.
    ///
    /// Symlinks are not followed.
    pub fn inspect(path: &Path) -> Option<Self> {
        let metadata = fs::symlink_metadata(path).ok()?;
        let (kind, size) = if metadata.is_dir() {
            (EntryKind::Directory, dir_size(path))
        } else {
            (EntryKind::File, metadata.len())
        };
        Some(Self {
            path: path.to_path_buf(),
            kind,
            size,
        })
    }
}

/// Applies or simulates removal according to the run's [`Mode`].
///
/// Every existing path is folded into the borrowed [`Summary`]; removal
/// failures are logged and never stop the run.
pub struct DeleteExecutor<'a> {
    mode: Mode,
    summary: &'a mut Summary,
}

impl<'a> DeleteExecutor<'a> {
    pub fn new(mode: Mode, summary: &'a mut Summary) -> Self {
        Self { mode, summary }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Record `path` and, outside readonly mode, delete it.
    ///
    /// A path that no longer exists is ignored.
    pub fn remove(&mut self, path: &Path) {
        let Some(record) = DeleteRecord::inspect(path) else {
            return;
        };
        self.summary.record(&record);

        if self.mode.readonly() {
            return;
        }
        if let Err(e) = Self::delete(&record) {
            tracing::warn!("{}", e);
        }
    }

    fn delete(record: &DeleteRecord) -> Result<()> {
        let removed = match record.kind {
            EntryKind::Directory => fs::remove_dir_all(&record.path),
            EntryKind::File => fs::remove_file(&record.path),
        };
        removed.map_err(|e| CleanError::io(&record.path, e))
    }
}

/// Total size of the regular files below `path`.
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .flatten()
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}
