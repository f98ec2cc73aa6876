//! Depth-first crawler that applies the rule catalog to a directory tree.

use crate::cleaner::executor::DeleteExecutor;
use crate::cleaner::override_config::OverrideConfig;
use crate::cleaner::registry::RuleCatalog;
use crate::cleaner::summary::Summary;
use crate::error::{CleanError, Result};
use crate::mode::Mode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// What relative `dirs` entries of a `.clean.yml` are resolved against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JumpBase {
    /// The directory holding the `.clean.yml`.
    #[default]
    Directory,
    /// The process working directory.
    WorkingDirectory,
}

impl JumpBase {
    pub fn resolve(&self, owner: &Path, target: &Path) -> PathBuf {
        match self {
            JumpBase::Directory => owner.join(target),
            JumpBase::WorkingDirectory => target.to_path_buf(),
        }
    }
}

/// Options for crawling.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrawlOptions {
    /// Only descend into subdirectories when the mode has `recurse`.
    pub gated_recursion: bool,
    pub jump_base: JumpBase,
}

/// Visits directories in pre-order: rules first, then jump targets, then
/// subdirectories. A directory's `.clean.yml` is read once per visit and
/// shared by the rules and the jumps.
///
/// Each directory is processed at most once per run, however many jumps
/// lead to it.
pub struct Crawler {
    catalog: RuleCatalog,
    options: CrawlOptions,
}

impl Crawler {
    pub fn new(catalog: RuleCatalog, options: CrawlOptions) -> Self {
        Self { catalog, options }
    }

    /// Crawl from `root` and return the totals of the run.
    ///
    /// Only a malformed `.clean.yml` stops the crawl.
    pub fn run(&self, root: &Path, mode: Mode) -> Result<Summary> {
        let mut summary = Summary::new(mode);
        let mut executor = DeleteExecutor::new(mode, &mut summary);
        let mut visited = HashSet::new();

        self.visit(root, &mut executor, &mut visited)?;

        Ok(summary)
    }

    fn visit(
        &self,
        dir: &Path,
        executor: &mut DeleteExecutor<'_>,
        visited: &mut HashSet<PathBuf>,
    ) -> Result<()> {
        let key = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        if !visited.insert(key) {
            tracing::debug!("Already visited {}", dir.display());
            return Ok(());
        }

        let overrides = OverrideConfig::for_dir(dir)?;
        self.catalog.apply(executor, dir, &overrides);

        for target in overrides.dirs() {
            let target = self.options.jump_base.resolve(dir, &target);
            if !target.is_dir() {
                tracing::warn!(
                    "Skipping jump from {} to {}: not a directory",
                    dir.display(),
                    target.display()
                );
                continue;
            }
            tracing::debug!("Jumping from {} to {}", dir.display(), target.display());
            self.visit(&target, executor, visited)?;
        }

        if self.options.gated_recursion && !executor.mode().recurse() {
            return Ok(());
        }

        for child in subdirectories(dir) {
            self.visit(&child, executor, visited)?;
        }

        Ok(())
    }
}

/// Immediate subdirectories of `dir`, sorted by name, symlinks excluded.
fn subdirectories(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("{}", CleanError::io(dir, e));
            return Vec::new();
        }
    };

    let mut children: Vec<PathBuf> = entries
        .flatten()
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|entry| entry.path())
        .collect();
    children.sort();
    children
}
