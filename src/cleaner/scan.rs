//! ANT-style include scanning below a base directory.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;
use walkdir::{DirEntry, WalkDir};

/// Paths never yielded nor entered, whatever the patterns say.
///
/// Version control metadata and editor leftovers, as Ant's directory scanner
/// excludes by default.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "**/*~",
    "**/#*#",
    "**/.#*",
    "**/%*%",
    "**/._*",
    "**/CVS",
    "**/CVS/**",
    "**/.cvsignore",
    "**/SCCS",
    "**/SCCS/**",
    "**/vssver.scc",
    "**/.svn",
    "**/.svn/**",
    "**/.DS_Store",
    "**/.git",
    "**/.git/**",
    "**/.gitattributes",
    "**/.gitignore",
    "**/.gitmodules",
    "**/.hg",
    "**/.hg/**",
    "**/.hgignore",
    "**/.hgsub",
    "**/.hgsubstate",
    "**/.hgtags",
    "**/.bzr",
    "**/.bzr/**",
    "**/.bzrignore",
];

fn default_excludes() -> &'static GlobSet {
    static EXCLUDES: OnceLock<GlobSet> = OnceLock::new();
    EXCLUDES.get_or_init(|| compile(DEFAULT_EXCLUDES.iter().copied()).0)
}

/// Build a glob set with the scanner's matching rules, returning it with the
/// deepest level its patterns can reach.
fn compile<'p>(patterns: impl IntoIterator<Item = &'p str>) -> (GlobSet, usize) {
    let mut builder = GlobSetBuilder::new();
    let mut max_depth = 0;

    for raw in patterns {
        let Some(pattern) = normalize(raw) else {
            continue;
        };
        let glob = GlobBuilder::new(&pattern)
            .case_insensitive(true)
            .literal_separator(true)
            .build();
        match glob {
            Ok(glob) => {
                max_depth = max_depth.max(depth_of(&pattern));
                builder.add(glob);
            }
            Err(e) => tracing::warn!("Skipping invalid pattern '{}': {}", raw, e),
        }
    }

    let set = builder.build().unwrap_or_else(|e| {
        tracing::warn!("Unable to compile patterns: {}", e);
        GlobSet::empty()
    });
    (set, max_depth)
}

/// Resolves include patterns against a base directory.
///
/// `*` stays inside one path segment, `**` spans segments, and matching
/// ignores case. Matching directories are yielded before matching files so a
/// parent always reaches the executor ahead of anything inside it. Entries
/// covered by [`DEFAULT_EXCLUDES`] are skipped along with their contents, and
/// nothing outside the base is ever visited.
#[derive(Debug, Clone)]
pub struct Scan {
    base: PathBuf,
    set: GlobSet,
    max_depth: usize,
}

impl Scan {
    /// Compile `patterns` for scanning `base`.
    ///
    /// Invalid patterns are logged and dropped.
    pub fn new<S: AsRef<str>>(base: &Path, patterns: &[S]) -> Self {
        let (set, max_depth) = compile(patterns.iter().map(AsRef::as_ref));

        tracing::debug!("Scanner: {}", base.display());
        tracing::debug!(
            "- deletes: {:?}",
            patterns.iter().map(|p| p.as_ref()).collect::<Vec<_>>()
        );

        Self {
            base: base.to_path_buf(),
            set,
            max_depth,
        }
    }

    /// Base directory of this scan.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Walk the base and yield every matching path.
    ///
    /// Each call walks the filesystem again.
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.matching(true).chain(self.matching(false))
    }

    /// True when `relative` (relative to the base) matches any pattern.
    pub fn is_match(&self, relative: &Path) -> bool {
        self.set.is_match(slashed(relative))
    }

    fn matching(&self, directories: bool) -> impl Iterator<Item = PathBuf> + '_ {
        let walker = (!self.set.is_empty() && self.base.is_dir()).then(move || {
            WalkDir::new(&self.base)
                .min_depth(1)
                .max_depth(self.max_depth)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(move |entry| !self.is_excluded(entry))
        });

        walker
            .into_iter()
            .flatten()
            .filter_map(move |entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Scan failed below {}: {}", self.base.display(), e);
                    None
                }
            })
            .filter(move |entry| entry.file_type().is_dir() == directories)
            .filter(move |entry| self.entry_matches(entry))
            .map(DirEntry::into_path)
    }

    fn entry_matches(&self, entry: &DirEntry) -> bool {
        self.relative(entry)
            .map(|relative| self.set.is_match(relative))
            .unwrap_or(false)
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        self.relative(entry)
            .map(|relative| !relative.is_empty() && default_excludes().is_match(relative))
            .unwrap_or(false)
    }

    fn relative(&self, entry: &DirEntry) -> Option<String> {
        entry.path().strip_prefix(&self.base).ok().map(slashed)
    }
}

/// Bring a raw include into the form the glob set expects.
fn normalize(raw: &str) -> Option<String> {
    let mut pattern = raw.trim().replace('\\', "/");
    loop {
        if let Some(rest) = pattern.strip_prefix("./") {
            pattern = rest.to_string();
        } else if let Some(rest) = pattern.strip_prefix('/') {
            pattern = rest.to_string();
        } else {
            break;
        }
    }
    if pattern.is_empty() {
        return None;
    }
    if pattern.ends_with('/') {
        pattern.push_str("**");
    }
    Some(pattern)
}

/// Deepest level a pattern can reach, unbounded once `**` appears.
fn depth_of(pattern: &str) -> usize {
    if pattern.contains("**") {
        usize::MAX
    } else {
        pattern.split('/').filter(|s| !s.is_empty()).count()
    }
}

fn slashed(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
