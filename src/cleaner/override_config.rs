//! Per-directory `.clean.yml` overrides.
//!
//! A directory can declare its own disposable paths and point the crawler at
//! other directories:
//!
//! ```yaml
//! deletes:
//!   - *.log
//!   - out
//! dirs:
//!   - ../shared
//! ```
//!
//! Bare leading `*` is not valid YAML, so such list items are quoted before
//! the document is parsed.

use crate::cleaner::scan::Scan;
use crate::error::ConfigError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the override file looked up in every visited directory.
pub const OVERRIDE_FILE: &str = ".clean.yml";

/// Parsed contents of a `.clean.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverrideConfig {
    /// Include patterns, relative to the owning directory.
    #[serde(deserialize_with = "nullable")]
    pub deletes: Vec<String>,
    /// Extra directories to crawl.
    #[serde(deserialize_with = "nullable")]
    pub dirs: Vec<String>,
}

impl OverrideConfig {
    /// Build a config that only deletes the given patterns.
    pub fn with_deletes<S: Into<String>>(deletes: impl IntoIterator<Item = S>) -> Self {
        Self {
            deletes: deletes.into_iter().map(Into::into).collect(),
            dirs: Vec::new(),
        }
    }

    /// Load the override file of `dir`.
    pub fn for_dir(dir: &Path) -> Result<Self, ConfigError> {
        Self::load(&dir.join(OVERRIDE_FILE))
    }

    /// Load an override file.
    ///
    /// A missing, empty, or `null` file yields the default config. A file
    /// that exists but cannot be read or parsed is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(?config, "Loaded {}", path.display());
        Ok(config)
    }

    /// Parse override YAML, quoting bare wildcards first.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if is_blank(content) {
            return Ok(Self::default());
        }
        let parsed: Option<Self> = serde_yaml::from_str(&quote_wildcards(content))?;
        Ok(parsed.unwrap_or_default())
    }

    /// Write this config as YAML.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self).map_err(|source| ConfigError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, yaml).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Paths below `base` matched by `deletes`.
    pub fn files_to_delete(&self, base: &Path) -> Scan {
        Scan::new(base, &self.deletes)
    }

    /// Jump targets exactly as written in the file.
    pub fn dirs(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.dirs.iter().map(PathBuf::from)
    }
}

fn nullable<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn is_blank(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    })
}

/// Wrap sequence items whose value starts with `*` in double quotes.
///
/// Works line by line, keeps every line ending as it was and leaves all
/// other lines untouched.
pub fn quote_wildcards(content: &str) -> String {
    content
        .split_inclusive('\n')
        .map(|line| {
            let (body, ending) = split_ending(line);
            match quote_item(body) {
                Some(quoted) => format!("{}{}", quoted, ending),
                None => line.to_string(),
            }
        })
        .collect()
}

fn split_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

fn quote_item(body: &str) -> Option<String> {
    let rest = body.trim_start();
    let indent = &body[..body.len() - rest.len()];
    let item = rest.strip_prefix('-')?;
    let value = item.trim_start();
    if value.len() == item.len() || !value.starts_with('*') {
        return None;
    }

    let (value, comment) = match value.find(" #") {
        Some(at) => (&value[..at], &value[at..]),
        None => (value, ""),
    };
    let escaped = value.trim_end().replace('\\', "\\\\").replace('"', "\\\"");
    Some(format!("{}- \"{}\"{}", indent, escaped, comment))
}
