//! Rule definitions: what marks a directory and what to remove from it.

use crate::cleaner::executor::DeleteExecutor;
use crate::cleaner::override_config::{OverrideConfig, OVERRIDE_FILE};
use crate::cleaner::scan::Scan;
use crate::error::{CleanError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, OnceLock, PoisonError};

/// Kinds of built-in rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleType {
    Maven,
    Grails2,
    Grails3,
    Playframework2,
    OtClean,
}

impl RuleType {
    pub const ALL: [RuleType; 5] = [
        RuleType::Maven,
        RuleType::Grails2,
        RuleType::Grails3,
        RuleType::Playframework2,
        RuleType::OtClean,
    ];

    /// Upper-case identifier the other names derive from.
    pub fn ident(&self) -> &'static str {
        match self {
            RuleType::Maven => "MAVEN",
            RuleType::Grails2 => "GRAILS_2",
            RuleType::Grails3 => "GRAILS_3",
            RuleType::Playframework2 => "PLAYFRAMEWORK_2",
            RuleType::OtClean => "OT_CLEAN",
        }
    }

    /// Identifier used by filters (e.g. `grails-2`).
    pub fn id(&self) -> String {
        self.ident().to_lowercase().replace('_', "-")
    }

    /// Human-readable name (e.g. `Grails 2`).
    pub fn display(&self) -> String {
        let lower = self.ident().to_lowercase().replace('_', " ");
        let mut chars = lower.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

/// Text searched for inside an anchor file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Needle {
    /// Plain substring containment.
    Literal(&'static str),
    /// Regular expression search anywhere in the file.
    Pattern(&'static str),
}

impl Needle {
    pub fn is_found_in(&self, text: &str) -> bool {
        match self {
            Needle::Literal(needle) => text.contains(needle),
            Needle::Pattern(pattern) => compiled(pattern).is_some_and(|re| re.is_match(text)),
        }
    }
}

/// Compiled marker patterns; `None` for a pattern that failed to compile.
static PATTERNS: OnceLock<Mutex<HashMap<&'static str, Option<Regex>>>> = OnceLock::new();

/// Compile `pattern` on first use and reuse it afterwards.
fn compiled(pattern: &'static str) -> Option<Regex> {
    let mut patterns = PATTERNS
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    patterns
        .entry(pattern)
        .or_insert_with(|| match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!("Invalid marker pattern '{}': {}", pattern, e);
                None
            }
        })
        .clone()
}

/// Decides whether a rule applies to a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// `dir/name` exists.
    FileExists(&'static str),
    /// `dir/name` exists and its content contains the needle.
    FileContains { name: &'static str, needle: Needle },
    /// The directory has a `.clean.yml`.
    OverrideFile,
}

impl Matcher {
    /// Evaluate against `dir`.
    ///
    /// An anchor file that cannot be read counts as no match.
    pub fn matches(&self, dir: &Path) -> bool {
        match self {
            Matcher::FileExists(name) => dir.join(name).exists(),
            Matcher::FileContains { name, needle } => {
                let anchor = dir.join(name);
                if !anchor.exists() {
                    return false;
                }
                match read_anchor(&anchor) {
                    Ok(text) => needle.is_found_in(&text),
                    Err(e) => {
                        tracing::warn!("{}", e);
                        false
                    }
                }
            }
            Matcher::OverrideFile => dir.join(OVERRIDE_FILE).exists(),
        }
    }
}

fn read_anchor(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| CleanError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// What to remove once a rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Scan the directory with fixed include patterns.
    DeletePatterns(&'static [&'static str]),
    /// Scan the directory with the `deletes` of its `.clean.yml`.
    DeleteByOverride,
}

impl Action {
    /// Hand every resolved path to the executor.
    ///
    /// `overrides` is the already loaded `.clean.yml` of `dir`.
    pub fn run(
        &self,
        executor: &mut DeleteExecutor<'_>,
        dir: &Path,
        overrides: &OverrideConfig,
    ) {
        let scan = match *self {
            Action::DeletePatterns(patterns) => Scan::new(dir, patterns),
            Action::DeleteByOverride => overrides.files_to_delete(dir),
        };
        scan.paths().for_each(|path| executor.remove(&path));
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub kind: RuleType,
    pub matcher: Matcher,
    pub action: Action,
}

impl Rule {
    pub const fn new(kind: RuleType, matcher: Matcher, action: Action) -> Self {
        Self {
            kind,
            matcher,
            action,
        }
    }

    pub fn id(&self) -> String {
        self.kind.id()
    }

    pub fn display_name(&self) -> String {
        self.kind.display()
    }

    /// Check if this rule applies to `dir`.
    pub fn detect(&self, dir: &Path) -> bool {
        self.matcher.matches(dir)
    }

    /// Run the action when the matcher accepts `dir`; otherwise do nothing.
    pub fn apply(
        &self,
        executor: &mut DeleteExecutor<'_>,
        dir: &Path,
        overrides: &OverrideConfig,
    ) {
        if !self.detect(dir) {
            return;
        }
        tracing::info!("[{}]: {}", self.display_name(), dir.display());
        self.action.run(executor, dir, overrides);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::summary::Summary;
    use crate::mode::Mode;
    use tempfile::TempDir;

    const MOCK: Rule = Rule::new(
        RuleType::Maven,
        Matcher::FileExists("mock.toml"),
        Action::DeletePatterns(&["build"]),
    );

    #[test]
    fn test_display_names() {
        assert_eq!(RuleType::Maven.display(), "Maven");
        assert_eq!(RuleType::Grails2.display(), "Grails 2");
        assert_eq!(RuleType::Playframework2.display(), "Playframework 2");
        assert_eq!(RuleType::OtClean.display(), "Ot clean");
    }

    #[test]
    fn test_ids() {
        assert_eq!(RuleType::Grails3.id(), "grails-3");
        assert_eq!(RuleType::from_id("ot-clean"), Some(RuleType::OtClean));
        assert_eq!(RuleType::from_id("gulp"), None);
    }

    #[test]
    fn test_literal_needle() {
        assert!(Needle::Literal("app.grails").is_found_in("x=1\napp.grails.version=2"));
        assert!(!Needle::Literal("app.grails").is_found_in("app_grails"));
    }

    #[test]
    fn test_pattern_needle() {
        assert!(Needle::Pattern(".*example.*").is_found_in("example text"));
        assert!(!Needle::Pattern(".*example.*").is_found_in("missing"));
    }

    #[test]
    fn test_file_contains_missing_file() {
        let tmp = TempDir::new().unwrap();
        let matcher = Matcher::FileContains {
            name: "build.sbt",
            needle: Needle::Literal("x"),
        };
        assert!(!matcher.matches(tmp.path()));
    }

    #[test]
    fn test_unreadable_anchor_is_no_match() {
        let tmp = TempDir::new().unwrap();
        // A directory with the anchor's name exists but cannot be read as text.
        fs::create_dir(tmp.path().join("build.sbt")).unwrap();
        let matcher = Matcher::FileContains {
            name: "build.sbt",
            needle: Needle::Literal(""),
        };
        assert!(!matcher.matches(tmp.path()));
    }

    #[test]
    fn test_apply_without_match_is_noop() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("build")).unwrap();
        let mut summary = Summary::new(Mode::default());

        MOCK.apply(
            &mut DeleteExecutor::new(Mode::default(), &mut summary),
            tmp.path(),
            &OverrideConfig::default(),
        );

        assert_eq!(summary.count(), 0);
    }

    #[test]
    fn test_apply_with_match() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("mock.toml"), "").unwrap();
        fs::create_dir(tmp.path().join("build")).unwrap();
        let mode = Mode::parse(&["-d"]).unwrap();
        let mut summary = Summary::new(mode);

        MOCK.apply(
            &mut DeleteExecutor::new(mode, &mut summary),
            tmp.path(),
            &OverrideConfig::default(),
        );

        assert_eq!(summary.count(), 1);
        assert!(!tmp.path().join("build").exists());
        assert!(tmp.path().join("mock.toml").exists());
    }

    #[test]
    fn test_override_action_uses_given_config() {
        let tmp = TempDir::new().unwrap();
        // The file on disk is broken; only the loaded config counts.
        fs::write(tmp.path().join(OVERRIDE_FILE), "deletes: [broken\n").unwrap();
        fs::create_dir(tmp.path().join("out")).unwrap();
        let mode = Mode::parse(&["-d"]).unwrap();
        let mut summary = Summary::new(mode);

        Action::DeleteByOverride.run(
            &mut DeleteExecutor::new(mode, &mut summary),
            tmp.path(),
            &OverrideConfig::with_deletes(["out"]),
        );

        assert_eq!(summary.count(), 1);
        assert!(!tmp.path().join("out").exists());
    }

    #[test]
    fn test_marker_pattern_compiled_once() {
        let pattern = "enablePlugins\\(PlayJava\\)";
        assert!(Needle::Pattern(pattern).is_found_in("x.enablePlugins(PlayJava)"));
        assert!(!Needle::Pattern(pattern).is_found_in("enablePlugins(PlayScala)"));

        let first = compiled(pattern).unwrap();
        let second = compiled(pattern).unwrap();
        assert_eq!(first.as_str(), second.as_str());
        assert!(PATTERNS.get().unwrap().lock().unwrap().contains_key(pattern));
    }

    #[test]
    fn test_invalid_marker_pattern_is_no_match() {
        assert!(!Needle::Pattern("(unclosed").is_found_in("(unclosed"));
        assert!(compiled("(unclosed").is_none());
    }
}
