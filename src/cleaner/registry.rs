//! Ordered catalog of cleaning rules.

use crate::cleaner::executor::DeleteExecutor;
use crate::cleaner::override_config::OverrideConfig;
use crate::cleaner::rules::all_rules;
use crate::cleaner::Rule;
use std::collections::HashSet;
use std::path::Path;

/// Catalog that holds the rules evaluated against every directory.
///
/// Rules are independent: every rule whose matcher accepts a directory
/// fires. Order only affects the sequence of log lines.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Create a catalog with all built-in rules.
    pub fn new() -> Self {
        Self { rules: all_rules() }
    }

    /// Create a catalog with only the specified rule ids.
    ///
    /// # Example
    /// ```
    /// use ot_clean::cleaner::RuleCatalog;
    ///
    /// let catalog = RuleCatalog::with_types(&["maven", "ot-clean"]);
    /// assert_eq!(catalog.len(), 2);
    /// ```
    pub fn with_types(types: &[&str]) -> Self {
        let type_set: HashSet<&str> = types.iter().copied().collect();
        Self {
            rules: all_rules()
                .into_iter()
                .filter(|r| type_set.contains(r.id().as_str()))
                .collect(),
        }
    }

    /// Create a catalog excluding the specified rule ids.
    pub fn without_types(types: &[&str]) -> Self {
        Self::new().without(types)
    }

    /// Drop the specified rule ids from this catalog.
    pub fn without(self, types: &[&str]) -> Self {
        let type_set: HashSet<&str> = types.iter().copied().collect();
        Self {
            rules: self
                .rules
                .into_iter()
                .filter(|r| !type_set.contains(r.id().as_str()))
                .collect(),
        }
    }

    /// Get all rules in order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Get a rule by id.
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id() == id)
    }

    /// List all rule ids.
    pub fn ids(&self) -> Vec<String> {
        self.rules.iter().map(Rule::id).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule to `dir`, given its loaded `.clean.yml`.
    pub fn apply(
        &self,
        executor: &mut DeleteExecutor<'_>,
        dir: &Path,
        overrides: &OverrideConfig,
    ) {
        for rule in &self.rules {
            rule.apply(executor, dir, overrides);
        }
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::rules::fixtures::{touch, write};
    use crate::cleaner::Summary;
    use crate::mode::Mode;
    use tempfile::TempDir;

    #[test]
    fn test_catalog_new_has_all_rules_in_order() {
        let catalog = RuleCatalog::new();

        assert_eq!(
            catalog.ids(),
            vec!["maven", "grails-2", "grails-3", "playframework-2", "ot-clean"]
        );
    }

    #[test]
    fn test_catalog_with_types() {
        let catalog = RuleCatalog::with_types(&["maven", "grails-3"]);
        let ids = catalog.ids();

        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"maven".to_string()));
        assert!(!ids.contains(&"ot-clean".to_string()));
    }

    #[test]
    fn test_catalog_with_empty_types() {
        assert!(RuleCatalog::with_types(&[]).is_empty());
    }

    #[test]
    fn test_catalog_without_types() {
        let catalog = RuleCatalog::without_types(&["maven"]);

        assert!(catalog.get("maven").is_none());
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_catalog_get() {
        let catalog = RuleCatalog::new();

        assert_eq!(catalog.get("grails-2").unwrap().display_name(), "Grails 2");
        assert!(catalog.get("unknown").is_none());
    }

    #[test]
    fn test_catalog_default() {
        assert_eq!(RuleCatalog::default().len(), 5);
    }

    #[test]
    fn test_all_matching_rules_fire() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "pom.xml");
        write(tmp.path(), ".clean.yml", "deletes:\n - *.tmp");
        touch(tmp.path(), "target/a.jar");
        touch(tmp.path(), "scratch.tmp");
        let mode = Mode::parse(&["-d"]).unwrap();
        let mut summary = Summary::new(mode);

        RuleCatalog::new().apply(
            &mut DeleteExecutor::new(mode, &mut summary),
            tmp.path(),
            &OverrideConfig::for_dir(tmp.path()).unwrap(),
        );

        assert!(!tmp.path().join("target").exists());
        assert!(!tmp.path().join("scratch.tmp").exists());
        assert_eq!(summary.count(), 2);
    }
}
