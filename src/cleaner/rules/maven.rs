//! Maven project rule.

use crate::cleaner::{Action, Matcher, Rule, RuleType};

/// Identifies projects by `pom.xml` and removes `target/`.
pub const MAVEN: Rule = Rule::new(
    RuleType::Maven,
    Matcher::FileExists("pom.xml"),
    Action::DeletePatterns(&["target"]),
);
