//! Grails 2.x project rule.

use crate::cleaner::{Action, Matcher, Needle, Rule, RuleType};

/// Identifies projects whose `application.properties` names
/// `app.grails.version`; removes `target/` and every log file.
pub const GRAILS_2: Rule = Rule::new(
    RuleType::Grails2,
    Matcher::FileContains {
        name: "application.properties",
        needle: Needle::Literal("app.grails.version"),
    },
    Action::DeletePatterns(&["target", "**/*.log"]),
);
