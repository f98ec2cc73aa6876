//! Play Framework 2.x project rule.

use crate::cleaner::{Action, Matcher, Needle, Rule, RuleType};

/// Identifies sbt builds enabling `PlayJava`.
pub const PLAYFRAMEWORK_2: Rule = Rule::new(
    RuleType::Playframework2,
    Matcher::FileContains {
        name: "build.sbt",
        needle: Needle::Pattern(r"enablePlugins\(PlayJava\)"),
    },
    Action::DeletePatterns(&[
        "logs",
        "target",
        "project/target",
        "project/project/target",
        ".sbtserver",
        "**/*.log",
    ]),
);
