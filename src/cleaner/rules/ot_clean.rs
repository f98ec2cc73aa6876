//! `.clean.yml` driven rule.

use crate::cleaner::{Action, Matcher, Rule, RuleType};

/// Applies the `deletes` section of a directory's own `.clean.yml`.
pub const OT_CLEAN: Rule = Rule::new(RuleType::OtClean, Matcher::OverrideFile, Action::DeleteByOverride);
