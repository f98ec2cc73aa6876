//! Built-in cleaning rules.

mod grails2;
mod grails3;
mod maven;
mod ot_clean;
mod playframework2;

pub use grails2::GRAILS_2;
pub use grails3::GRAILS_3;
pub use maven::MAVEN;
pub use ot_clean::OT_CLEAN;
pub use playframework2::PLAYFRAMEWORK_2;

use crate::cleaner::Rule;

/// Returns all built-in rules in catalog order.
pub fn all_rules() -> Vec<Rule> {
    vec![MAVEN, GRAILS_2, GRAILS_3, PLAYFRAMEWORK_2, OT_CLEAN]
}
