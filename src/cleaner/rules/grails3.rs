//! Grails 3.x project rule.

use crate::cleaner::{Action, Matcher, Needle, Rule, RuleType};

/// Identifies Gradle builds applying a Grails plugin; removes `build/`
/// and every log file.
pub const GRAILS_3: Rule = Rule::new(
    RuleType::Grails3,
    Matcher::FileContains {
        name: "build.gradle",
        needle: Needle::Pattern("apply plugin:.*org.grails"),
    },
    Action::DeletePatterns(&["build", "**/*.log"]),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::rules::fixtures::{touch, write};
    use crate::cleaner::{DeleteExecutor, OverrideConfig, Summary};
    use crate::mode::Mode;
    use tempfile::TempDir;

    #[test]
    fn test_grails3_detection() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "build.gradle",
            "oiawef\nrsxapply plugin:\"org.grails.grails-web\"vasd",
        );

        assert!(GRAILS_3.detect(tmp.path()));
    }

    #[test]
    fn test_grails3_ignores_plain_gradle() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "build.gradle", "apply plugin: 'java'");

        assert!(!GRAILS_3.detect(tmp.path()));
    }

    #[test]
    fn test_grails3_cleanup() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "build.gradle",
            "apply plugin:\"org.grails.grails-web\"",
        );
        touch(tmp.path(), "build/libs/app.jar");
        touch(tmp.path(), "subdir.log");
        touch(tmp.path(), "subdir/target/some.log");
        let mode = Mode::parse(&["-d"]).unwrap();
        let mut summary = Summary::new(mode);

        GRAILS_3.apply(
            &mut DeleteExecutor::new(mode, &mut summary),
            tmp.path(),
            &OverrideConfig::default(),
        );

        assert!(!tmp.path().join("build").exists());
        assert!(!tmp.path().join("subdir.log").exists());
        assert!(!tmp.path().join("subdir/target/some.log").exists());
        assert!(tmp.path().join("build.gradle").exists());
    }
}
