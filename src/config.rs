use crate::cleaner::{CrawlOptions, JumpBase, RuleCatalog, RuleType};
use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Descend into subdirectories only with the `r` flag
    pub gated_recursion: bool,
    /// Base for relative `dirs` entries: directory, working-directory
    pub jump_base: JumpBase,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Rule ids never applied
    pub disabled: Vec<String>,
}

impl Config {
    /// Load settings from `path`, or from the default location when `None`.
    ///
    /// A missing default file yields the defaults; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path).map_err(|source| SettingsError::Read {
            path: path.clone(),
            source,
        })?;
        let config: Config =
            toml::from_str(&content).map_err(|source| SettingsError::Parse { path, source })?;
        config.validate()?;
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/ot-clean/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ot-clean").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        for id in &self.rules.disabled {
            if RuleType::from_id(id).is_none() {
                return Err(SettingsError::Invalid(format!(
                    "unknown rule '{}' in rules.disabled",
                    id
                )));
            }
        }
        Ok(())
    }

    pub fn crawl_options(&self) -> CrawlOptions {
        CrawlOptions {
            gated_recursion: self.crawler.gated_recursion,
            jump_base: self.crawler.jump_base,
        }
    }

    /// Narrow `catalog` by `rules.disabled`.
    pub fn filter(&self, catalog: RuleCatalog) -> RuleCatalog {
        let disabled: Vec<&str> = self.rules.disabled.iter().map(String::as_str).collect();
        catalog.without(&disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_recurses_and_resolves_from_directory() {
        let config = Config::default();
        assert!(!config.crawler.gated_recursion);
        assert_eq!(config.crawler.jump_base, JumpBase::Directory);
        assert!(config.rules.disabled.is_empty());
    }

    #[test]
    fn config_serializes_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[crawler]"));
        assert!(toml_str.contains("jump_base = \"directory\""));
    }

    #[test]
    fn parses_working_directory_jump_base() {
        let config: Config = toml::from_str("[crawler]\njump_base = \"working-directory\"").unwrap();
        assert_eq!(config.crawl_options().jump_base, JumpBase::WorkingDirectory);
    }

    #[test]
    fn unknown_disabled_rule_is_invalid() {
        let mut config = Config::default();
        config.rules.disabled.push("gulp".into());
        assert!(matches!(config.validate(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn filter_drops_disabled_rules() {
        let mut config = Config::default();
        config.rules.disabled.push("grails-2".into());
        let catalog = config.filter(RuleCatalog::new());
        assert!(catalog.get("grails-2").is_none());
        assert_eq!(catalog.len(), 4);
    }
}
