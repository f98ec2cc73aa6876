//! Rule matching and cleanup engine.
//!
//! This module provides:
//! - Detection rules for known project layouts (Maven, Grails, Play)
//! - Per-directory `.clean.yml` overrides with jump targets
//! - ANT-style glob scanning, dry-run aware deletion and totals
//! - The crawler tying them together

mod crawler;
mod executor;
mod override_config;
mod registry;
mod rule;
pub mod rules;
mod scan;
mod summary;

pub use crawler::{CrawlOptions, Crawler, JumpBase};
pub use executor::{dir_size, DeleteExecutor, DeleteRecord, EntryKind};
pub use override_config::{quote_wildcards, OverrideConfig, OVERRIDE_FILE};
pub use registry::RuleCatalog;
pub use rule::{Action, Matcher, Needle, Rule, RuleType};
pub use scan::Scan;
pub use summary::Summary;
