//! ot-clean - build artifact cleaner
//!
//! This crate provides functionality for:
//! - Recognizing project layouts (Maven, Grails, Play) by their anchor files
//! - Per-directory `.clean.yml` rules, including jumps to other directories
//! - Dry-run or applied removal with size accounting

pub mod cleaner;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod mode;

// Re-export commonly used types
pub use config::Config;
pub use error::{CleanError, Result};
pub use mode::Mode;
