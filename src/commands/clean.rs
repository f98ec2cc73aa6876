//! Clean command implementation.

use crate::cleaner::{Crawler, RuleCatalog};
use crate::cli::Cli;
use crate::config::Config;
use crate::mode::Mode;
use anyhow::{bail, Result};

/// Run the crawl described by `cli` and print the summary.
pub fn run(cli: &Cli, mode: Mode, config: &Config) -> Result<()> {
    // Resolve to absolute path
    let path = cli.path.canonicalize().unwrap_or_else(|_| cli.path.clone());
    if !path.is_dir() {
        bail!("Not a directory: {}", path.display());
    }

    let catalog = if let Some(types) = &cli.types {
        let types: Vec<&str> = types.iter().map(|s| s.as_str()).collect();
        RuleCatalog::with_types(&types)
    } else {
        RuleCatalog::new()
    };
    let catalog = config.filter(catalog);

    if catalog.is_empty() {
        eprintln!(
            "Error: No valid rule types left. Requested: {}",
            cli.types.as_deref().unwrap_or_default().join(", ")
        );
        eprintln!("Valid types: {}", RuleCatalog::new().ids().join(", "));
        std::process::exit(2);
    }

    if mode.readonly() {
        println!("[DRY RUN] Nothing will be deleted, pass -d to delete.");
        println!("[DRY RUN] Totals may include paths nested in an already listed directory.");
    }
    tracing::debug!(rules = ?catalog.ids(), "Cleaning {}", path.display());

    let summary = Crawler::new(catalog, config.crawl_options()).run(&path, mode)?;

    println!("{}", summary.report());
    Ok(())
}
