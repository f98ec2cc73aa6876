use clap::Parser;
use std::path::PathBuf;

/// ot-clean - removes build artifacts of known project layouts
///
/// Without -d nothing is deleted; every path that would be removed is
/// listed together with a final summary.
#[derive(Parser, Debug)]
#[command(name = "ot-clean")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to start from
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub path: PathBuf,

    /// Path to settings file
    #[arg(long, env = "OT_CLEAN_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Rule ids to apply (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "IDS")]
    pub types: Option<Vec<String>>,

    /// Only log warnings and errors
    #[arg(long)]
    pub quiet: bool,

    /// Mode flags (-d delete, -r recurse, -v verbose), after all options
    #[arg(value_name = "FLAGS", allow_hyphen_values = true)]
    pub flags: Vec<String>,
}
