//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use clap_complete::Shell;

/// Database control console: dispatches maintenance commands to the backend
/// gate named in the system configuration
#[derive(Parser, Debug)]
#[command(name = "dbctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug output (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Path to the configuration file (default: /etc/rhn/rhn.conf)
    #[arg(short, long, env = "DBCTL_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Command to run on the configured database (omit to list commands)
    pub command: Option<String>,
}
