use clap::{Parser, Subcommand};
use filmtag::config::OutputFormatKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "filmtag")]
#[command(author, version, about = "Extract title, year, episode and quality tags from video file names")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan one or more file names
    Scan {
        /// Names to scan (bare names, not paths)
        #[arg(required = true, allow_hyphen_values = true)]
        names: Vec<String>,

        /// Treat every name as a directory-style asset
        #[arg(long)]
        dir: bool,

        /// Output format (defaults to the configured one)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormatKind>,
    },

    /// Scan every entry below a directory
    Walk {
        /// Directory to walk
        #[arg(required = true)]
        path: PathBuf,

        /// Maximum depth to descend to
        #[arg(long)]
        depth: Option<usize>,

        /// Output format (defaults to the configured one)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormatKind>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Map free-text language labels to known languages
    Languages {
        /// Labels such as "eng" or "French subs"
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Display version information
    Version,
}
