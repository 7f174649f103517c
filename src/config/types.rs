use filmtag_parser::config::ScannerConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Format used when the command line does not pick one
    #[serde(default)]
    pub format: OutputFormatKind,
}

/// How scan results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormatKind {
    /// One human-readable line per name
    #[default]
    Generic,
    /// One `key: value` line per recognized field
    Kv,
    /// One JSON object per line
    Json,
}
