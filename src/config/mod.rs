mod types;

pub use types::*;

use anyhow::{Context, Result};
use filmtag_parser::Scanner;
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./filmtag.toml",
        "~/.config/filmtag/config.toml",
        "/etc/filmtag/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Compile the scanner described by the configuration.
pub fn build_scanner(config: &Config) -> Result<Scanner> {
    Scanner::new(config.scanner.clone()).context("Failed to build filename scanner")
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    for (i, keyword) in config.scanner.skip_keywords.iter().enumerate() {
        if keyword.trim().is_empty() {
            anyhow::bail!("Skip keyword #{} is empty", i);
        }
    }

    if !config.scanner.language_detection {
        tracing::debug!("Language detection is disabled");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
[scanner]
skip_keywords = ["PROPER", "REPACK"]
language_detection = false

[output]
format = "kv"
"#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.scanner.skip_keywords, vec!["PROPER", "REPACK"]);
        assert!(!config.scanner.language_detection);
        assert_eq!(config.output.format, OutputFormatKind::Kv);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let file = write_config("[scanner]\nskip_keywords = [\"LIMITED\"]\n");
        let config = load_config(file.path()).unwrap();
        assert!(config.scanner.language_detection);
        assert_eq!(config.output.format, OutputFormatKind::Generic);
    }

    #[test]
    fn test_empty_skip_keyword_rejected() {
        let file = write_config("[scanner]\nskip_keywords = [\"PROPER\", \" \"]\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Skip keyword #1 is empty"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let file = write_config("[output]\nformat = \"xml\"\n");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_build_scanner_from_config() {
        let file = write_config("[scanner]\nskip_keywords = [\"PROPER\"]\n");
        let config = load_config(file.path()).unwrap();
        let scanner = build_scanner(&config).unwrap();
        assert_eq!(scanner.catalog().skip_keywords().len(), 1);
        assert!(scanner.language_detection());
    }
}
