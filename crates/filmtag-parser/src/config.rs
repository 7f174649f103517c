//! Scanner configuration.
//!
//! Only two behaviours of the scanner are configurable: literal keywords
//! stripped from names before scanning, and whether language tags are
//! detected at all.

/// Configuration for the scanner.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use filmtag_parser::config::ScannerConfig;
///
/// let config = ScannerConfig::builder()
///     .skip_keyword("PROPER")
///     .language_detection(false)
///     .build();
/// assert_eq!(config.skip_keywords, vec!["PROPER".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScannerConfig {
    /// Literal strings removed from every name before scanning.
    /// Matched ignoring case; regex metacharacters have no meaning.
    pub skip_keywords: Vec<String>,

    /// Whether to detect spoken-language tags.
    /// Default: true
    pub language_detection: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            skip_keywords: Vec::new(),
            language_detection: true,
        }
    }
}

impl ScannerConfig {
    /// Create a configuration builder.
    pub fn builder() -> ScannerConfigBuilder {
        ScannerConfigBuilder::default()
    }
}

/// Builder for `ScannerConfig`.
#[derive(Debug, Clone, Default)]
pub struct ScannerConfigBuilder {
    skip_keywords: Vec<String>,
    language_detection: Option<bool>,
}

impl ScannerConfigBuilder {
    /// Add one skip keyword.
    pub fn skip_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.skip_keywords.push(keyword.into());
        self
    }

    /// Add several skip keywords.
    pub fn skip_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_keywords
            .extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Set whether to detect spoken-language tags.
    ///
    /// Default: true
    pub fn language_detection(mut self, enabled: bool) -> Self {
        self.language_detection = Some(enabled);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ScannerConfig {
        ScannerConfig {
            skip_keywords: self.skip_keywords,
            language_detection: self.language_detection.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScannerConfig::default();
        assert!(config.skip_keywords.is_empty());
        assert!(config.language_detection);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ScannerConfig::builder()
            .skip_keyword("PROPER")
            .skip_keywords(["REPACK", "LIMITED"])
            .language_detection(false)
            .build();

        assert_eq!(config.skip_keywords, vec!["PROPER", "REPACK", "LIMITED"]);
        assert!(!config.language_detection);
    }

    #[test]
    fn test_builder_partial() {
        let config = ScannerConfig::builder().skip_keyword("x").build();
        assert!(config.language_detection); // default
    }
}
