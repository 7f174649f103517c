//! Error types for building the scanner.
//!
//! Scanning itself never fails: any name produces a record. Only the
//! configuration that goes into the pattern catalog can be rejected.

/// Error raised while building the pattern catalog.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configured skip keyword is empty or only whitespace.
    #[error("Skip keyword #{0} is empty")]
    EmptySkipKeyword(usize),

    /// A pattern failed to compile.
    #[error("Invalid {name} pattern: {source}")]
    Pattern {
        /// Which catalog entry the pattern belongs to.
        name: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}

impl Error {
    /// Create a new Pattern error.
    pub fn pattern<S: Into<String>>(name: S, source: regex::Error) -> Self {
        Self::Pattern {
            name: name.into(),
            source,
        }
    }
}

/// Result type alias using the scanner Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptySkipKeyword(2);
        assert_eq!(err.to_string(), "Skip keyword #2 is empty");

        let source = regex::Regex::new("(").unwrap_err();
        let err = Error::pattern("skip keyword", source);
        assert!(err.to_string().starts_with("Invalid skip keyword pattern"));
    }
}
