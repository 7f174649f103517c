//! The working text of a scan.

use std::borrow::Cow;
use std::ops::Range;

use regex::{NoExpand, Regex};

/// Text not yet claimed by any stage.
///
/// Each stage cuts what it matched and writes a divider in its place, so
/// later stages never match the same text twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remainder(String);

impl Remainder {
    /// Start from the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The current text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replace the byte range with a divider.
    pub fn cut(&mut self, range: Range<usize>, divider: &str) {
        self.0.replace_range(range, divider);
    }

    /// Replace every match of `regex` with a divider.
    pub fn replace_all(&mut self, regex: &Regex, divider: &str) {
        if let Cow::Owned(replaced) = regex.replace_all(&self.0, NoExpand(divider)) {
            self.0 = replaced;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cut_replaces_range() {
        let mut rest = Remainder::new("Movie.720p.x264");
        rest.cut(5..11, "./.");
        assert_eq!(rest.as_str(), "Movie./.x264");
    }

    #[test]
    fn replace_all_does_not_expand_dollars() {
        let mut rest = Remainder::new("a-b-c");
        rest.replace_all(&Regex::new("-").unwrap(), "$0");
        assert_eq!(rest.as_str(), "a$0b$0c");
    }
}
