//! Media identification using filmtag-parser.
//!
//! Decides whether a path is scanned as a file or as a directory-style
//! asset, then hands its bare name to the engine.

use filmtag_parser::{AssetKind, ParsedFilename, Scanner};
use std::path::{Path, PathBuf};

/// Identifier that scans names with one shared [`Scanner`].
#[derive(Debug, Clone, Default)]
pub struct MediaIdentifier {
    scanner: Scanner,
}

/// Identification result for one path.
#[derive(Debug, Clone)]
pub struct Identification {
    /// Path that was identified.
    pub path: PathBuf,
    /// Whether the name was scanned as a file or a directory.
    pub kind: AssetKind,
    /// Everything the engine recognized in the name.
    pub parsed: ParsedFilename,
}

impl MediaIdentifier {
    /// Create an identifier around a compiled scanner.
    pub fn new(scanner: Scanner) -> Self {
        Self { scanner }
    }

    /// Identify a path whose kind is already known.
    pub fn identify(&self, path: &Path, kind: AssetKind) -> Identification {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());

        Identification {
            path: path.to_path_buf(),
            kind,
            parsed: self.scanner.scan(&name, kind),
        }
    }
}
