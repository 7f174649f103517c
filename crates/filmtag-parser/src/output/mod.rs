//! Output formatting for scanned names.
//!
//! # Available Formats
//!
//! - [`GenericFormat`]: one human-readable line per name
//! - [`KeyValueFormat`]: one `key: value` line per recognized field
//!
//! With the `serde` feature, [`crate::ParsedFilename`] itself serializes to
//! JSON or any other serde format.
//!
//! # Example
//!
//! ```
//! use filmtag_parser::{scan, AssetKind, output::{OutputFormat, GenericFormat, KeyValueFormat}};
//!
//! let release = scan("Show.Name.S02E03E04.HDTV.FRENCH", AssetKind::Directory);
//!
//! let line = GenericFormat.format(&release);
//! assert_eq!(line.formatted_string, "Show Name S02E03E04 [HDTV] {French} .DVD");
//!
//! let fields = KeyValueFormat.format(&release);
//! assert_eq!(fields.get("season"), Some("2"));
//! ```

mod generic;
mod key_value;

pub use generic::{GenericFormat, GenericOutput};
pub use key_value::{KeyValueFormat, KeyValueOutput};

/// Trait for rendering a scan result for a particular consumer.
pub trait OutputFormat {
    /// The output type produced by this formatter.
    type Output;

    /// Render one scan result.
    fn format(&self, release: &crate::model::ParsedFilename) -> Self::Output;
}
