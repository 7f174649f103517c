//! Data model types for metadata scanned from video file names.
//!
//! The label enums in this module form the closed catalogs the scanner
//! draws from: every technical field of a [`ParsedFilename`] is either
//! absent or one of these variants.

mod asset;
mod codec;
mod frame_rate;
mod language;
mod quality;
mod release;

pub use asset::{AssetKind, DIRECTORY_CONTAINER};
pub use codec::{AudioCodec, VideoCodec};
pub use frame_rate::FrameRate;
pub use language::Language;
pub use quality::{Resolution, VideoSource};
pub use release::{MovieSet, ParsedFilename};

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {}", self.0)
    }
}

impl std::error::Error for ParseError {}

/// Look up a variant by its label, ignoring ASCII case.
fn from_label<T: Copy>(all: &[T], label: fn(T) -> &'static str, s: &str) -> Option<T> {
    all.iter().copied().find(|v| label(*v).eq_ignore_ascii_case(s))
}
