//! Divider tokens written into the remaining text in place of consumed
//! matches.
//!
//! Dividers keep later tokenizers seeing a boundary where text was removed.
//! None of them contains a letter or digit outside its marker word, and no
//! catalog pattern matches a marker word bounded by `/`.

/// Replaces skip keywords and technical matches.
pub const NEUTRAL: &str = "./.";

/// Replaces the trailer marker.
pub const TRAILER: &str = "./TRAILER/.";

/// Replaces the season/episode token.
pub const TV_SHOW: &str = "./TVSHOW/.";

/// Replaces the part/disc marker.
pub const PART: &str = " /PART/ ";

/// Replaces a box-set marker.
pub const SET: &str = " / ";

/// Searchable core of [`TRAILER`].
pub const TRAILER_MARKER: &str = "/TRAILER/";

/// Searchable core of [`TV_SHOW`].
pub const TV_SHOW_MARKER: &str = "/TVSHOW/";

/// Searchable core of [`PART`].
pub const PART_MARKER: &str = "/PART/";
