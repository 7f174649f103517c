//! Stage pipeline for filename scanning.
//!
//! The input is copied into a [`Remainder`](remainder::Remainder) and run
//! through a fixed sequence of stages. Every stage that recognizes
//! something writes a divider over the text it used, so later stages only
//! see what is left.
//!
//! Order matters: structural markers claim text before the keyword tables
//! get a look, and the title is resolved from whatever survives.

pub(crate) mod divider;
mod remainder;
mod structure;
mod technical;
mod title;

use tracing::trace;

use crate::catalog::Catalog;
use crate::model::{AssetKind, ParsedFilename};

/// Scan one filename against a compiled catalog.
pub fn scan_with_catalog(input: &str, kind: AssetKind, catalog: &Catalog) -> ParsedFilename {
    let mut release = ParsedFilename::new(input);

    let mut rest = structure::split_extension(input, kind, &mut release);
    structure::strip_skip_keywords(&mut rest, catalog);
    structure::extract_trailer(&mut rest, catalog, &mut release);
    structure::extract_season_episode(&mut rest, catalog, &mut release);
    structure::extract_part(&mut rest, catalog, &mut release);
    structure::extract_sets(&mut rest, catalog, &mut release);
    trace!(rest = rest.as_str(), "After structural stages");

    technical::extract(&mut rest, catalog, &mut release);
    if catalog.language_detection() {
        technical::extract_strict_languages(&mut rest, catalog, &mut release);
    }
    trace!(rest = rest.as_str(), "After keyword stages");

    title::resolve(rest.as_str(), catalog, &mut release);
    title::resolve_secondary(rest.as_str(), catalog, &mut release);

    release
}
