//! Structural stages: extension, skip keywords, trailer, season/episode,
//! part and box sets.
//!
//! These run before any keyword category so their markers claim text first.

use tracing::trace;

use super::divider;
use super::remainder::Remainder;
use crate::catalog::Catalog;
use crate::model::{AssetKind, MovieSet, ParsedFilename, VideoSource, DIRECTORY_CONTAINER};

/// Split off the extension of a file, or mark a directory-style asset.
///
/// Returns the text left to scan.
pub fn split_extension(input: &str, kind: AssetKind, release: &mut ParsedFilename) -> Remainder {
    match kind {
        AssetKind::File => {
            let rest = match input.rfind('.') {
                // A leading dot is part of the name, not an extension.
                Some(i) if i > 0 => {
                    release.extension = input[i + 1..].to_string();
                    &input[..i]
                }
                _ => input,
            };
            release.container = release.extension.to_uppercase();
            Remainder::new(rest)
        }
        AssetKind::Directory => {
            release.container = DIRECTORY_CONTAINER.to_string();
            release.video_source = Some(VideoSource::Dvd);
            Remainder::new(input)
        }
    }
}

/// Replace every configured skip keyword with a neutral divider.
pub fn strip_skip_keywords(rest: &mut Remainder, catalog: &Catalog) {
    for keyword in catalog.skip_keywords() {
        rest.replace_all(keyword, divider::NEUTRAL);
    }
}

/// Detect a `[... trailer ...]` marker.
pub fn extract_trailer(rest: &mut Remainder, catalog: &Catalog, release: &mut ParsedFilename) {
    let (range, title) = {
        let Some(caps) = catalog.trailer().captures(rest.as_str()) else {
            return;
        };
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            return;
        };
        (whole.range(), inner.as_str().to_string())
    };

    trace!(trailer = %title, "Found trailer marker");
    rest.cut(range, divider::TRAILER);
    release.is_trailer = true;
    release.trailer_title = Some(title);
}

/// Detect the season/episode token (`S01E02`, `1x02`, `s01e01e02`, ...).
pub fn extract_season_episode(
    rest: &mut Remainder,
    catalog: &Catalog,
    release: &mut ParsedFilename,
) {
    let (range, season, episodes) = {
        let Some(caps) = catalog.find_season_episode(rest.as_str()) else {
            return;
        };
        let Some(whole) = caps.get(0) else {
            return;
        };
        let season = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
        let episodes: Vec<u32> = caps
            .get(2)
            .map(|suffix| {
                catalog
                    .episode()
                    .captures_iter(suffix.as_str())
                    .filter_map(|ep| ep.get(1)?.as_str().parse().ok())
                    .collect()
            })
            .unwrap_or_default();
        (whole.range(), season, episodes)
    };

    rest.cut(range, divider::TV_SHOW);

    if let Some(season) = season {
        trace!(season, ?episodes, "Found season/episode token");
        release.season = Some(season);
        release.episodes = episodes;
    }
}

/// Detect a part or disc marker. Patterns are tried in priority order and
/// only the first that matches is applied.
pub fn extract_part(rest: &mut Remainder, catalog: &Catalog, release: &mut ParsedFilename) {
    for pattern in catalog.parts() {
        let found = pattern.captures(rest.as_str()).and_then(|caps| {
            let whole = caps.get(0)?;
            let part = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
            Some((whole.range(), part))
        });

        if let Some((range, part)) = found {
            trace!(?part, "Found part marker");
            rest.cut(range, divider::PART);
            release.part = part;
            return;
        }
    }
}

/// Collect every `[SET name]` / `[SET name - n]` marker, left to right.
///
/// A marker enclosing a divider written by an earlier stage is left alone,
/// so the divider stays in place for the title and secondary-title lookups.
pub fn extract_sets(rest: &mut Remainder, catalog: &Catalog, release: &mut ParsedFilename) {
    loop {
        let found = catalog
            .set()
            .captures_iter(rest.as_str())
            .filter_map(|caps| Some((caps.get(0)?.range(), caps.get(1)?.as_str().to_string())))
            .find(|(_, title)| !holds_marker(title));
        let Some((range, mut title)) = found else {
            break;
        };
        rest.cut(range, divider::SET);

        let mut index = None;
        let trailing = catalog.set_index().captures(&title).and_then(|caps| {
            let whole = caps.get(0)?;
            Some((whole.start(), caps.get(1)?.as_str().parse::<u32>().ok()))
        });
        if let Some((start, parsed)) = trailing {
            index = parsed;
            title.truncate(start);
        }

        let set = MovieSet::new(title.trim(), index);
        trace!(title = %set.title, index = ?set.index, "Found box set");
        release.sets.push(set);
    }
}

fn holds_marker(text: &str) -> bool {
    [
        divider::TRAILER_MARKER,
        divider::TV_SHOW_MARKER,
        divider::PART_MARKER,
    ]
    .iter()
    .any(|marker| text.contains(marker))
}
