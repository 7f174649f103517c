//! Title, year and secondary title resolution.
//!
//! Runs last, on whatever text the earlier stages left behind.

use tracing::trace;

use super::divider;
use crate::catalog::{Catalog, TITLE_YEAR_RANGE, TOKEN_YEAR_RANGE};
use crate::model::ParsedFilename;

const TOKEN_SEPARATORS: [char; 3] = ['/', '[', ']'];

/// Resolve the title, the year and loose language tags.
pub fn resolve(rest: &str, catalog: &Catalog, release: &mut ParsedFilename) {
    let head = &rest[..cut_point(rest, release)];
    let mut tokens = head.split(TOKEN_SEPARATORS).filter(|t| !t.is_empty());

    let mut title = String::new();
    for token in tokens.by_ref() {
        let cleaned = catalog.clean_title(token);
        if cleaned.chars().count() >= 2 && !cleaned.starts_with('-') {
            title = cleaned;
            break;
        }
    }

    let mut year_checked = false;
    for token in tokens {
        let cleaned = catalog.clean_title(token);
        if cleaned.is_empty() {
            continue;
        }
        if !year_checked {
            year_checked = true;
            release.year = parse_year(&cleaned, &TOKEN_YEAR_RANGE);
        }
        if !catalog.language_detection() {
            break;
        }
        if cleaned.chars().count() >= 2 && !cleaned.contains('-') {
            for keyword in catalog.loose_languages() {
                if keyword.regex().is_match(&cleaned) {
                    release.add_language(keyword.value);
                }
            }
        }
    }

    if release.year.is_none() {
        let trailing = catalog.movie_year().captures(&title).and_then(|caps| {
            let whole = caps.get(0)?;
            let year = parse_year(caps.get(1)?.as_str(), &TITLE_YEAR_RANGE)?;
            Some((whole.start(), year))
        });
        if let Some((start, year)) = trailing {
            release.year = Some(year);
            title = catalog.clean_title(&title[..start]);
        }
    }

    trace!(%title, year = ?release.year, "Resolved title");
    release.title = title;
}

/// Resolve the episode title and the part title.
pub fn resolve_secondary(rest: &str, catalog: &Catalog, release: &mut ParsedFilename) {
    if release.season.is_some() {
        release.episode_title = second_title(rest, divider::TV_SHOW_MARKER, catalog);
    }
    if release.part.is_some() {
        release.part_title = second_title(rest, divider::PART_MARKER, catalog);
    }
}

/// Earliest marker left by a recognized structural stage, or the end.
fn cut_point(rest: &str, release: &ParsedFilename) -> usize {
    let find = |recognized: bool, marker: &str| recognized.then(|| rest.find(marker)).flatten();
    [
        find(release.is_trailer, divider::TRAILER_MARKER),
        find(release.season.is_some(), divider::TV_SHOW_MARKER),
        find(release.part.is_some(), divider::PART_MARKER),
    ]
    .into_iter()
    .flatten()
    .min()
    .unwrap_or(rest.len())
}

fn second_title(rest: &str, marker: &str, catalog: &Catalog) -> Option<String> {
    let tail = &rest[rest.find(marker)? + marker.len()..];
    let mut from = 0;
    while let Some(caps) = catalog.find_second_title(tail, from) {
        let title = catalog.clean_title(caps.get(1)?.as_str());
        if !title.is_empty() {
            return Some(title);
        }
        from = caps.get(0)?.end();
    }
    None
}

fn parse_year(text: &str, range: &std::ops::RangeInclusive<u16>) -> Option<u16> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok().filter(|year| range.contains(year))
}
