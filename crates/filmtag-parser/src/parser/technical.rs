//! Technical keyword stages.
//!
//! Each category records at most one value: the first entry of its table
//! that matches anywhere in the remaining text. The match is replaced with
//! a neutral divider.

use tracing::trace;

use super::divider;
use super::remainder::Remainder;
use crate::catalog::{first_match, Catalog, Keyword};
use crate::model::ParsedFilename;

/// Run frame rate, audio codec, video codec, resolution and video source in
/// that order.
pub fn extract(rest: &mut Remainder, catalog: &Catalog, release: &mut ParsedFilename) {
    if let Some(fps) = claim(rest, catalog.frame_rates()) {
        release.fps = Some(fps);
    }
    if let Some(codec) = claim(rest, catalog.audio_codecs()) {
        release.audio_codec = Some(codec);
    }
    if let Some(codec) = claim(rest, catalog.video_codecs()) {
        release.video_codec = Some(codec);
    }
    if let Some(resolution) = claim(rest, catalog.resolutions()) {
        release.hd_resolution = Some(resolution);
    }
    // A directory keeps its DVD source unless something more specific shows up.
    if let Some(source) = claim(rest, catalog.video_sources()) {
        release.video_source = Some(source);
    }

    trace!(
        fps = ?release.fps,
        audio = ?release.audio_codec,
        video = ?release.video_codec,
        resolution = ?release.hd_resolution,
        source = ?release.video_source,
        "Technical keywords"
    );
}

/// Collect every strict language tag until none is left.
pub fn extract_strict_languages(
    rest: &mut Remainder,
    catalog: &Catalog,
    release: &mut ParsedFilename,
) {
    while let Some(language) = claim(rest, catalog.strict_languages()) {
        if release.add_language(language) {
            trace!(%language, "Found language tag");
        }
    }
}

fn claim<T: Copy>(rest: &mut Remainder, keywords: &[Keyword<T>]) -> Option<T> {
    let (value, range) = first_match(keywords, rest.as_str())?;
    rest.cut(range, divider::NEUTRAL);
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScannerConfig;
    use crate::model::{
        AudioCodec, FrameRate, Language, Resolution, VideoCodec, VideoSource,
    };

    fn catalog() -> Catalog {
        Catalog::new(&ScannerConfig::default()).unwrap()
    }

    #[test]
    fn one_value_per_category() {
        let catalog = catalog();
        let mut release = ParsedFilename::default();
        let mut rest = Remainder::new("Movie.DTS.AC3.XviD.720p.1080p.BluRay.25p");
        extract(&mut rest, &catalog, &mut release);

        assert_eq!(release.fps, Some(FrameRate::_25));
        // Table order decides, not position.
        assert_eq!(release.audio_codec, Some(AudioCodec::Ac3));
        assert_eq!(release.video_codec, Some(VideoCodec::Xvid));
        assert_eq!(release.hd_resolution, Some(Resolution::_720p));
        assert_eq!(release.video_source, Some(VideoSource::BluRay));
        assert!(rest.as_str().contains("DTS"));
        assert!(rest.as_str().contains("1080p"));
    }

    #[test]
    fn directory_source_survives_without_match() {
        let catalog = catalog();
        let mut release = ParsedFilename {
            video_source: Some(VideoSource::Dvd),
            ..Default::default()
        };
        let mut rest = Remainder::new("Movie.2011");
        extract(&mut rest, &catalog, &mut release);
        assert_eq!(release.video_source, Some(VideoSource::Dvd));
    }

    #[test]
    fn specific_source_beats_dvd() {
        let catalog = catalog();
        let mut release = ParsedFilename::default();
        let mut rest = Remainder::new("Movie.DVDRip");
        extract(&mut rest, &catalog, &mut release);
        assert_eq!(release.video_source, Some(VideoSource::DvdRip));
    }

    #[test]
    fn strict_languages_collect_all_tags_once() {
        let catalog = catalog();
        let mut release = ParsedFilename::default();
        let mut rest = Remainder::new("Movie.FRENCH.[GERMAN].FR");
        extract_strict_languages(&mut rest, &catalog, &mut release);
        assert_eq!(release.languages, vec![Language::French, Language::German]);
        assert!(!rest.as_str().contains("FR"));
    }
}
