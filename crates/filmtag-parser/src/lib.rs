//! # filmtag-parser
//!
//! Extracts structured metadata from video file and directory names.
//!
//! A name such as `The.Movie.Name.2011.720p.BluRay.x264-GROUP` carries a
//! title, a year and a handful of technical tags. The scanner runs a fixed
//! sequence of pattern stages over the name and returns everything it
//! recognized as a [`ParsedFilename`]. Scanning never fails; a name with no
//! recognizable structure simply becomes the title.
//!
//! ## Quick Start
//!
//! ```
//! use filmtag_parser::{scan, AssetKind, Resolution, VideoSource};
//!
//! let result = scan("The.Movie.Name.2011.720p.BluRay.x264-GROUP", AssetKind::Directory);
//!
//! assert_eq!(result.title, "The Movie Name");
//! assert_eq!(result.year, Some(2011));
//! assert_eq!(result.hd_resolution, Some(Resolution::_720p));
//! assert_eq!(result.video_source, Some(VideoSource::BluRay));
//! ```
//!
//! ## Configured Scanning
//!
//! ```
//! use filmtag_parser::{AssetKind, Scanner};
//! use filmtag_parser::config::ScannerConfig;
//!
//! let config = ScannerConfig::builder()
//!     .skip_keyword("PROPER")
//!     .language_detection(false)
//!     .build();
//!
//! let scanner = Scanner::new(config).unwrap();
//! let result = scanner.scan("Movie.PROPER.FRENCH.avi", AssetKind::File);
//! assert_eq!(result.title, "Movie");
//! assert!(result.languages.is_empty());
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod output;

mod parser;

use std::sync::{Arc, LazyLock};

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use model::{
    AssetKind, AudioCodec, FrameRate, Language, MovieSet, ParseError, ParsedFilename,
    Resolution, VideoCodec, VideoSource, DIRECTORY_CONTAINER,
};

use config::ScannerConfig;

static DEFAULT_SCANNER: LazyLock<Scanner> = LazyLock::new(|| {
    Scanner::new(ScannerConfig::default()).expect("built-in patterns compile")
});

/// Scan a name using the default configuration.
///
/// The default catalog is compiled on first use and shared afterwards.
///
/// # Examples
///
/// ```
/// use filmtag_parser::{scan, AssetKind};
///
/// let result = scan("Show.Name.S02E03E04.HDTV.FRENCH", AssetKind::Directory);
/// assert_eq!(result.season, Some(2));
/// assert_eq!(result.episodes, vec![3, 4]);
/// ```
pub fn scan(name: &str, kind: AssetKind) -> ParsedFilename {
    DEFAULT_SCANNER.scan(name, kind)
}

/// A configured filename scanner.
///
/// Cloning is cheap: clones share one compiled [`Catalog`], and scans from
/// any number of threads never contend.
#[derive(Debug, Clone)]
pub struct Scanner {
    catalog: Arc<Catalog>,
}

impl Scanner {
    /// Compile a scanner for the given configuration.
    ///
    /// Fails if a skip keyword is empty.
    pub fn new(config: ScannerConfig) -> Result<Self> {
        Ok(Self::from_catalog(Catalog::new(&config)?))
    }

    /// Wrap an already compiled catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Scan a file or directory name.
    ///
    /// Pass the bare name, not a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use filmtag_parser::{AssetKind, MovieSet, Scanner};
    ///
    /// let scanner = Scanner::default();
    /// let result = scanner.scan("Movie [SET Trilogy - 2].Part2.mkv", AssetKind::File);
    /// assert_eq!(result.sets, vec![MovieSet::new("Trilogy", Some(2))]);
    /// assert_eq!(result.part, Some(2));
    /// assert_eq!(result.container, "MKV");
    /// ```
    pub fn scan(&self, name: &str, kind: AssetKind) -> ParsedFilename {
        parser::scan_with_catalog(name, kind, &self.catalog)
    }

    /// Whether this scanner detects language tags.
    pub fn language_detection(&self) -> bool {
        self.catalog.language_detection()
    }

    /// The compiled catalog behind this scanner.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for Scanner {
    fn default() -> Self {
        DEFAULT_SCANNER.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_movie_directory() {
        let result = scan("The.Movie.Name.2011.720p.BluRay.x264-GROUP", AssetKind::Directory);
        assert_eq!(result.title, "The Movie Name");
        assert_eq!(result.year, Some(2011));
        assert_eq!(result.hd_resolution, Some(Resolution::_720p));
        assert_eq!(result.video_source, Some(VideoSource::BluRay));
        assert_eq!(result.video_codec, Some(VideoCodec::H264));
        assert_eq!(result.container, DIRECTORY_CONTAINER);
        assert_eq!(result.extension, "");
    }

    #[test]
    fn test_scan_tv_episodes() {
        let result = scan("Show.Name.S02E03E04.HDTV.FRENCH", AssetKind::Directory);
        assert_eq!(result.title, "Show Name");
        assert_eq!(result.season, Some(2));
        assert_eq!(result.episodes, vec![3, 4]);
        assert_eq!(result.languages, vec![Language::French]);
        assert_eq!(result.video_source, Some(VideoSource::Hdtv));
        assert!(result.is_tv_show());
        assert_eq!(result.first_episode(), Some(3));
    }

    #[test]
    fn test_scan_set_and_part() {
        let result = scan("Movie [SET Trilogy - 2].Part2.mkv", AssetKind::File);
        assert_eq!(result.title, "Movie");
        assert_eq!(result.sets, vec![MovieSet::new("Trilogy", Some(2))]);
        assert_eq!(result.part, Some(2));
        assert!(result.is_multi_part());
        assert_eq!(result.extension, "mkv");
    }

    #[test]
    fn test_scan_trailer() {
        let result = scan("Trailer.[Official Trailer].mov", AssetKind::File);
        assert!(result.is_trailer);
        assert_eq!(result.trailer_title.as_deref(), Some("Official Trailer"));
        assert_eq!(result.title, "Trailer");
        assert_eq!(result.container, "MOV");
    }

    #[test]
    fn test_scan_unstructured() {
        let result = scan("randomfile", AssetKind::File);
        assert_eq!(
            result,
            ParsedFilename {
                original_name: "randomfile".to_string(),
                title: "randomfile".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_scan_episode_title() {
        let result = scan("Show - S01E02 - Pilot.mkv", AssetKind::File);
        assert_eq!(result.title, "Show");
        assert_eq!(result.season, Some(1));
        assert_eq!(result.episodes, vec![2]);
        assert_eq!(result.episode_title.as_deref(), Some("Pilot"));
    }

    #[test]
    fn test_scan_part_title() {
        let result = scan("Movie.CD1.-.The.Beginning.avi", AssetKind::File);
        assert_eq!(result.part, Some(1));
        assert_eq!(result.part_title.as_deref(), Some("The Beginning"));
    }

    #[test]
    fn test_scan_is_deterministic() {
        let scanner = Scanner::default();
        let name = "Some.Show.1x05.DVDRip.XviD.ITA.[SET Box - 1]";
        assert_eq!(
            scanner.scan(name, AssetKind::Directory),
            scanner.scan(name, AssetKind::Directory)
        );
    }

    #[test]
    fn test_language_detection_disabled() {
        let config = ScannerConfig::builder().language_detection(false).build();
        let scanner = Scanner::new(config).unwrap();
        assert!(!scanner.language_detection());
        let result = scanner.scan("Movie.FRENCH.2011 [eng]", AssetKind::Directory);
        assert!(result.languages.is_empty());
    }

    #[test]
    fn test_skip_keyword_applied_before_scanning() {
        let config = ScannerConfig::builder().skip_keyword("LIMITED").build();
        let scanner = Scanner::new(config).unwrap();
        let result = scanner.scan("Movie.LIMITED.2010.DVDRip", AssetKind::Directory);
        assert_eq!(result.title, "Movie");
        assert_eq!(result.year, Some(2010));
        assert_eq!(result.video_source, Some(VideoSource::DvdRip));
    }

    #[test]
    fn test_empty_skip_keyword_rejected() {
        let config = ScannerConfig::builder().skip_keyword("").build();
        assert!(matches!(
            Scanner::new(config),
            Err(Error::EmptySkipKeyword(0))
        ));
    }

    #[test]
    fn test_scanner_is_shared_across_threads() {
        let scanner = Scanner::default();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let scanner = scanner.clone();
                std::thread::spawn(move || scanner.scan("Movie.2011.720p.mkv", AssetKind::File))
            })
            .collect();
        for handle in handles {
            let result = handle.join().unwrap();
            assert_eq!(result.hd_resolution, Some(Resolution::_720p));
        }
    }
}
