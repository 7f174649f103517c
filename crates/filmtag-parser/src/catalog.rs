//! Pattern catalog.
//!
//! Every matcher the scanner uses is compiled here, once, from the built-in
//! keyword tables and the configured skip keywords. A [`Catalog`] is
//! read-only after construction and can be shared freely between threads.
//!
//! Three boundary flavours are used:
//!
//! - *token* boundaries: one of `. [ ] ( )`, or the start/end of the text;
//! - *word* boundaries: token boundaries plus space, `_`, `-` and `,`;
//! - none, for the structural patterns that carry their own delimiters.

use regex::{Captures, Regex};
use tracing::debug;

use crate::config::ScannerConfig;
use crate::error::{Error, Result};
use crate::model::{AudioCodec, FrameRate, Language, Resolution, VideoCodec, VideoSource};
use crate::parser::divider;

const TOKEN_BOUNDARY: &str = r"(?:[.\[\]()]|$|^)";
const NOTOKEN_DELIMITER: &str = r"(?:[ _\-,])";
const WORD_BOUNDARY: &str = r"(?:[ _\-,.\[\]()]|$|^)";

/// Smallest and largest year accepted from a standalone numeric token.
pub const TOKEN_YEAR_RANGE: std::ops::RangeInclusive<u16> = 1800..=3000;

/// Smallest and largest year accepted from the end of a title.
pub const TITLE_YEAR_RANGE: std::ops::RangeInclusive<u16> = 1919..=2099;

/// A compiled matcher paired with the label it stands for.
#[derive(Debug, Clone)]
pub struct Keyword<T> {
    /// Label recorded when the pattern matches.
    pub value: T,
    regex: Regex,
}

impl<T: Copy> Keyword<T> {
    /// The compiled pattern.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// First entry of `keywords` (in order) that matches anywhere in `haystack`,
/// together with the matched byte range.
pub fn first_match<T: Copy>(
    keywords: &[Keyword<T>],
    haystack: &str,
) -> Option<(T, std::ops::Range<usize>)> {
    keywords.iter().find_map(|keyword| {
        keyword
            .regex
            .find(haystack)
            .map(|m| (keyword.value, m.range()))
    })
}

/// The full set of compiled matchers used by a scan.
#[derive(Debug, Clone)]
pub struct Catalog {
    language_detection: bool,
    skip_keywords: Vec<Regex>,

    trailer: Regex,
    season_episode: Regex,
    episode: Regex,
    parts: Vec<Regex>,
    set: Regex,
    set_index: Regex,
    movie_year: Regex,
    cleanup_divider: Regex,
    cleanup_cut: Regex,
    second_title: Regex,

    frame_rates: Vec<Keyword<FrameRate>>,
    audio_codecs: Vec<Keyword<AudioCodec>>,
    video_codecs: Vec<Keyword<VideoCodec>>,
    resolutions: Vec<Keyword<Resolution>>,
    video_sources: Vec<Keyword<VideoSource>>,
    strict_languages: Vec<Keyword<Language>>,
    loose_languages: Vec<Keyword<Language>>,
}

impl Catalog {
    /// Compile the catalog for the given configuration.
    ///
    /// Fails if a skip keyword is empty or any pattern does not compile;
    /// nothing is deferred to scan time.
    pub fn new(config: &ScannerConfig) -> Result<Self> {
        let skip_keywords = config
            .skip_keywords
            .iter()
            .enumerate()
            .map(|(i, keyword)| {
                if keyword.trim().is_empty() {
                    return Err(Error::EmptySkipKeyword(i));
                }
                compile(
                    &format!("skip keyword '{}'", keyword),
                    &format!("(?i){}", regex::escape(keyword)),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        let catalog = Self {
            language_detection: config.language_detection,
            skip_keywords,

            trailer: compile("trailer", r"(?i)\[([^\[\]]*trailer[^\[]*)\]")?,
            // Must not start right after a digit; enforced in `find_season_episode`.
            season_episode: compile(
                "season/episode",
                r"(?i)s?([0-9]{1,2})((?:e[0-9]+)+|(?:x[0-9]+)+)",
            )?,
            episode: compile("episode", r"(?i)[ex]([0-9]+)")?,
            parts: vec![
                compile("part (CD n)", &word_bounded("CD ([0-9]+)"))?,
                compile(
                    "part (CDn/DISCn/DISKn/PARTn)",
                    &word_bounded("(?:CD|DISC|DISK|PART)([0-9]+)"),
                )?,
                compile("part (n DVD)", &token_bounded("([0-9]{1,2})[ .]?DVD"))?,
            ],
            set: compile("set", r"\[SET ([^\[\]]*)\]")?,
            set_index: compile("set index", r"-\s*([0-9]+)\s*$")?,
            movie_year: compile("movie year", r"[^0-9]\(?([0-9]{4})\)?$")?,
            cleanup_divider: compile("title cleanup divider", r"[. _\[\]]+")?,
            cleanup_cut: compile("title cleanup cut", r"-$|\($")?,
            // Must not start right after a season/part marker; enforced in
            // `find_second_title`.
            second_title: compile("second title", "-([^/]+)")?,

            frame_rates: keywords(&FrameRate::ALL, "frame rate", |rate| {
                let n = rate.label();
                word_bounded(&format!("p{n}|{n}p"))
            })?,
            audio_codecs: keywords(&AudioCodec::ALL, "audio codec", |codec| {
                word_bounded(audio_codec_pattern(codec))
            })?,
            video_codecs: keywords(&VideoCodec::ALL, "video codec", |codec| {
                word_bounded(video_codec_pattern(codec))
            })?,
            resolutions: keywords(&Resolution::ALL, "resolution", |resolution| {
                word_bounded(resolution_pattern(resolution))
            })?,
            video_sources: keywords(&VideoSource::ALL, "video source", |source| {
                word_bounded(video_source_pattern(source))
            })?,
            strict_languages: keywords(&Language::ALL, "strict language", |language| {
                token_bounded(&literal_alternation(language.strict_tokens()))
            })?,
            loose_languages: keywords(&Language::ALL, "loose language", |language| {
                word_bounded(&literal_alternation(language.loose_tokens()))
            })?,
        };

        debug!(
            skip_keywords = catalog.skip_keywords.len(),
            language_detection = catalog.language_detection,
            "Built filename pattern catalog"
        );

        Ok(catalog)
    }

    /// Whether language tags are detected.
    pub fn language_detection(&self) -> bool {
        self.language_detection
    }

    /// Compiled skip keywords, in configuration order.
    pub fn skip_keywords(&self) -> &[Regex] {
        &self.skip_keywords
    }

    /// Trailer marker: `[... trailer ...]`, capturing the bracket content.
    pub fn trailer(&self) -> &Regex {
        &self.trailer
    }

    /// Per-episode sub-pattern, `e<n>` or `x<n>`.
    pub fn episode(&self) -> &Regex {
        &self.episode
    }

    /// Part/disc patterns in priority order.
    pub fn parts(&self) -> &[Regex] {
        &self.parts
    }

    /// Box-set marker `[SET ...]`.
    pub fn set(&self) -> &Regex {
        &self.set
    }

    /// Trailing `- <n>` inside a set marker.
    pub fn set_index(&self) -> &Regex {
        &self.set_index
    }

    /// Four-digit year at the end of a title, optionally parenthesized.
    pub fn movie_year(&self) -> &Regex {
        &self.movie_year
    }

    /// Frame rate keywords.
    pub fn frame_rates(&self) -> &[Keyword<FrameRate>] {
        &self.frame_rates
    }

    /// Audio codec keywords.
    pub fn audio_codecs(&self) -> &[Keyword<AudioCodec>] {
        &self.audio_codecs
    }

    /// Video codec keywords.
    pub fn video_codecs(&self) -> &[Keyword<VideoCodec>] {
        &self.video_codecs
    }

    /// HD resolution keywords.
    pub fn resolutions(&self) -> &[Keyword<Resolution>] {
        &self.resolutions
    }

    /// Video source keywords.
    pub fn video_sources(&self) -> &[Keyword<VideoSource>] {
        &self.video_sources
    }

    /// Case-sensitive, token-bounded language keywords.
    pub fn strict_languages(&self) -> &[Keyword<Language>] {
        &self.strict_languages
    }

    /// Case-insensitive, word-bounded language keywords.
    pub fn loose_languages(&self) -> &[Keyword<Language>] {
        &self.loose_languages
    }

    /// Find the season/episode combinator, skipping candidates that start
    /// right after a digit.
    pub fn find_season_episode<'h>(&self, haystack: &'h str) -> Option<Captures<'h>> {
        captures_where(&self.season_episode, haystack, 0, |before| {
            !before.ends_with(|c: char| c.is_ascii_digit())
        })
    }

    /// Find a `-` separated second title at or after `start`, skipping
    /// dashes that directly follow a season or part marker.
    pub fn find_second_title<'h>(&self, haystack: &'h str, start: usize) -> Option<Captures<'h>> {
        captures_where(&self.second_title, haystack, start, |before| {
            !before.ends_with(divider::TV_SHOW_MARKER) && !before.ends_with(divider::PART_MARKER)
        })
    }

    /// Clean a title candidate.
    ///
    /// Runs of `. _[]` collapse into one space, the result is trimmed, and
    /// trailing `-` or `(` are cut. Applying it twice changes nothing.
    pub fn clean_title(&self, token: &str) -> String {
        let mut title = self
            .cleanup_divider
            .replace_all(token, " ")
            .trim()
            .to_string();
        loop {
            let cut = self.cleanup_cut.replace(&title, "").trim().to_string();
            if cut == title {
                return title;
            }
            title = cut;
        }
    }

    /// Map a free-text label to a language.
    ///
    /// Returns the first language whose loose keywords occur in the label,
    /// e.g. `"eng"`, `"French subs"` or `"[PL]"`.
    pub fn determine_language(&self, label: &str) -> Option<Language> {
        first_match(&self.loose_languages, label).map(|(language, _)| language)
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::pattern(name, source))
}

fn keywords<T: Copy + std::fmt::Display>(
    values: &[T],
    category: &str,
    pattern: impl Fn(T) -> String,
) -> Result<Vec<Keyword<T>>> {
    values
        .iter()
        .map(|&value| {
            Ok(Keyword {
                value,
                regex: compile(&format!("{} '{}'", category, value), &pattern(value))?,
            })
        })
        .collect()
}

/// Case-insensitive pattern with word boundaries on both sides.
fn word_bounded(pattern: &str) -> String {
    format!("(?i){WORD_BOUNDARY}(?:{pattern}){WORD_BOUNDARY}")
}

/// Case-sensitive pattern with token boundaries on both sides; non-token
/// delimiters directly around the pattern belong to the match.
fn token_bounded(pattern: &str) -> String {
    format!(
        "{TOKEN_BOUNDARY}{NOTOKEN_DELIMITER}*(?:{pattern}){NOTOKEN_DELIMITER}*{TOKEN_BOUNDARY}"
    )
}

fn literal_alternation(tokens: &[&str]) -> String {
    tokens
        .iter()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|")
}

fn audio_codec_pattern(codec: AudioCodec) -> &'static str {
    match codec {
        AudioCodec::Ac3 => "AC3",
        AudioCodec::Dts => "DTS",
        AudioCodec::Dd => "DD",
        AudioCodec::Aac => "AAC",
    }
}

fn video_codec_pattern(codec: VideoCodec) -> &'static str {
    match codec {
        VideoCodec::Xvid => "XVID",
        VideoCodec::Divx => "DIVX|DIVX6",
        VideoCodec::H264 => r"H264|H\.264|X264",
    }
}

fn resolution_pattern(resolution: Resolution) -> &'static str {
    match resolution {
        Resolution::_720p => "720p",
        Resolution::_1080i => "1080i",
        Resolution::_1080p => "1080p",
        Resolution::Hd => "HD",
    }
}

fn video_source_pattern(source: VideoSource) -> &'static str {
    match source {
        VideoSource::HdDvd => "HDDVD|HD-DVD|HDDVDRIP",
        VideoSource::Hd2Dvd => "HD2DVD",
        VideoSource::HrHdtv => "HRHDTV",
        VideoSource::Hdtv => "HDTV",
        VideoSource::Pdtv => "PDTV",
        VideoSource::DvdRip => "DVDRip",
        VideoSource::DvdScr => "DVDSCR",
        VideoSource::DsRip => "DSRip",
        VideoSource::BluRay => "BLURAY|BDRIP|BLURAYRIP|BLU-RAY",
        VideoSource::DTheater => "DTH|D-THEATER|DTHEATER",
        VideoSource::Cam => "CAM",
        VideoSource::R5 => "R5",
        VideoSource::Line => "LINE",
        VideoSource::Mvcd => "MVCD",
        VideoSource::Vcd => "VCD",
        VideoSource::Ts => "TS",
        VideoSource::Dvd => "DVD",
    }
}

/// First match of `regex` at or after `start` whose preceding text passes
/// `allow`. Stands in for a negative lookbehind: a rejected candidate is
/// retried one character further on, as a backtracking engine would.
fn captures_where<'h>(
    regex: &Regex,
    haystack: &'h str,
    mut start: usize,
    allow: impl Fn(&str) -> bool,
) -> Option<Captures<'h>> {
    while start <= haystack.len() {
        let caps = regex.captures_at(haystack, start)?;
        let at = caps.get(0)?.start();
        if allow(&haystack[..at]) {
            return Some(caps);
        }
        start = haystack[at..]
            .chars()
            .next()
            .map_or(haystack.len() + 1, |c| at + c.len_utf8());
    }
    None
}
