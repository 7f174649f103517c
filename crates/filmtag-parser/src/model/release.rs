//! Result record produced by one scan.

use super::{AudioCodec, FrameRate, Language, Resolution, VideoCodec, VideoSource};

/// Box-set membership read from a `[SET ...]` marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieSet {
    /// Name of the set, with any trailing index removed.
    pub title: String,
    /// Position within the set, from a trailing `- <n>`.
    pub index: Option<u32>,
}

impl MovieSet {
    /// Create a set entry.
    pub fn new(title: impl Into<String>, index: Option<u32>) -> Self {
        Self {
            title: title.into(),
            index,
        }
    }
}

/// Everything the scanner could read from a single file or directory name.
///
/// Fields are absent unless positively matched. The record is filled by the
/// scanner and handed to the caller as a plain value.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedFilename {
    /// The name as provided to the scanner
    pub original_name: String,
    /// Cleaned primary title
    pub title: String,
    /// Release year
    pub year: Option<u16>,

    // TV episode info
    /// Season number; `Some(0)` is a real season zero
    pub season: Option<u32>,
    /// Episode numbers in the order they appear in the season token
    pub episodes: Vec<u32>,
    /// Episode title following the season marker
    pub episode_title: Option<String>,

    // Multi-part and box sets
    /// Part or disc index
    pub part: Option<u32>,
    /// Title following the part marker
    pub part_title: Option<String>,
    /// Box sets in left-to-right order of their markers
    pub sets: Vec<MovieSet>,

    // Trailer
    /// Whether the name carries a trailer marker
    pub is_trailer: bool,
    /// Text inside the trailer marker
    pub trailer_title: Option<String>,

    // Localisation
    /// Spoken languages in detection order, without duplicates
    pub languages: Vec<Language>,

    // Technical
    /// Frame rate
    pub fps: Option<FrameRate>,
    /// Audio codec
    pub audio_codec: Option<AudioCodec>,
    /// Video codec
    pub video_codec: Option<VideoCodec>,
    /// HD resolution marker
    pub hd_resolution: Option<Resolution>,
    /// Source medium
    pub video_source: Option<VideoSource>,

    // File info
    /// File extension as found, empty for directories and bare names
    pub extension: String,
    /// Uppercased extension, or the directory sentinel
    pub container: String,
}

impl ParsedFilename {
    /// Create an empty record for the given input name.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            original_name: input.into(),
            ..Self::default()
        }
    }

    /// Whether a season marker was found.
    pub fn is_tv_show(&self) -> bool {
        self.season.is_some()
    }

    /// Whether a part or disc marker was found.
    pub fn is_multi_part(&self) -> bool {
        self.part.is_some()
    }

    /// First episode number, if any.
    pub fn first_episode(&self) -> Option<u32> {
        self.episodes.first().copied()
    }

    /// Add a language unless it is already present.
    ///
    /// Returns true when the language was new.
    pub fn add_language(&mut self, language: Language) -> bool {
        if self.languages.contains(&language) {
            return false;
        }
        self.languages.push(language);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_empty() {
        let record = ParsedFilename::new("name");
        assert_eq!(record.original_name, "name");
        assert!(record.title.is_empty());
        assert!(!record.is_tv_show());
        assert!(!record.is_multi_part());
        assert_eq!(record.first_episode(), None);
        assert!(!record.is_trailer);
    }

    #[test]
    fn add_language_suppresses_duplicates() {
        let mut record = ParsedFilename::new("name");
        assert!(record.add_language(Language::French));
        assert!(record.add_language(Language::English));
        assert!(!record.add_language(Language::French));
        assert_eq!(record.languages, vec![Language::French, Language::English]);
    }
}
