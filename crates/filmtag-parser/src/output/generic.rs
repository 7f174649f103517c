//! Generic human-readable output formatting.

use std::fmt;

use super::OutputFormat;
use crate::model::ParsedFilename;

/// Generic human-readable output formatter.
///
/// Produces a single line summarizing every recognized field, useful for
/// logging and quick inspection.
///
/// # Example
///
/// ```
/// use filmtag_parser::{scan, AssetKind, output::{OutputFormat, GenericFormat}};
///
/// let release = scan("The.Movie.Name.2011.720p.BluRay.x264-GROUP", AssetKind::Directory);
/// let output = GenericFormat.format(&release);
///
/// assert_eq!(
///     output.formatted_string,
///     "The Movie Name (2011) [720p, H.264, BluRay] .DVD"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericFormat;

/// Generic output structure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenericOutput {
    /// Human-readable formatted string
    pub formatted_string: String,
    /// Name that was scanned
    pub original_name: String,
}

impl fmt::Display for GenericOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted_string)
    }
}

impl OutputFormat for GenericFormat {
    type Output = GenericOutput;

    fn format(&self, release: &ParsedFilename) -> Self::Output {
        let mut parts = Vec::new();

        // Title and year
        let mut title_part = release.title.clone();
        if let Some(year) = release.year {
            title_part.push_str(&format!(" ({})", year));
        }
        parts.push(title_part);

        // Season and episodes
        if let Some(season) = release.season {
            let mut tv_info = format!("S{:02}", season);
            for episode in &release.episodes {
                tv_info.push_str(&format!("E{:02}", episode));
            }
            parts.push(tv_info);
        }

        if let Some(ref title) = release.episode_title {
            parts.push(format!("\"{}\"", title));
        }

        if let Some(part) = release.part {
            parts.push(format!("Part {}", part));
        }

        if let Some(ref title) = release.part_title {
            parts.push(format!("\"{}\"", title));
        }

        for set in &release.sets {
            match set.index {
                Some(index) => parts.push(format!("<Set: {} #{}>", set.title, index)),
                None => parts.push(format!("<Set: {}>", set.title)),
            }
        }

        // Technical tags
        let technical: Vec<String> = [
            release.hd_resolution.map(|r| r.to_string()),
            release.video_codec.map(|c| c.to_string()),
            release.audio_codec.map(|c| c.to_string()),
            release.video_source.map(|s| s.to_string()),
            release.fps.map(|r| format!("{}fps", r)),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !technical.is_empty() {
            parts.push(format!("[{}]", technical.join(", ")));
        }

        if !release.languages.is_empty() {
            let langs: Vec<String> = release.languages.iter().map(|l| l.to_string()).collect();
            parts.push(format!("{{{}}}", langs.join(", ")));
        }

        if release.is_trailer {
            match release.trailer_title {
                Some(ref title) => parts.push(format!("<Trailer: {}>", title)),
                None => parts.push("<Trailer>".to_string()),
            }
        }

        if !release.container.is_empty() {
            parts.push(format!(".{}", release.container));
        }

        GenericOutput {
            formatted_string: parts.join(" "),
            original_name: release.original_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Language, MovieSet, Resolution};

    #[test]
    fn test_title_only() {
        let release = ParsedFilename {
            original_name: "randomfile".to_string(),
            title: "randomfile".to_string(),
            ..Default::default()
        };
        let output = GenericFormat.format(&release);
        assert_eq!(output.formatted_string, "randomfile");
        assert_eq!(output.original_name, "randomfile");
    }

    #[test]
    fn test_all_sections() {
        let release = ParsedFilename {
            title: "Movie".to_string(),
            year: Some(1999),
            part: Some(2),
            part_title: Some("The End".to_string()),
            sets: vec![MovieSet::new("Saga", Some(3)), MovieSet::new("Best Of", None)],
            hd_resolution: Some(Resolution::_1080p),
            languages: vec![Language::English, Language::DualLanguage],
            is_trailer: true,
            trailer_title: Some("Teaser Trailer".to_string()),
            container: "MKV".to_string(),
            ..Default::default()
        };
        let output = GenericFormat.format(&release);
        assert_eq!(
            output.to_string(),
            "Movie (1999) Part 2 \"The End\" <Set: Saga #3> <Set: Best Of> [1080p] \
             {English, Dual Language} <Trailer: Teaser Trailer> .MKV"
        );
    }
}
