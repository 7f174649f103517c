//! `key: value` output, one recognized field per line.

use std::fmt;

use super::OutputFormat;
use crate::model::ParsedFilename;

/// Formatter listing every recognized field under a stable key.
///
/// Absent fields are left out, so the output of an unstructured name is
/// just its title and original name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValueFormat;

/// Ordered list of rendered fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyValueOutput {
    /// Field keys and rendered values, in a fixed order.
    pub fields: Vec<(String, String)>,
}

impl KeyValueOutput {
    /// Value of the first field with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn push(&mut self, key: &str, value: impl ToString) {
        self.fields.push((key.to_string(), value.to_string()));
    }
}

impl fmt::Display for KeyValueOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.fields {
            writeln!(f, "{}: {}", key, value)?;
        }
        Ok(())
    }
}

impl OutputFormat for KeyValueFormat {
    type Output = KeyValueOutput;

    fn format(&self, release: &ParsedFilename) -> Self::Output {
        let mut out = KeyValueOutput::default();

        out.push("name", &release.original_name);
        out.push("title", &release.title);
        if let Some(year) = release.year {
            out.push("year", year);
        }
        if let Some(season) = release.season {
            out.push("season", season);
        }
        if !release.episodes.is_empty() {
            let episodes: Vec<String> = release.episodes.iter().map(|e| e.to_string()).collect();
            out.push("episodes", episodes.join(","));
        }
        if let Some(ref title) = release.episode_title {
            out.push("episode_title", title);
        }
        if let Some(part) = release.part {
            out.push("part", part);
        }
        if let Some(ref title) = release.part_title {
            out.push("part_title", title);
        }
        for set in &release.sets {
            match set.index {
                Some(index) => out.push("set", format!("{} #{}", set.title, index)),
                None => out.push("set", &set.title),
            }
        }
        if release.is_trailer {
            out.push("trailer", release.trailer_title.as_deref().unwrap_or_default());
        }
        if !release.languages.is_empty() {
            let langs: Vec<&str> = release.languages.iter().map(|l| l.label()).collect();
            out.push("languages", langs.join(","));
        }
        if let Some(fps) = release.fps {
            out.push("fps", fps);
        }
        if let Some(codec) = release.audio_codec {
            out.push("audio_codec", codec);
        }
        if let Some(codec) = release.video_codec {
            out.push("video_codec", codec);
        }
        if let Some(resolution) = release.hd_resolution {
            out.push("hd_resolution", resolution);
        }
        if let Some(source) = release.video_source {
            out.push("video_source", source);
        }
        if !release.extension.is_empty() {
            out.push("extension", &release.extension);
        }
        if !release.container.is_empty() {
            out.push("container", &release.container);
        }

        out
    }
}
