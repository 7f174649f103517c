//! Video and audio codec enums.

use super::{from_label, ParseError};

/// Audio codec tag found in a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "&'static str", try_from = "String"))]
pub enum AudioCodec {
    /// Dolby Digital (AC-3)
    Ac3,
    /// DTS
    Dts,
    /// Dolby Digital, tagged as `DD`
    Dd,
    /// AAC
    Aac,
}

impl AudioCodec {
    /// All audio codecs in catalog order.
    pub const ALL: [AudioCodec; 4] = [AudioCodec::Ac3, AudioCodec::Dts, AudioCodec::Dd, AudioCodec::Aac];

    /// Canonical label.
    pub fn label(self) -> &'static str {
        match self {
            AudioCodec::Ac3 => "AC3",
            AudioCodec::Dts => "DTS",
            AudioCodec::Dd => "DD",
            AudioCodec::Aac => "AAC",
        }
    }
}

impl std::fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for AudioCodec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_label(&Self::ALL, Self::label, s.trim())
            .ok_or_else(|| ParseError(format!("invalid audio codec: {}", s)))
    }
}

impl From<AudioCodec> for &'static str {
    fn from(value: AudioCodec) -> Self {
        value.label()
    }
}

impl TryFrom<String> for AudioCodec {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Video codec (or encoder family) found in a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "&'static str", try_from = "String"))]
pub enum VideoCodec {
    /// XviD (MPEG-4 Part 2)
    Xvid,
    /// DivX (MPEG-4 Part 2)
    Divx,
    /// H.264/AVC, including x264 encodes
    H264,
}

impl VideoCodec {
    /// All video codecs in catalog order.
    pub const ALL: [VideoCodec; 3] = [VideoCodec::Xvid, VideoCodec::Divx, VideoCodec::H264];

    /// Canonical label.
    pub fn label(self) -> &'static str {
        match self {
            VideoCodec::Xvid => "XviD",
            VideoCodec::Divx => "DivX",
            VideoCodec::H264 => "H.264",
        }
    }
}

impl std::fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for VideoCodec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h264" | "x264" | "avc" => Ok(VideoCodec::H264),
            other => from_label(&Self::ALL, Self::label, other)
                .ok_or_else(|| ParseError(format!("invalid video codec: {}", s))),
        }
    }
}

impl From<VideoCodec> for &'static str {
    fn from(value: VideoCodec) -> Self {
        value.label()
    }
}

impl TryFrom<String> for VideoCodec {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_codec_display_fromstr_roundtrip() {
        for codec in AudioCodec::ALL {
            assert_eq!(codec.to_string().parse::<AudioCodec>(), Ok(codec));
        }
        assert_eq!("ac3".parse::<AudioCodec>(), Ok(AudioCodec::Ac3));
    }

    #[test]
    fn video_codec_aliases() {
        assert_eq!("H.264".parse::<VideoCodec>(), Ok(VideoCodec::H264));
        assert_eq!("x264".parse::<VideoCodec>(), Ok(VideoCodec::H264));
        assert_eq!("xvid".parse::<VideoCodec>(), Ok(VideoCodec::Xvid));
        assert!("hevc".parse::<VideoCodec>().is_err());
    }
}
