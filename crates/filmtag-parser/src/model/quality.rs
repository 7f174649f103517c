//! Resolution and source medium enums.

use super::{from_label, ParseError};

/// HD resolution marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "&'static str", try_from = "String"))]
pub enum Resolution {
    /// 1280x720 progressive
    _720p,
    /// 1920x1080 interlaced
    _1080i,
    /// 1920x1080 progressive
    _1080p,
    /// Unspecified high definition
    Hd,
}

impl Resolution {
    /// All resolutions in catalog order.
    pub const ALL: [Resolution; 4] = [
        Resolution::_720p,
        Resolution::_1080i,
        Resolution::_1080p,
        Resolution::Hd,
    ];

    /// Canonical label.
    pub fn label(self) -> &'static str {
        match self {
            Resolution::_720p => "720p",
            Resolution::_1080i => "1080i",
            Resolution::_1080p => "1080p",
            Resolution::Hd => "HD",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Resolution {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_label(&Self::ALL, Self::label, s.trim())
            .ok_or_else(|| ParseError(format!("invalid resolution: {}", s)))
    }
}

impl From<Resolution> for &'static str {
    fn from(value: Resolution) -> Self {
        value.label()
    }
}

impl TryFrom<String> for Resolution {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Source medium of the release.
///
/// Variants are declared in catalog order: specific media come before the
/// generic `HDTV` and `DVD` tags they overlap with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "&'static str", try_from = "String"))]
pub enum VideoSource {
    /// HD DVD
    HdDvd,
    /// HD to DVD conversion
    Hd2Dvd,
    /// High-resolution HDTV capture
    HrHdtv,
    /// HDTV capture
    Hdtv,
    /// PDTV capture
    Pdtv,
    /// DVD rip
    DvdRip,
    /// DVD screener
    DvdScr,
    /// Digital satellite rip
    DsRip,
    /// Blu-ray, including BD rips
    BluRay,
    /// D-Theater D-VHS
    DTheater,
    /// Camera recording
    Cam,
    /// Region 5 retail
    R5,
    /// Line audio
    Line,
    /// MVCD
    Mvcd,
    /// VCD
    Vcd,
    /// Telesync
    Ts,
    /// DVD, also the source of directory-style assets
    Dvd,
}

impl VideoSource {
    /// All sources in catalog order.
    pub const ALL: [VideoSource; 17] = [
        VideoSource::HdDvd,
        VideoSource::Hd2Dvd,
        VideoSource::HrHdtv,
        VideoSource::Hdtv,
        VideoSource::Pdtv,
        VideoSource::DvdRip,
        VideoSource::DvdScr,
        VideoSource::DsRip,
        VideoSource::BluRay,
        VideoSource::DTheater,
        VideoSource::Cam,
        VideoSource::R5,
        VideoSource::Line,
        VideoSource::Mvcd,
        VideoSource::Vcd,
        VideoSource::Ts,
        VideoSource::Dvd,
    ];

    /// Canonical label.
    pub fn label(self) -> &'static str {
        match self {
            VideoSource::HdDvd => "HDDVD",
            VideoSource::Hd2Dvd => "HD2DVD",
            VideoSource::HrHdtv => "HRHDTV",
            VideoSource::Hdtv => "HDTV",
            VideoSource::Pdtv => "PDTV",
            VideoSource::DvdRip => "DVDRip",
            VideoSource::DvdScr => "DVDSCR",
            VideoSource::DsRip => "DSRip",
            VideoSource::BluRay => "BluRay",
            VideoSource::DTheater => "D-THEATER",
            VideoSource::Cam => "CAM",
            VideoSource::R5 => "R5",
            VideoSource::Line => "LINE",
            VideoSource::Mvcd => "MVCD",
            VideoSource::Vcd => "VCD",
            VideoSource::Ts => "TS",
            VideoSource::Dvd => "DVD",
        }
    }
}

impl std::fmt::Display for VideoSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for VideoSource {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blu-ray" | "bdrip" => Ok(VideoSource::BluRay),
            "hd-dvd" => Ok(VideoSource::HdDvd),
            other => from_label(&Self::ALL, Self::label, other)
                .ok_or_else(|| ParseError(format!("invalid video source: {}", s))),
        }
    }
}

impl From<VideoSource> for &'static str {
    fn from(value: VideoSource) -> Self {
        value.label()
    }
}

impl TryFrom<String> for VideoSource {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_labels() {
        assert_eq!(Resolution::_720p.to_string(), "720p");
        assert_eq!("1080I".parse::<Resolution>(), Ok(Resolution::_1080i));
        assert_eq!("hd".parse::<Resolution>(), Ok(Resolution::Hd));
    }

    #[test]
    fn source_display_fromstr_roundtrip() {
        for source in VideoSource::ALL {
            assert_eq!(source.to_string().parse::<VideoSource>(), Ok(source));
        }
        assert_eq!("Blu-Ray".parse::<VideoSource>(), Ok(VideoSource::BluRay));
    }

    #[test]
    fn generic_dvd_is_last_in_catalog() {
        assert_eq!(VideoSource::ALL.last(), Some(&VideoSource::Dvd));
    }
}
