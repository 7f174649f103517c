//! Frame rate enum.

use super::{from_label, ParseError};

/// Video frame rate, as tagged in file names (`24p`, `p25`, ...).
///
/// Names only carry the integer part of the rate, so the label is the
/// integer token form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "&'static str", try_from = "String"))]
pub enum FrameRate {
    /// 23.976 fps (NTSC film)
    _23_976,
    /// 24 fps (film)
    _24,
    /// 25 fps (PAL)
    _25,
    /// 29.97 fps (NTSC video)
    _29_97,
    /// 30 fps
    _30,
    /// 50 fps (PAL high frame rate)
    _50,
    /// 59.94 fps (NTSC high frame rate)
    _59_94,
    /// 60 fps
    _60,
}

impl FrameRate {
    /// All frame rates in catalog order.
    pub const ALL: [FrameRate; 8] = [
        FrameRate::_23_976,
        FrameRate::_24,
        FrameRate::_25,
        FrameRate::_29_97,
        FrameRate::_30,
        FrameRate::_50,
        FrameRate::_59_94,
        FrameRate::_60,
    ];

    /// Canonical label, the integer part of the rate.
    pub fn label(self) -> &'static str {
        match self {
            FrameRate::_23_976 => "23",
            FrameRate::_24 => "24",
            FrameRate::_25 => "25",
            FrameRate::_29_97 => "29",
            FrameRate::_30 => "30",
            FrameRate::_50 => "50",
            FrameRate::_59_94 => "59",
            FrameRate::_60 => "60",
        }
    }
}

impl std::fmt::Display for FrameRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for FrameRate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_suffix("fps")
            .or_else(|| s.strip_suffix('p'))
            .unwrap_or(s);
        from_label(&Self::ALL, Self::label, s)
            .ok_or_else(|| ParseError(format!("invalid frame rate: {}", s)))
    }
}

impl From<FrameRate> for &'static str {
    fn from(value: FrameRate) -> Self {
        value.label()
    }
}

impl TryFrom<String> for FrameRate {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
