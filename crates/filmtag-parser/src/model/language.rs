//! Spoken language tags.

use super::{from_label, ParseError};

/// Language tag detected in a file name.
///
/// Besides real languages this includes the release-scene markers
/// "Dual Language" (`DL`) and "VO" (original version).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "&'static str", try_from = "String"))]
pub enum Language {
    /// Chinese (zh)
    Chinese,
    /// Two audio languages in one release
    DualLanguage,
    /// English (en)
    English,
    /// French (fr)
    French,
    /// German (de)
    German,
    /// Hebrew (he)
    Hebrew,
    /// Hindi (hi)
    Hindi,
    /// Hungarian (hu)
    Hungarian,
    /// Italian (it)
    Italian,
    /// Japanese (ja)
    Japanese,
    /// Polish (pl)
    Polish,
    /// Portuguese (pt)
    Portuguese,
    /// Russian (ru)
    Russian,
    /// Spanish (es)
    Spanish,
    /// Swedish (sv)
    Swedish,
    /// Thai (th)
    Thai,
    /// Original version, optionally with subtitles
    Vo,
}

impl Language {
    /// All languages in catalog order.
    pub const ALL: [Language; 17] = [
        Language::Chinese,
        Language::DualLanguage,
        Language::English,
        Language::French,
        Language::German,
        Language::Hebrew,
        Language::Hindi,
        Language::Hungarian,
        Language::Italian,
        Language::Japanese,
        Language::Polish,
        Language::Portuguese,
        Language::Russian,
        Language::Spanish,
        Language::Swedish,
        Language::Thai,
        Language::Vo,
    ];

    /// Canonical label.
    pub fn label(self) -> &'static str {
        match self {
            Language::Chinese => "Chinese",
            Language::DualLanguage => "Dual Language",
            Language::English => "English",
            Language::French => "French",
            Language::German => "German",
            Language::Hebrew => "Hebrew",
            Language::Hindi => "Hindi",
            Language::Hungarian => "Hungarian",
            Language::Italian => "Italian",
            Language::Japanese => "Japanese",
            Language::Polish => "Polish",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Spanish => "Spanish",
            Language::Swedish => "Swedish",
            Language::Thai => "Thai",
            Language::Vo => "VO",
        }
    }

    /// Literal tokens recognised in strict mode.
    ///
    /// Matching is case-sensitive, so only the spellings listed here count.
    pub fn strict_tokens(self) -> &'static [&'static str] {
        match self {
            Language::Chinese => &[
                "ZH", "Zh", "zh", "CHI", "Chi", "chi", "CHINESE", "Chinese", "chinese",
            ],
            Language::DualLanguage => &["DL", "dl"],
            Language::English => &["ENG", "EN", "ENGLISH", "eng", "en", "english", "Eng"],
            Language::French => &[
                "FRA", "FR", "FRENCH", "VF", "fra", "fr", "french", "vf", "Fra",
            ],
            Language::German => &["GER", "DE", "GERMAN", "ger", "de", "german", "Ger"],
            Language::Hebrew => &[
                "HEB", "HE", "HEBREW", "EBDUB", "heb", "he", "hebrew", "ebdub", "Heb",
            ],
            Language::Hindi => &["HI", "HIN", "HINDI", "hi", "hin", "hindi", "Hin", "Hindi"],
            Language::Hungarian => &["HUN", "HU", "HUNGARIAN", "hun", "hu", "hungarian"],
            Language::Italian => &["ITA", "IT", "ITALIAN", "ita", "it", "italian", "Ita"],
            Language::Japanese => &["JPN", "JP", "JAPANESE", "jpn", "jp", "japanese", "Jpn"],
            Language::Polish => &[
                "POL", "PL", "POLISH", "PLDUB", "pol", "pl", "polish", "pldub", "Pol",
            ],
            Language::Portuguese => &[
                "POR", "PT", "PORTUGUESE", "por", "pt", "portuguese", "Por",
            ],
            Language::Russian => &["RUS", "RU", "RUSSIAN", "rus", "ru", "russian", "Rus"],
            Language::Spanish => &["SPA", "ES", "SPANISH", "spa", "es", "spanish", "Spa"],
            Language::Swedish => &[
                "SV", "Sv", "sv", "SWE", "Swe", "swe", "SWEDISH", "Swedish", "swedish",
            ],
            Language::Thai => &["TH", "Th", "th", "THA", "Tha", "tha", "THAI", "Thai", "thai"],
            Language::Vo => &["VO", "VOSTFR", "vo", "vostfr"],
        }
    }

    /// Literal tokens recognised in loose mode, matched ignoring case.
    pub fn loose_tokens(self) -> &'static [&'static str] {
        match self {
            Language::Chinese => &["ZH", "CHI", "CHINESE"],
            Language::DualLanguage => &["DL"],
            Language::English => &["ENG", "EN", "ENGLISH"],
            Language::French => &["FRA", "FR", "FRENCH"],
            Language::German => &["GER", "DE", "GERMAN"],
            Language::Hebrew => &["HEB", "HE", "HEBREW", "EBDUB"],
            Language::Hindi => &["HI", "HIN", "HINDI"],
            Language::Hungarian => &["HUN", "HU", "HUNGARIAN"],
            Language::Italian => &["ITA", "IT", "ITALIAN"],
            Language::Japanese => &["JPN", "JP", "JAPANESE"],
            Language::Polish => &["POL", "PL", "POLISH", "PLDUB"],
            Language::Portuguese => &["POR", "PT", "PORTUGUESE"],
            Language::Russian => &["RUS", "RU", "RUSSIAN"],
            Language::Spanish => &["SPA", "ES", "SPANISH"],
            Language::Swedish => &["SV", "SWE", "SWEDISH"],
            Language::Thai => &["TH", "THA", "THAI"],
            Language::Vo => &["VO", "VOSTFR"],
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_label(&Self::ALL, Self::label, s.trim())
            .ok_or_else(|| ParseError(format!("invalid language: {}", s)))
    }
}

impl From<Language> for &'static str {
    fn from(value: Language) -> Self {
        value.label()
    }
}

impl TryFrom<String> for Language {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
