//! Cinema-of-origin classification for catalog records.
//!
//! The catalog exposes no region or country filter, so origin is derived
//! heuristically from the free-text country, language, and title fields a
//! record carries. Classification is best-effort matching, not
//! authoritative metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::EnrichedMovie;

/// Cinema-of-origin taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionLabel {
    Bollywood,
    Hollywood,
    British,
    Korean,
    Japanese,
    French,
    German,
    Spanish,
    Italian,
    Chinese,
    Australian,
    Canadian,
    Brazilian,
    Russian,
    International,
    Unknown,
}

/// Display descriptor for a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionDisplay {
    /// Flag or globe glyph.
    pub emoji: &'static str,
    /// Human description, e.g. "Korean Cinema".
    pub description: &'static str,
}

impl RegionLabel {
    /// Labels offered as discovery filters, in presentation order.
    pub const FILTERABLE: [RegionLabel; 10] = [
        RegionLabel::Bollywood,
        RegionLabel::Hollywood,
        RegionLabel::British,
        RegionLabel::Korean,
        RegionLabel::Japanese,
        RegionLabel::French,
        RegionLabel::German,
        RegionLabel::Spanish,
        RegionLabel::Italian,
        RegionLabel::Chinese,
    ];

    /// Display name.
    pub fn as_str(self) -> &'static str {
        match self {
            RegionLabel::Bollywood => "Bollywood",
            RegionLabel::Hollywood => "Hollywood",
            RegionLabel::British => "British",
            RegionLabel::Korean => "Korean",
            RegionLabel::Japanese => "Japanese",
            RegionLabel::French => "French",
            RegionLabel::German => "German",
            RegionLabel::Spanish => "Spanish",
            RegionLabel::Italian => "Italian",
            RegionLabel::Chinese => "Chinese",
            RegionLabel::Australian => "Australian",
            RegionLabel::Canadian => "Canadian",
            RegionLabel::Brazilian => "Brazilian",
            RegionLabel::Russian => "Russian",
            RegionLabel::International => "International",
            RegionLabel::Unknown => "Unknown",
        }
    }

    /// Emoji and description for this label.
    ///
    /// Labels outside the curated filter set fall back to a globe glyph
    /// with the raw label name.
    pub fn display_info(self) -> RegionDisplay {
        let (emoji, description) = match self {
            RegionLabel::Bollywood => ("\u{1F1EE}\u{1F1F3}", "Indian Cinema"),
            RegionLabel::Hollywood => ("\u{1F1FA}\u{1F1F8}", "American Cinema"),
            RegionLabel::British => ("\u{1F1EC}\u{1F1E7}", "British Cinema"),
            RegionLabel::Korean => ("\u{1F1F0}\u{1F1F7}", "Korean Cinema"),
            RegionLabel::Japanese => ("\u{1F1EF}\u{1F1F5}", "Japanese Cinema"),
            RegionLabel::French => ("\u{1F1EB}\u{1F1F7}", "French Cinema"),
            RegionLabel::German => ("\u{1F1E9}\u{1F1EA}", "German Cinema"),
            RegionLabel::Spanish => ("\u{1F1EA}\u{1F1F8}", "Spanish Cinema"),
            RegionLabel::Italian => ("\u{1F1EE}\u{1F1F9}", "Italian Cinema"),
            RegionLabel::Chinese => ("\u{1F1E8}\u{1F1F3}", "Chinese Cinema"),
            other => ("\u{1F30D}", other.as_str()),
        };
        RegionDisplay { emoji, description }
    }

    /// Proxy search terms used to recall candidates for this region.
    ///
    /// The catalog only searches titles, so discovery issues searches for
    /// country, city, and demonym terms that frequently appear in titles
    /// from the region. Regions without a curated list fall back to the
    /// label name itself.
    pub fn proxy_terms(self) -> Vec<&'static str> {
        match self {
            RegionLabel::Bollywood => vec!["India", "Hindi", "Bollywood", "Mumbai", "Delhi"],
            RegionLabel::Hollywood => {
                vec!["America", "USA", "Hollywood", "California", "New York"]
            }
            RegionLabel::British => {
                vec!["Britain", "England", "London", "Manchester", "Liverpool"]
            }
            RegionLabel::Korean => vec!["Korea", "Seoul", "Korean", "South Korea", "Busan"],
            RegionLabel::Japanese => vec!["Japan", "Tokyo", "Japanese", "Osaka", "Kyoto"],
            RegionLabel::French => vec!["France", "Paris", "French", "Lyon", "Marseille"],
            RegionLabel::German => vec!["Germany", "Berlin", "German", "Munich", "Hamburg"],
            RegionLabel::Spanish => vec!["Spain", "Madrid", "Spanish", "Barcelona", "Mexico"],
            RegionLabel::Italian => vec!["Italy", "Rome", "Italian", "Milan", "Naples"],
            RegionLabel::Chinese => vec!["China", "Beijing", "Chinese", "Hong Kong", "Taiwan"],
            other => vec![other.as_str()],
        }
    }
}

impl fmt::Display for RegionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RegionLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [RegionLabel; 16] = [
            RegionLabel::Bollywood,
            RegionLabel::Hollywood,
            RegionLabel::British,
            RegionLabel::Korean,
            RegionLabel::Japanese,
            RegionLabel::French,
            RegionLabel::German,
            RegionLabel::Spanish,
            RegionLabel::Italian,
            RegionLabel::Chinese,
            RegionLabel::Australian,
            RegionLabel::Canadian,
            RegionLabel::Brazilian,
            RegionLabel::Russian,
            RegionLabel::International,
            RegionLabel::Unknown,
        ];
        ALL.into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("invalid region: {s}"))
    }
}

const INDIAN_LANGUAGES: [&str; 6] = [
    "hindi",
    "tamil",
    "telugu",
    "malayalam",
    "kannada",
    "bengali",
];

/// Derives the region of origin for a movie record.
///
/// Total and deterministic: an absent record yields `Unknown`, a record
/// with no classifiable fields yields `International`. Rules are evaluated
/// in fixed priority order and the first match wins; all matching is
/// case-insensitive substring containment.
pub fn classify(movie: Option<&EnrichedMovie>) -> RegionLabel {
    let Some(movie) = movie else {
        return RegionLabel::Unknown;
    };

    let country = movie.country.as_deref().unwrap_or("").to_lowercase();
    let language = movie.language.as_deref().unwrap_or("").to_lowercase();
    let title = movie.title.to_lowercase();

    if country.contains("india")
        || INDIAN_LANGUAGES.iter().any(|l| language.contains(l))
        || title.contains("bollywood")
    {
        return RegionLabel::Bollywood;
    }

    // English-language films from the UK must not land in Hollywood.
    if country.contains("usa")
        || country.contains("united states")
        || (language.contains("english")
            && !country.contains("uk")
            && !country.contains("britain"))
    {
        return RegionLabel::Hollywood;
    }

    if country.contains("uk") || country.contains("britain") || country.contains("england") {
        return RegionLabel::British;
    }

    if country.contains("korea") || language.contains("korean") {
        return RegionLabel::Korean;
    }

    if country.contains("japan") || language.contains("japanese") {
        return RegionLabel::Japanese;
    }

    if country.contains("france") || language.contains("french") {
        return RegionLabel::French;
    }

    if country.contains("germany") || language.contains("german") {
        return RegionLabel::German;
    }

    if country.contains("spain") || country.contains("mexico") || language.contains("spanish") {
        return RegionLabel::Spanish;
    }

    if country.contains("italy") || language.contains("italian") {
        return RegionLabel::Italian;
    }

    if country.contains("china")
        || country.contains("hong kong")
        || country.contains("taiwan")
        || language.contains("chinese")
        || language.contains("mandarin")
        || language.contains("cantonese")
    {
        return RegionLabel::Chinese;
    }

    if country.contains("australia") {
        return RegionLabel::Australian;
    }

    if country.contains("canada") {
        return RegionLabel::Canadian;
    }

    if country.contains("brazil") || language.contains("portuguese") {
        return RegionLabel::Brazilian;
    }

    if country.contains("russia") || country.contains("soviet") || language.contains("russian") {
        return RegionLabel::Russian;
    }

    RegionLabel::International
}
