//! Data types for catalog search and filtering.

use serde::{Deserialize, Serialize};

use crate::region::RegionLabel;

/// Partial movie record produced by a catalog title search.
///
/// Search responses carry no rating, genre, or plot; those fields arrive
/// with the per-title detail lookup during enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Catalog-unique identity key.
    pub imdb_id: String,
    /// Display title.
    pub title: String,
    /// Release year as free text; series use ranges like `"2019-2021"`.
    pub year: String,
    /// Media type classification.
    pub media_type: MediaType,
    /// Poster image URL, absent when the catalog has none.
    pub poster_url: Option<String>,
    /// Comma-joined country names, when the catalog includes them.
    pub country: Option<String>,
    /// Comma-joined language names, when the catalog includes them.
    pub language: Option<String>,
}

/// Full movie record produced by a catalog id lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    /// Catalog-unique identity key.
    pub imdb_id: String,
    /// Display title.
    pub title: String,
    /// Release year as free text.
    pub year: String,
    /// Media type classification.
    pub media_type: MediaType,
    /// Poster image URL.
    pub poster_url: Option<String>,
    /// Comma-joined country names.
    pub country: Option<String>,
    /// Comma-joined language names.
    pub language: Option<String>,
    /// Rating as numeric text, `None` when the catalog reports none.
    pub rating: Option<String>,
    /// Comma-joined genre names.
    pub genre: Option<String>,
    /// Plot summary.
    pub plot: Option<String>,
    /// Release date, when the catalog's textual date parses.
    pub released: Option<chrono::NaiveDate>,
}

/// Search hit merged with the detail fields fetched for the same id.
///
/// This is the unit the pipeline ranks and publishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedMovie {
    /// Catalog-unique identity key.
    pub imdb_id: String,
    /// Display title.
    pub title: String,
    /// Release year as free text.
    pub year: String,
    /// Media type classification.
    pub media_type: MediaType,
    /// Poster image URL.
    pub poster_url: Option<String>,
    /// Comma-joined country names.
    pub country: Option<String>,
    /// Comma-joined language names.
    pub language: Option<String>,
    /// Rating as numeric text, `None` when unrated.
    pub rating: Option<String>,
    /// Comma-joined genre names.
    pub genre: Option<String>,
    /// Plot summary.
    pub plot: Option<String>,
}

impl EnrichedMovie {
    /// Rating parsed as a number; 0.0 when missing or unparsable.
    pub fn rating_value(&self) -> f64 {
        self.rating
            .as_deref()
            .and_then(|r| r.parse().ok())
            .unwrap_or(0.0)
    }

    /// Region of origin derived from country, language, and title.
    pub fn region(&self) -> RegionLabel {
        crate::region::classify(Some(self))
    }
}

impl From<MovieSummary> for EnrichedMovie {
    /// Promotes a bare search hit; detail-only fields stay empty.
    fn from(summary: MovieSummary) -> Self {
        Self {
            imdb_id: summary.imdb_id,
            title: summary.title,
            year: summary.year,
            media_type: summary.media_type,
            poster_url: summary.poster_url,
            country: summary.country,
            language: summary.language,
            rating: None,
            genre: None,
            plot: None,
        }
    }
}

impl From<MovieDetail> for EnrichedMovie {
    fn from(detail: MovieDetail) -> Self {
        Self {
            imdb_id: detail.imdb_id,
            title: detail.title,
            year: detail.year,
            media_type: detail.media_type,
            poster_url: detail.poster_url,
            country: detail.country,
            language: detail.language,
            rating: detail.rating,
            genre: detail.genre,
            plot: detail.plot,
        }
    }
}

/// Media type classification used by the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Movie,
    Series,
    Episode,
}

impl MediaType {
    /// Wire name used by the catalog's request discriminator.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Series => "series",
            MediaType::Episode => "episode",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" => Ok(MediaType::Movie),
            "series" => Ok(MediaType::Series),
            "episode" => Ok(MediaType::Episode),
            _ => Err(format!("invalid media type: {s}")),
        }
    }
}

/// Active filter set driving strategy selection.
///
/// Mutated only through the session controller's setters; genre, mood, and
/// region exclusivity is enforced there, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Genre filter, free text.
    pub genre: Option<String>,
    /// Release year filter, free text.
    pub year: Option<String>,
    /// Media type filter; defaults to movies.
    pub media_type: MediaType,
    /// Minimum-rating threshold applied by the view layer, not the engine.
    pub min_rating: Option<f32>,
    /// Active mood, when mood-driven discovery is selected.
    pub mood: Option<Mood>,
    /// Target region; `None` selects all regions.
    pub region: Option<RegionLabel>,
}

/// Viewer mood, each mapping to an ordered list of candidate genres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Funny,
    Romantic,
    ActionPacked,
    Scary,
    Dramatic,
    SciFi,
    Musical,
    Mystery,
    Inspiring,
    Artistic,
}

impl Mood {
    /// Every mood, in presentation order.
    pub const ALL: [Mood; 10] = [
        Mood::Funny,
        Mood::Romantic,
        Mood::ActionPacked,
        Mood::Scary,
        Mood::Dramatic,
        Mood::SciFi,
        Mood::Musical,
        Mood::Mystery,
        Mood::Inspiring,
        Mood::Artistic,
    ];

    /// Candidate genres for this mood, best fit first.
    pub fn genres(self) -> &'static [&'static str] {
        match self {
            Mood::Funny => &["Comedy", "Comedy-Drama"],
            Mood::Romantic => &["Romance", "Romantic Comedy"],
            Mood::ActionPacked => &["Action", "Adventure", "Thriller"],
            Mood::Scary => &["Horror", "Thriller"],
            Mood::Dramatic => &["Drama", "Biography"],
            Mood::SciFi => &["Sci-Fi", "Fantasy"],
            Mood::Musical => &["Music", "Musical"],
            Mood::Mystery => &["Mystery", "Crime"],
            Mood::Inspiring => &["Biography", "Drama", "Sport"],
            Mood::Artistic => &["Drama", "Biography", "Film-Noir"],
        }
    }

    /// The genre that seeds the filter state when this mood is selected.
    pub fn primary_genre(self) -> &'static str {
        self.genres()[0]
    }

    /// Display glyph.
    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Funny => "\u{1F604}",
            Mood::Romantic => "\u{1F495}",
            Mood::ActionPacked => "\u{1F4A5}",
            Mood::Scary => "\u{1F47B}",
            Mood::Dramatic => "\u{1F3AD}",
            Mood::SciFi => "\u{1F680}",
            Mood::Musical => "\u{1F3B5}",
            Mood::Mystery => "\u{1F575}\u{FE0F}",
            Mood::Inspiring => "\u{1F3C6}",
            Mood::Artistic => "\u{1F3A8}",
        }
    }

    /// Display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Funny => "Funny",
            Mood::Romantic => "Romantic",
            Mood::ActionPacked => "Action-Packed",
            Mood::Scary => "Scary",
            Mood::Dramatic => "Dramatic",
            Mood::SciFi => "Sci-Fi",
            Mood::Musical => "Musical",
            Mood::Mystery => "Mystery",
            Mood::Inspiring => "Inspiring",
            Mood::Artistic => "Artistic",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("invalid mood: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_round_trips_through_str() {
        for media_type in [MediaType::Movie, MediaType::Series, MediaType::Episode] {
            assert_eq!(media_type.as_str().parse::<MediaType>(), Ok(media_type));
        }
        assert!("album".parse::<MediaType>().is_err());
    }

    #[test]
    fn rating_value_treats_missing_as_zero() {
        let mut movie = EnrichedMovie::from(MovieSummary {
            imdb_id: "tt0000001".to_string(),
            title: "Example".to_string(),
            year: "2020".to_string(),
            media_type: MediaType::Movie,
            poster_url: None,
            country: None,
            language: None,
        });
        assert_eq!(movie.rating_value(), 0.0);

        movie.rating = Some("8.4".to_string());
        assert_eq!(movie.rating_value(), 8.4);

        movie.rating = Some("not a number".to_string());
        assert_eq!(movie.rating_value(), 0.0);
    }

    #[test]
    fn mood_seeds_its_first_genre() {
        assert_eq!(Mood::Scary.primary_genre(), "Horror");
        assert_eq!(Mood::Inspiring.primary_genre(), "Biography");
    }

    #[test]
    fn mood_parses_case_insensitively() {
        assert_eq!("action-packed".parse::<Mood>(), Ok(Mood::ActionPacked));
        assert_eq!("SCARY".parse::<Mood>(), Ok(Mood::Scary));
        assert!("bored".parse::<Mood>().is_err());
    }
}
