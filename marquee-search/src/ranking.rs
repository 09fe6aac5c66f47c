//! Merge, ranking, and term-sampling utilities for aggregated results.

use std::collections::HashSet;

use rand::seq::SliceRandom;

use crate::types::{EnrichedMovie, MovieDetail, MovieSummary};

/// Genres with a curated proxy-term pool.
pub const GENRES: [&str; 22] = [
    "Action",
    "Adventure",
    "Animation",
    "Biography",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "Film-Noir",
    "History",
    "Horror",
    "Music",
    "Musical",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Sport",
    "Thriller",
    "War",
    "Western",
];

/// Curated high-recall search terms per genre.
///
/// The catalog searches titles only, so genre discovery issues searches for
/// well-known titles of the genre instead of the genre word itself.
pub fn popular_terms(genre: &str) -> Option<&'static [&'static str]> {
    let terms: &'static [&'static str] = match genre {
        "Action" => &[
            "The Dark Knight",
            "Inception",
            "Mad Max",
            "John Wick",
            "Mission Impossible",
            "Avengers",
            "Fast and Furious",
            "Terminator",
            "Die Hard",
            "Matrix",
        ],
        "Adventure" => &[
            "Indiana Jones",
            "Pirates of the Caribbean",
            "Jurassic Park",
            "The Lord of the Rings",
            "Avatar",
            "Star Wars",
            "Back to the Future",
            "National Treasure",
            "Jumanji",
            "The Mummy",
        ],
        "Animation" => &[
            "Toy Story",
            "Finding Nemo",
            "The Lion King",
            "Spirited Away",
            "Up",
            "WALL-E",
            "Inside Out",
            "Coco",
            "Moana",
            "Frozen",
        ],
        "Biography" => &[
            "Schindler's List",
            "Forrest Gump",
            "The Pursuit of Happyness",
            "The Social Network",
            "Catch Me If You Can",
            "A Beautiful Mind",
            "The King's Speech",
            "Lincoln",
            "The Theory of Everything",
            "Hidden Figures",
        ],
        "Comedy" => &[
            "The Hangover",
            "Superbad",
            "Anchorman",
            "Step Brothers",
            "Tropic Thunder",
            "Dumb and Dumber",
            "Meet the Parents",
            "Rush Hour",
            "Austin Powers",
            "Borat",
        ],
        "Crime" => &[
            "The Godfather",
            "Goodfellas",
            "Pulp Fiction",
            "Casino",
            "Scarface",
            "Heat",
            "The Departed",
            "L.A. Confidential",
            "Chinatown",
            "The Usual Suspects",
        ],
        "Documentary" => &[
            "Bowling for Columbine",
            "Fahrenheit 9/11",
            "March of the Penguins",
            "An Inconvenient Truth",
            "Super Size Me",
            "The Cove",
            "Blackfish",
            "Amy",
            "OJ: Made in America",
            "13th",
        ],
        "Drama" => &[
            "The Shawshank Redemption",
            "Forrest Gump",
            "The Godfather",
            "Pulp Fiction",
            "Schindler's List",
            "Goodfellas",
            "Casablanca",
            "Citizen Kane",
            "The Wizard of Oz",
            "Gone with the Wind",
        ],
        "Family" => &[
            "The Lion King",
            "Finding Nemo",
            "Toy Story",
            "Up",
            "Moana",
            "Frozen",
            "Inside Out",
            "Coco",
            "The Incredibles",
            "Ratatouille",
        ],
        "Fantasy" => &[
            "The Lord of the Rings",
            "Harry Potter",
            "The Chronicles of Narnia",
            "Pan's Labyrinth",
            "Big Fish",
            "The Princess Bride",
            "Edward Scissorhands",
            "Beetlejuice",
            "The Nightmare Before Christmas",
            "Labyrinth",
        ],
        "Film-Noir" => &[
            "Double Indemnity",
            "The Maltese Falcon",
            "Casablanca",
            "Sunset Boulevard",
            "The Third Man",
            "Touch of Evil",
            "The Big Sleep",
            "Mildred Pierce",
            "Out of the Past",
            "Gilda",
        ],
        "History" => &[
            "Schindler's List",
            "Saving Private Ryan",
            "Braveheart",
            "Gladiator",
            "The Patriot",
            "Lincoln",
            "Dunkirk",
            "Apollo 13",
            "The Last Samurai",
            "Master and Commander",
        ],
        "Horror" => &[
            "The Conjuring",
            "Get Out",
            "Hereditary",
            "A Quiet Place",
            "The Babadook",
            "It",
            "The Shining",
            "Halloween",
            "Scream",
            "A Nightmare on Elm Street",
        ],
        "Music" => &[
            "Bohemian Rhapsody",
            "A Star Is Born",
            "La La Land",
            "Mamma Mia",
            "The Greatest Showman",
            "Rocketman",
            "Whiplash",
            "Begin Again",
            "Sing Street",
            "Pitch Perfect",
        ],
        "Musical" => &[
            "The Sound of Music",
            "West Side Story",
            "Grease",
            "Mamma Mia",
            "La La Land",
            "The Greatest Showman",
            "Chicago",
            "Moulin Rouge",
            "Hairspray",
            "Les Mis\u{e9}rables",
        ],
        "Mystery" => &[
            "The Sixth Sense",
            "The Usual Suspects",
            "Gone Girl",
            "Shutter Island",
            "Prisoners",
            "Zodiac",
            "Memento",
            "The Prestige",
            "Se7en",
            "Vertigo",
        ],
        "Romance" => &[
            "The Notebook",
            "Titanic",
            "Casablanca",
            "When Harry Met Sally",
            "Pretty Woman",
            "Sleepless in Seattle",
            "You've Got Mail",
            "The Princess Bride",
            "Ghost",
            "Dirty Dancing",
        ],
        "Sci-Fi" => &[
            "Star Wars",
            "Blade Runner",
            "Alien",
            "The Matrix",
            "Interstellar",
            "Avatar",
            "Terminator",
            "Back to the Future",
            "E.T.",
            "Close Encounters",
        ],
        "Sport" => &[
            "Rocky",
            "Remember the Titans",
            "Rudy",
            "The Blind Side",
            "Moneyball",
            "Field of Dreams",
            "Chariots of Fire",
            "Seabiscuit",
            "Miracle",
            "Invictus",
        ],
        "Thriller" => &[
            "Se7en",
            "Silence of the Lambs",
            "Psycho",
            "The Usual Suspects",
            "Memento",
            "Zodiac",
            "Gone Girl",
            "No Country for Old Men",
            "The Sixth Sense",
            "Vertigo",
        ],
        "War" => &[
            "Saving Private Ryan",
            "Apocalypse Now",
            "Full Metal Jacket",
            "The Hurt Locker",
            "Dunkirk",
            "1917",
            "Platoon",
            "Black Hawk Down",
            "We Were Soldiers",
            "Letters from Iwo Jima",
        ],
        "Western" => &[
            "The Good, the Bad and the Ugly",
            "Once Upon a Time in the West",
            "Unforgiven",
            "True Grit",
            "Django Unchained",
            "The Magnificent Seven",
            "High Noon",
            "Shane",
            "Butch Cassidy and the Sundance Kid",
            "The Searchers",
        ],
        _ => return None,
    };
    Some(terms)
}

/// Draws `count` distinct terms for a genre from the curated pool.
///
/// Sampling is without replacement via shuffle. A genre without a pool
/// entry degenerates to the genre name itself.
pub fn sample_terms(genre: &str, count: usize) -> Vec<String> {
    let Some(pool) = popular_terms(genre) else {
        return vec![genre.to_string()];
    };

    let mut terms: Vec<&str> = pool.to_vec();
    terms.shuffle(&mut rand::rng());
    terms.truncate(count);
    terms.into_iter().map(str::to_string).collect()
}

/// Keeps the first occurrence per identity key, preserving input order.
pub fn dedupe_by_id(movies: Vec<MovieSummary>) -> Vec<MovieSummary> {
    let mut seen = HashSet::new();
    movies
        .into_iter()
        .filter(|movie| seen.insert(movie.imdb_id.clone()))
        .collect()
}

/// Sorts descending by parsed rating.
///
/// Missing or unparsable ratings count as 0 and sort last. The sort is
/// stable, so equal ratings keep their input order.
pub fn rank_by_rating(mut movies: Vec<EnrichedMovie>) -> Vec<EnrichedMovie> {
    movies.sort_by(|a, b| b.rating_value().total_cmp(&a.rating_value()));
    movies
}

/// First `n` elements, fewer when the input is shorter.
pub fn top_n<T>(mut items: Vec<T>, n: usize) -> Vec<T> {
    items.truncate(n);
    items
}

/// Copies the detail-only fields onto a search hit.
///
/// Country and language prefer the detail record, which is fuller than the
/// search response for both.
pub fn merge_summary_detail(summary: MovieSummary, detail: &MovieDetail) -> EnrichedMovie {
    EnrichedMovie {
        imdb_id: summary.imdb_id,
        title: summary.title,
        year: summary.year,
        media_type: summary.media_type,
        poster_url: summary.poster_url,
        country: detail.country.clone().or(summary.country),
        language: detail.language.clone().or(summary.language),
        rating: detail.rating.clone(),
        genre: detail.genre.clone(),
        plot: detail.plot.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MediaType;

    fn summary(id: &str, title: &str) -> MovieSummary {
        MovieSummary {
            imdb_id: id.to_string(),
            title: title.to_string(),
            year: "2020".to_string(),
            media_type: MediaType::Movie,
            poster_url: None,
            country: None,
            language: None,
        }
    }

    fn rated(id: &str, rating: Option<&str>) -> EnrichedMovie {
        let mut movie = EnrichedMovie::from(summary(id, id));
        movie.rating = rating.map(str::to_string);
        movie
    }

    #[test]
    fn dedupe_keeps_first_occurrence_in_order() {
        let movies = vec![
            summary("tt1", "First"),
            summary("tt2", "Second"),
            summary("tt1", "First again"),
            summary("tt3", "Third"),
        ];
        let deduped = dedupe_by_id(movies);
        let ids: Vec<&str> = deduped.iter().map(|m| m.imdb_id.as_str()).collect();
        assert_eq!(ids, ["tt1", "tt2", "tt3"]);
        assert_eq!(deduped[0].title, "First");
    }

    #[test]
    fn dedupe_is_idempotent() {
        let movies = vec![summary("tt1", "A"), summary("tt2", "B"), summary("tt1", "A")];
        let once = dedupe_by_id(movies);
        let twice = dedupe_by_id(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn ranking_sorts_descending_with_missing_last() {
        let movies = vec![
            rated("a", Some("7.1")),
            rated("b", None),
            rated("c", Some("9.0")),
            rated("d", Some("8.5")),
        ];
        let ranked = rank_by_rating(movies);
        let ids: Vec<&str> = ranked.iter().map(|m| m.imdb_id.as_str()).collect();
        assert_eq!(ids, ["c", "d", "a", "b"]);
    }

    #[test]
    fn ranking_is_stable_on_ties() {
        let movies = vec![
            rated("a", Some("8.0")),
            rated("b", Some("8.0")),
            rated("c", None),
            rated("d", Some("not numeric")),
        ];
        let ranked = rank_by_rating(movies);
        let ids: Vec<&str> = ranked.iter().map(|m| m.imdb_id.as_str()).collect();
        // Unparsable counts as 0, tied with missing; both keep input order.
        assert_eq!(ids, ["a", "b", "c", "d"]);
    }

    #[test]
    fn top_n_truncates_naturally() {
        let items: Vec<u32> = (0..15).collect();
        assert_eq!(top_n(items, 10), (0..10).collect::<Vec<u32>>());

        let short: Vec<u32> = (0..3).collect();
        assert_eq!(top_n(short, 10).len(), 3);
    }

    #[test]
    fn sample_terms_draws_distinct_pool_entries() {
        let pool = popular_terms("Horror").unwrap();
        for _ in 0..20 {
            let terms = sample_terms("Horror", 3);
            assert_eq!(terms.len(), 3);
            let unique: HashSet<&String> = terms.iter().collect();
            assert_eq!(unique.len(), 3);
            for term in &terms {
                assert!(pool.contains(&term.as_str()));
            }
        }
    }

    #[test]
    fn sample_terms_falls_back_to_genre_name() {
        assert_eq!(sample_terms("Telenovela", 3), vec!["Telenovela"]);
    }

    #[test]
    fn every_listed_genre_has_a_pool() {
        for genre in GENRES {
            assert!(popular_terms(genre).is_some(), "missing pool for {genre}");
        }
    }

    #[test]
    fn merge_prefers_detail_fields() {
        let mut base = summary("tt1", "Oldboy");
        base.country = Some("Korea".to_string());
        let detail = MovieDetail {
            imdb_id: "tt1".to_string(),
            title: "Oldboy".to_string(),
            year: "2003".to_string(),
            media_type: MediaType::Movie,
            poster_url: None,
            country: Some("South Korea".to_string()),
            language: Some("Korean".to_string()),
            rating: Some("8.4".to_string()),
            genre: Some("Action, Drama, Mystery".to_string()),
            plot: Some("A man seeks his captor.".to_string()),
            released: None,
        };
        let merged = merge_summary_detail(base, &detail);
        assert_eq!(merged.country.as_deref(), Some("South Korea"));
        assert_eq!(merged.rating.as_deref(), Some("8.4"));
        assert_eq!(merged.genre.as_deref(), Some("Action, Drama, Mystery"));
    }
}
