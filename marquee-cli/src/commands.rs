//! CLI command implementations

use std::sync::Arc;
use std::time::Duration;

use clap::Subcommand;
use marquee_search::{
    CatalogClient, CatalogProvider, DebounceConfig, DemoProvider, EngineConfig, FilterMode,
    MediaType, Mood, OmdbProvider, RegionLabel, SearchSession, SessionSnapshot,
};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog by title
    Search {
        /// Title text to search for
        query: String,
        /// Media type: movie, series, or episode
        #[arg(short = 't', long, default_value = "movie")]
        media_type: String,
        /// Restrict results to a release year
        #[arg(short, long)]
        year: Option<String>,
        /// Drop results rated below this threshold
        #[arg(long)]
        min_rating: Option<f32>,
    },
    /// Top-rated movies for a genre
    Genre {
        /// Genre name, e.g. Horror or Sci-Fi
        name: String,
        /// Drop results rated below this threshold
        #[arg(long)]
        min_rating: Option<f32>,
    },
    /// Discover films from a cinema region
    Region {
        /// Region name, e.g. Korean or Bollywood
        name: String,
        /// Drop results rated below this threshold
        #[arg(long)]
        min_rating: Option<f32>,
    },
    /// Discover films matching a mood
    Mood {
        /// Mood name, e.g. Scary or Action-Packed
        name: String,
    },
    /// Show full details for one title
    Detail {
        /// Catalog id, e.g. tt0364569
        imdb_id: String,
    },
    /// List the available cinema regions
    Regions,
    /// List the available moods
    Moods,
}

/// Handle the CLI command
///
/// # Errors
/// Returns an error when an argument fails to parse; search failures are
/// rendered, not returned.
pub async fn handle_command(command: Commands, demo: bool) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Search {
            query,
            media_type,
            year,
            min_rating,
        } => {
            let media_type: MediaType = media_type.parse()?;
            let session = build_session(demo);
            session.set_filters(|filters| {
                filters.media_type = media_type;
                filters.year = year;
            });
            session.set_query(query);
            render_results(session.settled().await, min_rating);
            Ok(())
        }
        Commands::Genre { name, min_rating } => {
            let session = build_session(demo);
            session.select_filter_mode(FilterMode::Genre(name));
            render_results(session.settled().await, min_rating);
            Ok(())
        }
        Commands::Region { name, min_rating } => {
            let region: RegionLabel = name.parse()?;
            let display = region.display_info();
            println!("{} {} - {}", display.emoji, region, display.description);
            let session = build_session(demo);
            session.select_filter_mode(FilterMode::Region(region));
            render_results(session.settled().await, min_rating);
            Ok(())
        }
        Commands::Mood { name } => {
            let mood: Mood = name.parse()?;
            println!("{} {} (genres: {})", mood.emoji(), mood, mood.genres().join(", "));
            let session = build_session(demo);
            session.select_filter_mode(FilterMode::Mood(mood));
            render_results(session.settled().await, None);
            Ok(())
        }
        Commands::Detail { imdb_id } => show_detail(&imdb_id, demo).await,
        Commands::Regions => {
            for region in RegionLabel::FILTERABLE {
                let display = region.display_info();
                println!("{} {:<12} {}", display.emoji, region.as_str(), display.description);
            }
            Ok(())
        }
        Commands::Moods => {
            for mood in Mood::ALL {
                println!("{} {:<14} {}", mood.emoji(), mood.as_str(), mood.genres().join(", "));
            }
            Ok(())
        }
    }
}

fn build_catalog(demo: bool) -> CatalogClient {
    let provider: Arc<dyn CatalogProvider> = if demo {
        Arc::new(DemoProvider::new())
    } else {
        Arc::new(OmdbProvider::new())
    };
    CatalogClient::new(provider)
}

fn build_session(demo: bool) -> SearchSession {
    // One-shot invocation: there is no typing to debounce, so the window
    // only needs to outlive the setter calls.
    let config = EngineConfig {
        debounce: DebounceConfig {
            window: Duration::from_millis(50),
        },
        ..EngineConfig::default()
    };
    SearchSession::new(build_catalog(demo), config)
}

/// Renders a settled snapshot, applying the view-side rating threshold.
fn render_results(snapshot: SessionSnapshot, min_rating: Option<f32>) {
    if let Some(failure) = snapshot.error {
        println!("{}", failure.message);
        return;
    }

    let mut movies = snapshot.movies;
    if let Some(threshold) = min_rating {
        movies.retain(|movie| movie.rating_value() >= f64::from(threshold));
    }
    if movies.is_empty() {
        println!("No results above the rating threshold.");
        return;
    }

    println!("{:<4} {:<40} {:<6} {:<7} {}", "#", "Title", "Year", "Rating", "Genre");
    println!("{:-<80}", "");
    for (index, movie) in movies.iter().enumerate() {
        println!(
            "{:<4} {:<40} {:<6} {:<7} {}",
            index + 1,
            truncate(&movie.title, 40),
            movie.year,
            movie.rating.as_deref().unwrap_or("N/A"),
            movie.genre.as_deref().unwrap_or("-"),
        );
    }
}

async fn show_detail(imdb_id: &str, demo: bool) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = build_catalog(demo);
    match catalog.fetch_by_id(imdb_id).await {
        Some(detail) => {
            println!("{} ({})", detail.title, detail.year);
            println!("{:-<60}", "");
            println!("Type:     {}", detail.media_type);
            println!("Rating:   {}", detail.rating.as_deref().unwrap_or("N/A"));
            println!("Genre:    {}", detail.genre.as_deref().unwrap_or("N/A"));
            println!("Country:  {}", detail.country.as_deref().unwrap_or("N/A"));
            println!("Language: {}", detail.language.as_deref().unwrap_or("N/A"));
            if let Some(released) = detail.released {
                println!("Released: {released}");
            }
            if let Some(plot) = detail.plot.clone() {
                println!("\n{plot}");
            }
            let region = marquee_search::EnrichedMovie::from(detail).region();
            let display = region.display_info();
            println!("\nRegion:   {} {}", display.emoji, display.description);
            Ok(())
        }
        None => {
            println!("No catalog entry for {imdb_id}.");
            Ok(())
        }
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{prefix}...")
    }
}
