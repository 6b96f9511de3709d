//! Demo data for the fixture app
//!
//! Recommendations are served from an embedded fixture instead of the
//! recommendation service.

use manga_ui::{Genre, Manga};
use serde::Deserialize;
use std::sync::OnceLock;
use tracing::error;

/// Embedded fixture data (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/manga.json");

/// Same page size the web app asks the service for
pub const DEMO_TOP_N: usize = 6;

#[derive(Debug, Deserialize)]
struct FixtureManga {
    name: String,
    genre: String,
    rating: f64,
}

static FIXTURES: OnceLock<Vec<Manga>> = OnceLock::new();

fn fixtures() -> &'static [Manga] {
    FIXTURES.get_or_init(|| {
        match serde_json::from_str::<Vec<FixtureManga>>(FIXTURE_JSON) {
            Ok(records) => records
                .into_iter()
                .map(|r| Manga {
                    name: r.name,
                    genre: r.genre,
                    rating: r.rating,
                })
                .collect(),
            Err(e) => {
                error!(error = %e, "Failed to parse manga fixture");
                Vec::new()
            }
        }
    })
}

fn tagged(manga: &Manga, genre: Genre) -> bool {
    manga.genre.split(", ").any(|g| g == genre.label())
}

/// Fixture recommendations for a genre, highest rated first.
///
/// Genres with no fixtures fail, which drives the error path of the view.
pub fn recommendations_for(genre: Genre) -> Result<Vec<Manga>, String> {
    let mut matches: Vec<Manga> = fixtures()
        .iter()
        .filter(|m| tagged(m, genre))
        .cloned()
        .collect();

    if matches.is_empty() {
        return Err(format!("no fixtures tagged {genre}"));
    }

    matches.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    matches.truncate(DEMO_TOP_N);
    Ok(matches)
}
