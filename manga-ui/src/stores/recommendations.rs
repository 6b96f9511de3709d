//! Recommendations state store
//!
//! A fetch cycle is `begin_fetch` → request → `finish_fetch`. The store never
//! performs I/O itself; the owning page runs the request between the two
//! calls.

use crate::display_types::{Genre, Manga};
use dioxus::prelude::*;
use std::fmt::Display;
use tracing::{debug, error, warn};

/// Shown for every failed fetch, whatever the cause
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch recommendations. Please try again.";

/// State for the recommendations view
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct RecommendationsState {
    /// Genre chosen in the selector
    pub selected_genre: Option<Genre>,
    /// Results of the last successful fetch, in service order
    pub recommendations: Vec<Manga>,
    /// Whether a fetch is in flight
    pub is_loading: bool,
    /// Error message if the last fetch failed
    pub error: Option<String>,
}

impl RecommendationsState {
    pub fn select_genre(&mut self, genre: Genre) {
        self.selected_genre = Some(genre);
    }

    /// Whether the fetch trigger is enabled
    pub fn can_fetch(&self) -> bool {
        self.selected_genre.is_some() && !self.is_loading
    }

    /// Label for the fetch trigger
    pub fn button_label(&self) -> &'static str {
        if self.is_loading {
            "Loading..."
        } else {
            "Get Recommendations"
        }
    }

    /// Start a fetch cycle, returning the genre to request.
    ///
    /// Returns `None` and leaves the state untouched when no genre is
    /// selected or a fetch is already in flight.
    pub fn begin_fetch(&mut self) -> Option<Genre> {
        let genre = match self.selected_genre {
            Some(genre) if !self.is_loading => genre,
            Some(genre) => {
                warn!(%genre, "Fetch already in flight, ignoring trigger");
                return None;
            }
            None => {
                warn!("No genre selected, ignoring trigger");
                return None;
            }
        };

        self.is_loading = true;
        self.error = None;
        debug!(%genre, "Fetching recommendations");
        Some(genre)
    }

    /// Finish a fetch cycle.
    ///
    /// Success replaces the list wholesale. Failure keeps whatever list was
    /// already shown and sets [`FETCH_ERROR_MESSAGE`]. Loading clears either
    /// way.
    pub fn finish_fetch<E: Display>(&mut self, result: Result<Vec<Manga>, E>) {
        match result {
            Ok(recommendations) => {
                debug!(count = recommendations.len(), "Fetched recommendations");
                self.recommendations = recommendations;
            }
            Err(e) => {
                error!(error = %e, "Error fetching recommendations");
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        self.is_loading = false;
    }
}
