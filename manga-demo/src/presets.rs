//! Named view states for quick switching

use crate::demo_data;
use manga_ui::stores::RecommendationsState;
use manga_ui::Genre;

/// A canned state of the recommendations view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Empty,
    GenreSelected,
    Loading,
    Loaded,
    Error,
    /// Results from an earlier fetch still shown under a failure
    StaleError,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::Empty,
        Preset::GenreSelected,
        Preset::Loading,
        Preset::Loaded,
        Preset::Error,
        Preset::StaleError,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Preset::Empty => "Empty",
            Preset::GenreSelected => "Genre Selected",
            Preset::Loading => "Loading",
            Preset::Loaded => "Loaded",
            Preset::Error => "Error",
            Preset::StaleError => "Stale + Error",
        }
    }

    /// Build the state by driving the same transitions the web app uses
    pub fn state(self) -> RecommendationsState {
        let mut state = RecommendationsState::default();
        if self == Preset::Empty {
            return state;
        }

        let genre = match self {
            Preset::Error => Genre::Horror,
            _ => Genre::Adventure,
        };
        state.select_genre(genre);

        match self {
            Preset::Empty | Preset::GenreSelected => {}
            Preset::Loading => {
                state.begin_fetch();
            }
            Preset::Loaded | Preset::Error => {
                state.begin_fetch();
                state.finish_fetch(demo_data::recommendations_for(genre));
            }
            Preset::StaleError => {
                state.begin_fetch();
                state.finish_fetch(demo_data::recommendations_for(genre));
                state.begin_fetch();
                state.finish_fetch::<&str>(Err("simulated outage"));
            }
        }
        state
    }
}
