//! Recommendations view component - pure rendering, no data fetching
//!
//! ## Reactive State Pattern
//! Accepts `ReadStore<RecommendationsState>` and reads through lenses. User
//! intent leaves through callbacks; the owning page decides what a fetch
//! means (HTTP in the web app, fixtures in the demo).

use crate::components::error_banner::ErrorBanner;
use crate::components::genre_select::GenreSelect;
use crate::components::manga_card::MangaCard;
use crate::components::title_bar::TitleBarView;
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::Genre;
use crate::stores::recommendations::{RecommendationsState, RecommendationsStateStoreExt};
use dioxus::prelude::*;

/// Genre picker, fetch trigger, error banner and card grid
#[component]
pub fn RecommendationsView(
    state: ReadStore<RecommendationsState>,
    on_genre_change: EventHandler<Genre>,
    on_fetch: EventHandler<()>,
) -> Element {
    let selected_genre = *state.selected_genre().read();
    let error = state.error().read().clone();
    let recommendations = state.recommendations().read().clone();
    let (can_fetch, button_label) = {
        let snapshot = state.read();
        (snapshot.can_fetch(), snapshot.button_label())
    };

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-gray-100",
            TitleBarView {}
            main { class: "container mx-auto px-4 py-8",
                div { class: "flex flex-col gap-4 md:flex-row md:items-end",
                    div { class: "flex-1",
                        GenreSelect { value: selected_genre, onchange: on_genre_change }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        disabled: !can_fetch,
                        class: Some("w-full md:w-auto".to_string()),
                        onclick: move |_| on_fetch.call(()),
                        "{button_label}"
                    }
                }
                if let Some(message) = error {
                    ErrorBanner { message }
                }
                div { class: "mt-12 grid gap-8 sm:grid-cols-2 lg:grid-cols-3",
                    for manga in recommendations {
                        MangaCard { key: "{manga.name}", manga }
                    }
                }
            }
        }
    }
}
