use crate::api::RecommendationsClient;
use dioxus::prelude::*;
use manga_ui::stores::RecommendationsState;
use manga_ui::{Genre, RecommendationsView};

/// Owns the recommendations store for as long as the page is mounted and
/// runs the fetch cycle against the recommendation service.
#[component]
pub fn Recommendations() -> Element {
    let mut state = use_store(RecommendationsState::default);
    let client: RecommendationsClient = use_context();

    rsx! {
        RecommendationsView {
            state,
            on_genre_change: move |genre: Genre| {
                state.write().select_genre(genre);
            },
            on_fetch: move |_| {
                let Some(genre) = state.write().begin_fetch() else {
                    return;
                };
                let client = client.clone();
                spawn(async move {
                    let result = client.fetch_recommendations(genre).await;
                    state.write().finish_fetch(result);
                });
            },
        }
    }
}
