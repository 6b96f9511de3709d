//! Manga card component - pure view

use crate::components::utils::format_rating;
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::Manga;
use dioxus::prelude::*;

/// Cover shown for every card; the service returns no artwork
pub const PLACEHOLDER_COVER_URL: &str = "/placeholder.svg?height=200&width=150";

/// Individual recommendation card
///
/// The "Learn More" button has no behavior yet.
#[component]
pub fn MangaCard(manga: Manga) -> Element {
    let rating = format_rating(manga.rating);

    rsx! {
        div {
            class: "bg-gray-800 border border-gray-700 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow duration-300",
            "data-testid": "manga-card",
            img {
                src: PLACEHOLDER_COVER_URL,
                alt: "{manga.name}",
                class: "h-[250px] w-full object-cover",
            }
            div { class: "p-4",
                h3 {
                    class: "text-xl font-bold text-green-400 truncate",
                    title: "{manga.name}",
                    "{manga.name}"
                }
                p { class: "text-sm text-gray-400", "{manga.genre}" }
                p { class: "mt-2 text-yellow-400", "Rating: {rating}" }
            }
            div { class: "p-4 pt-0",
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Medium,
                    class: Some("w-full".to_string()),
                    onclick: |_| {},
                    "Learn More"
                }
            }
        }
    }
}
