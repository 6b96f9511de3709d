//! Title bar component

use crate::components::icons::BookOpenIcon;
use dioxus::prelude::*;

/// Sticky header with the app title
#[component]
pub fn TitleBarView(#[props(default = "Manga Recommendations".to_string())] title: String) -> Element {
    rsx! {
        header { class: "sticky top-0 z-10 w-full border-b border-gray-800 bg-gray-900/95 backdrop-blur",
            div { class: "container mx-auto flex h-16 items-center px-4",
                BookOpenIcon { class: "mr-2 h-6 w-6 text-green-500" }
                h1 { class: "text-xl font-bold text-green-500", "{title}" }
            }
        }
    }
}
