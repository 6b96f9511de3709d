//! Genre selector - native select over the fixed genre set

use crate::display_types::Genre;
use dioxus::prelude::*;
use tracing::warn;

/// Labelled genre dropdown with a "Select a genre" placeholder
#[component]
pub fn GenreSelect(
    /// Currently selected genre
    #[props(default)]
    value: Option<Genre>,
    /// Called with the newly selected genre
    onchange: EventHandler<Genre>,
) -> Element {
    let current = value.map(Genre::label).unwrap_or_default();

    rsx! {
        label { class: "block text-sm font-medium leading-none",
            "Genre"
            select {
                class: "mt-2 block w-full rounded-md bg-gray-800 border border-gray-700 text-gray-100 px-3 py-2 focus:border-green-500 focus:outline-none",
                value: current,
                onchange: move |e| match e.value().parse::<Genre>() {
                    Ok(genre) => onchange.call(genre),
                    Err(err) => warn!(%err, "Ignoring genre selection"),
                },
                option {
                    value: "",
                    disabled: true,
                    selected: value.is_none(),
                    "Select a genre"
                }
                for genre in Genre::ALL {
                    option {
                        key: "{genre}",
                        value: genre.label(),
                        selected: value == Some(genre),
                        "{genre}"
                    }
                }
            }
        }
    }
}
