//! manga demo - fixture-driven recommendations app
//!
//! Renders the recommendations view against embedded fixture data, with a
//! preset bar for jumping between view states. No recommendation service
//! is needed.

mod demo_data;
mod presets;

use dioxus::prelude::*;
use manga_ui::{Button, ButtonSize, ButtonVariant, Genre, RecommendationsView, STYLESHEET};
use presets::Preset;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut active = use_signal(|| Some(Preset::Loaded));
    let mut state = use_store(|| Preset::Loaded.state());

    rsx! {
        document::Link { rel: "stylesheet", href: STYLESHEET }
        PresetBar {
            active: active(),
            on_select: move |preset: Preset| {
                active.set(Some(preset));
                state.set(preset.state());
            },
        }
        RecommendationsView {
            state,
            on_genre_change: move |genre: Genre| {
                active.set(None);
                state.write().select_genre(genre);
            },
            on_fetch: move |_| {
                let Some(genre) = state.write().begin_fetch() else {
                    return;
                };
                active.set(None);
                state.write().finish_fetch(demo_data::recommendations_for(genre));
            },
        }
    }
}

/// Row of preset buttons; the active preset is highlighted until the user
/// interacts with the view.
#[component]
fn PresetBar(#[props(default)] active: Option<Preset>, on_select: EventHandler<Preset>) -> Element {
    rsx! {
        div { class: "flex gap-2 px-4 py-2 bg-gray-800 border-b border-gray-700",
            for preset in Preset::ALL {
                Button {
                    key: "{preset:?}",
                    variant: if active == Some(preset) { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                    size: ButtonSize::Small,
                    onclick: move |_| on_select.call(preset),
                    {preset.label()}
                }
            }
        }
    }
}
