//! Error banner shown above the results grid

use dioxus::prelude::*;

/// Inline error message for a failed fetch
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "mt-4 text-red-500",
            role: "alert",
            "data-testid": "error-banner",
            "{message}"
        }
    }
}
