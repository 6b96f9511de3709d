pub mod api;
pub mod config;
pub mod pages;

use api::RecommendationsClient;
use config::ApiConfig;
use dioxus::prelude::*;
use manga_ui::STYLESHEET;
use pages::Recommendations;

#[component]
pub fn App() -> Element {
    use_context_provider(|| RecommendationsClient::new(ApiConfig::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: STYLESHEET }
        Recommendations {}
    }
}
