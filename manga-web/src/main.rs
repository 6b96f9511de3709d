//! Manga recommendations web app

fn main() {
    dioxus::launch(manga_web::App);
}
