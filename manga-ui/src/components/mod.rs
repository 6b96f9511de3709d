//! Shared UI components

pub mod button;
pub mod error_banner;
pub mod genre_select;
pub mod icons;
pub mod manga_card;
pub mod recommendations;
pub mod title_bar;
pub mod utils;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use error_banner::ErrorBanner;
pub use genre_select::GenreSelect;
pub use icons::BookOpenIcon;
pub use manga_card::MangaCard;
pub use recommendations::RecommendationsView;
pub use title_bar::TitleBarView;
pub use utils::format_rating;
