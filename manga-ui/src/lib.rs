//! manga-ui - Shared UI types and components for manga recommendations
//!
//! Contains display types, the recommendations store, and pure view
//! components used by both the web app and the demo.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;

use dioxus::prelude::*;

/// Stylesheet shared by every app that renders these components
pub const STYLESHEET: Asset = asset!("/assets/main.css");
