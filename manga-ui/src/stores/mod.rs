//! Store types for UI state management
//!
//! These stores hold UI state that is shared between manga-web (real app)
//! and manga-demo (fixture app). Each store derives `Store` for fine-grained
//! reactivity via lensing.

pub mod recommendations;

pub use recommendations::*;
