//! watchverse-ui - Display types and view components for WatchVerse
//!
//! Pure, props-based components: they render what they are given and report
//! user intent through callbacks. Fetching and navigation live in the web app.

pub mod components;
pub mod display_types;

pub use components::*;
pub use display_types::*;
