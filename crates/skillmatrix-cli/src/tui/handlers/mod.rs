//! Event handlers for the App
//!
//! Key handling and rendering, split out of app.rs.

mod keys;
mod popup_keys;
mod rendering;
