//! Terminal UI for the skill matrix

mod app;
mod handlers;
mod input;
mod popups;
mod state;
mod theme;
mod utils;

pub use app::App;
