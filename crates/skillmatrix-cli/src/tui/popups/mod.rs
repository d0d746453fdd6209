//! Popup dialogs

pub mod add_record;
pub mod common;
pub mod help;
