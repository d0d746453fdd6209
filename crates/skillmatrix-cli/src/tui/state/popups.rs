//! Popup State Component
//!
//! Groups all popup controller states into a single component.

use crate::tui::popups::{add_record::AddRecordPopup, help::HelpPopup};

/// All popup controller states grouped together
#[derive(Debug)]
pub struct PopupState {
    pub add_record: AddRecordPopup,
    pub help: HelpPopup,
}

impl PopupState {
    pub fn new() -> Self {
        Self {
            add_record: AddRecordPopup::new(),
            help: HelpPopup::new(),
        }
    }
}

impl Default for PopupState {
    fn default() -> Self {
        Self::new()
    }
}
