//! App State Components
//!
//! Groups related UI state into logical modules.

mod popups;

pub use popups::PopupState;
