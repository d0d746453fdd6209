//! Skill Matrix Core Library
//!
//! UI-free logic for the skill matrix: employee skill records, the in-memory
//! store and its search, the add-record form with validation, and the
//! component state machine that ties them together.

pub mod config;
pub mod constants;
pub mod error;
pub mod form;
pub mod matrix;
pub mod paths;
pub mod record;
pub mod store;

pub use config::{Config, ValidationFeedback};
pub use error::ValidationError;
pub use form::RecordForm;
pub use matrix::{reduce, MatrixEvent, MatrixState, Modal, Transition};
pub use record::{Choice, Level, SkillRecord, SkillSet};
pub use store::Store;
