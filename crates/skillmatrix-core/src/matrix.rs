//! Skill matrix component state
//!
//! All component-local state (store, search term, applied filter, modal and
//! pending form) lives in one serializable struct. UI callbacks become
//! `MatrixEvent`s applied by plain transition functions, so the logic runs
//! without any rendering layer.

use serde::{Deserialize, Serialize};

use crate::config::ValidationFeedback;
use crate::error::ValidationError;
use crate::form::RecordForm;
use crate::record::{Level, SkillRecord, SkillSet};
use crate::store::Store;

/// Add-record modal visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modal {
    #[default]
    Closed,
    Open,
}

/// User intents coming from the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixEvent {
    /// Search input edited
    SearchChanged(String),
    /// Search button / Enter in the search input
    SearchSubmitted,
    /// "Add Record" trigger
    OpenForm,
    /// Modal closed without submitting
    DismissForm,
    NameChanged(String),
    SkillSetChanged(Option<SkillSet>),
    LevelChanged(Option<Level>),
    /// "Add Record" button inside the modal
    FormSubmitted,
}

/// What an event did to the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    FilterApplied { matches: usize },
    FilterCleared,
    FormOpened,
    FormDismissed,
    FormEdited,
    RecordAdded { index: usize },
    Rejected(ValidationError),
}

/// Complete state of one skill matrix component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixState {
    store: Store,
    /// Search input as typed
    search_term: String,
    /// Term the view is currently filtered by
    filter: Option<String>,
    modal: Modal,
    form: RecordForm,
    feedback: ValidationFeedback,
}

impl Default for MatrixState {
    fn default() -> Self {
        Self::new(Store::seeded(), ValidationFeedback::default())
    }
}

impl MatrixState {
    pub fn new(store: Store, feedback: ValidationFeedback) -> Self {
        Self {
            store,
            search_term: String::new(),
            filter: None,
            modal: Modal::Closed,
            form: RecordForm::new(),
            feedback,
        }
    }

    /// Seeded store with the given feedback policy
    pub fn with_feedback(feedback: ValidationFeedback) -> Self {
        Self::new(Store::seeded(), feedback)
    }

    /// Apply one event in place
    pub fn dispatch(&mut self, event: MatrixEvent) -> Transition {
        match event {
            MatrixEvent::SearchChanged(term) => {
                let cleared = term.trim().is_empty() && self.filter.take().is_some();
                self.search_term = term;
                if cleared {
                    tracing::debug!("Search input emptied, filter cleared");
                    Transition::FilterCleared
                } else {
                    Transition::Unchanged
                }
            }
            MatrixEvent::SearchSubmitted => self.apply_search(),
            MatrixEvent::OpenForm => match self.modal {
                Modal::Open => Transition::Unchanged,
                Modal::Closed => {
                    self.modal = Modal::Open;
                    Transition::FormOpened
                }
            },
            MatrixEvent::DismissForm => match self.modal {
                Modal::Closed => Transition::Unchanged,
                Modal::Open => {
                    self.modal = Modal::Closed;
                    self.form.reset();
                    Transition::FormDismissed
                }
            },
            MatrixEvent::NameChanged(name) => self.edit_form(|form| form.name = name),
            MatrixEvent::SkillSetChanged(skill_set) => {
                self.edit_form(|form| form.skill_set = skill_set)
            }
            MatrixEvent::LevelChanged(level) => self.edit_form(|form| form.level = level),
            MatrixEvent::FormSubmitted => self.submit_form(),
        }
    }

    fn apply_search(&mut self) -> Transition {
        if self.search_term.trim().is_empty() {
            return match self.filter.take() {
                Some(_) => Transition::FilterCleared,
                None => Transition::Unchanged,
            };
        }
        let matches = self.store.query(&self.search_term).len();
        tracing::debug!(term = %self.search_term, matches, "Search applied");
        self.filter = Some(self.search_term.clone());
        Transition::FilterApplied { matches }
    }

    fn edit_form(&mut self, edit: impl FnOnce(&mut RecordForm)) -> Transition {
        if self.modal == Modal::Closed {
            return Transition::Unchanged;
        }
        edit(&mut self.form);
        Transition::FormEdited
    }

    fn submit_form(&mut self) -> Transition {
        if self.modal == Modal::Closed {
            return Transition::Unchanged;
        }
        match self.form.submit() {
            Ok(record) => {
                tracing::info!(
                    name = record.name(),
                    skill_set = %record.skill_set(),
                    level = %record.level(),
                    "Adding new record"
                );
                self.store.append(record);
                self.modal = Modal::Closed;
                self.search_term.clear();
                self.filter = None;
                Transition::RecordAdded {
                    index: self.store.len() - 1,
                }
            }
            Err(err) => {
                tracing::debug!(
                    has_name = !err.is_missing_name(),
                    has_skill = !err.is_missing_skill_set(),
                    has_level = !err.is_missing_level(),
                    "Validation failed"
                );
                Transition::Rejected(err)
            }
        }
    }

    /// Records currently shown: the filtered view, or everything
    pub fn visible(&self) -> Vec<&SkillRecord> {
        match &self.filter {
            Some(term) => self.store.query(term),
            None => self.store.iter().collect(),
        }
    }

    /// Inline form error, subject to the feedback policy
    pub fn validation_message(&self) -> Option<&'static str> {
        match self.feedback {
            ValidationFeedback::Inline => self.form.validation_message(),
            ValidationFeedback::Silent => None,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn modal(&self) -> Modal {
        self.modal
    }

    pub fn is_form_open(&self) -> bool {
        self.modal == Modal::Open
    }

    pub fn form(&self) -> &RecordForm {
        &self.form
    }

    pub fn feedback(&self) -> ValidationFeedback {
        self.feedback
    }
}

/// Pure transition: current state and an event in, next state out
pub fn reduce(mut state: MatrixState, event: MatrixEvent) -> MatrixState {
    state.dispatch(event);
    state
}
