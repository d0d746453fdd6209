//! Add-record form
//!
//! Pending values for a new record plus the "validation requested" flag that
//! gates the inline error message.

use serde::{Deserialize, Serialize};

use crate::constants::ui::VALIDATION_MESSAGE;
use crate::error::ValidationError;
use crate::record::{Level, SkillRecord, SkillSet};

/// Pending form values. `None` selections are the "Select ..." placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordForm {
    pub name: String,
    pub skill_set: Option<SkillSet>,
    pub level: Option<Level>,
    /// Set by the first submit attempt; cleared on reset
    pub validation_requested: bool,
}

impl RecordForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the pending values without touching any state
    pub fn validate(&self) -> Result<SkillRecord, ValidationError> {
        match (self.skill_set, self.level) {
            (Some(skill_set), Some(level)) if !self.name.trim().is_empty() => {
                SkillRecord::new(&self.name, skill_set, level)
            }
            _ => Err(self.missing_fields()),
        }
    }

    /// Attempt to build a record. Success clears the form.
    pub fn submit(&mut self) -> Result<SkillRecord, ValidationError> {
        self.validation_requested = true;
        let record = self.validate()?;
        self.reset();
        Ok(record)
    }

    /// Which required fields are still blank
    pub fn missing_fields(&self) -> ValidationError {
        ValidationError::MissingFields {
            name: self.name.trim().is_empty(),
            skill_set: self.skill_set.is_none(),
            level: self.level.is_none(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// Inline message shown under the fields after a failed submit.
    /// Recomputed from the current values, so it clears once they are filled.
    pub fn validation_message(&self) -> Option<&'static str> {
        (self.validation_requested && !self.is_complete()).then_some(VALIDATION_MESSAGE)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RecordForm {
        RecordForm {
            name: "Ada Lovelace".to_string(),
            skill_set: Some(SkillSet::SqlServer),
            level: Some(Level::Expert),
            validation_requested: false,
        }
    }

    #[test]
    fn test_submit_success_resets() {
        let mut form = filled();
        form.name = "  Ada Lovelace  ".to_string();
        let record = form.submit().unwrap();
        assert_eq!(record.name(), "Ada Lovelace");
        assert_eq!(record.skill_set(), SkillSet::SqlServer);
        assert_eq!(record.level(), Level::Expert);
        assert_eq!(form, RecordForm::default());
    }

    #[test]
    fn test_each_blank_field_rejected() {
        let cases: [fn(&mut RecordForm); 4] = [
            |f| f.name.clear(),
            |f| f.name = "   ".to_string(),
            |f| f.skill_set = None,
            |f| f.level = None,
        ];
        for blank in cases {
            let mut form = filled();
            blank(&mut form);
            let before = form.clone();
            assert!(form.submit().is_err());
            // Values survive a rejected submit
            assert_eq!(form.name, before.name);
            assert_eq!(form.skill_set, before.skill_set);
            assert_eq!(form.level, before.level);
            assert!(form.validation_requested);
        }
    }

    #[test]
    fn test_error_reports_all_missing_fields() {
        let form = RecordForm::new();
        let err = form.validate().unwrap_err();
        assert!(err.is_missing_name());
        assert!(err.is_missing_skill_set());
        assert!(err.is_missing_level());
    }

    #[test]
    fn test_message_only_after_submit_attempt() {
        let mut form = RecordForm::new();
        assert_eq!(form.validation_message(), None);

        assert!(form.submit().is_err());
        assert_eq!(form.validation_message(), Some(VALIDATION_MESSAGE));

        form.name = "Grace Hopper".to_string();
        form.skill_set = Some(SkillSet::DotNet);
        assert_eq!(form.validation_message(), Some(VALIDATION_MESSAGE));

        form.level = Some(Level::Beginner);
        assert_eq!(form.validation_message(), None);
    }
}
