//! Domain errors

use thiserror::Error;

/// A record submission was rejected because required fields were blank
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", missing_list(.name, .skill_set, .level))]
    MissingFields {
        name: bool,
        skill_set: bool,
        level: bool,
    },
}

impl ValidationError {
    pub fn is_missing_name(&self) -> bool {
        matches!(self, Self::MissingFields { name: true, .. })
    }

    pub fn is_missing_skill_set(&self) -> bool {
        matches!(self, Self::MissingFields { skill_set: true, .. })
    }

    pub fn is_missing_level(&self) -> bool {
        matches!(self, Self::MissingFields { level: true, .. })
    }
}

fn missing_list(name: &bool, skill_set: &bool, level: &bool) -> String {
    [(*name, "name"), (*skill_set, "skill set"), (*level, "level")]
        .iter()
        .filter(|(missing, _)| *missing)
        .map(|(_, field)| *field)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A label did not name any option of a closed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseChoiceError {
    kind: &'static str,
    value: String,
}

impl ParseChoiceError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
