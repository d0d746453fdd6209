//! Skill records
//!
//! A record is one employee's name, skill set and proficiency level. Skill set
//! and level are closed enumerations; records are immutable once built.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseChoiceError, ValidationError};

/// A closed set of options shown in a form selector
pub trait Choice: Copy + Eq + Sized + 'static {
    /// All options in display order
    const ALL: &'static [Self];

    /// Label shown to the user and used on the wire
    fn label(self) -> &'static str;

    /// Option after `current`, wrapping back to the empty placeholder
    fn cycle_next(current: Option<Self>) -> Option<Self> {
        match current {
            None => Self::ALL.first().copied(),
            Some(value) => {
                let pos = Self::ALL.iter().position(|v| *v == value)?;
                Self::ALL.get(pos + 1).copied()
            }
        }
    }

    /// Option before `current`, wrapping back to the empty placeholder
    fn cycle_prev(current: Option<Self>) -> Option<Self> {
        match current {
            None => Self::ALL.last().copied(),
            Some(value) => {
                let pos = Self::ALL.iter().position(|v| *v == value)?;
                pos.checked_sub(1).map(|p| Self::ALL[p])
            }
        }
    }

    /// Case-insensitive lookup by label
    fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label().eq_ignore_ascii_case(label))
    }
}

/// Technology an employee is skilled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillSet {
    #[serde(rename = ".NET")]
    DotNet,
    #[serde(rename = "SQL Server")]
    SqlServer,
    #[serde(rename = "Salesforce")]
    Salesforce,
}

impl Choice for SkillSet {
    const ALL: &'static [Self] = &[Self::DotNet, Self::SqlServer, Self::Salesforce];

    fn label(self) -> &'static str {
        match self {
            Self::DotNet => ".NET",
            Self::SqlServer => "SQL Server",
            Self::Salesforce => "Salesforce",
        }
    }
}

/// Proficiency level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Expert,
}

impl Choice for Level {
    const ALL: &'static [Self] = &[Self::Beginner, Self::Intermediate, Self::Expert];

    fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for SkillSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SkillSet {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ParseChoiceError::new("skill set", s))
    }
}

impl FromStr for Level {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ParseChoiceError::new("level", s))
    }
}

/// One employee's skill entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawRecord")]
pub struct SkillRecord {
    name: String,
    skill_set: SkillSet,
    level: Level,
}

/// Unchecked wire shape, validated into a `SkillRecord`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    name: String,
    skill_set: SkillSet,
    level: Level,
}

impl TryFrom<RawRecord> for SkillRecord {
    type Error = ValidationError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        Self::new(&raw.name, raw.skill_set, raw.level)
    }
}

impl SkillRecord {
    /// Build a record, trimming the name. Fails if the name is blank.
    pub fn new(name: &str, skill_set: SkillSet, level: Level) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingFields {
                name: true,
                skill_set: false,
                level: false,
            });
        }
        Ok(Self {
            name: name.to_string(),
            skill_set,
            level,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skill_set(&self) -> SkillSet {
        self.skill_set
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Case-insensitive substring match on name or skill set.
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.skill_set.label().to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let record = SkillRecord::new("  Ada Lovelace ", SkillSet::SqlServer, Level::Expert).unwrap();
        assert_eq!(record.name(), "Ada Lovelace");
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = SkillRecord::new("   ", SkillSet::DotNet, Level::Beginner).unwrap_err();
        assert!(err.is_missing_name());
    }

    #[test]
    fn test_labels_parse_case_insensitively() {
        assert_eq!(".net".parse::<SkillSet>().unwrap(), SkillSet::DotNet);
        assert_eq!("sql server".parse::<SkillSet>().unwrap(), SkillSet::SqlServer);
        assert_eq!("EXPERT".parse::<Level>().unwrap(), Level::Expert);
        assert!("Rust".parse::<SkillSet>().is_err());
        assert!("Guru".parse::<Level>().is_err());
    }

    #[test]
    fn test_cycle_wraps_through_placeholder() {
        let mut current = None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            current = Level::cycle_next(current);
            seen.push(current);
        }
        assert_eq!(
            seen,
            vec![
                Some(Level::Beginner),
                Some(Level::Intermediate),
                Some(Level::Expert),
                None
            ]
        );

        assert_eq!(SkillSet::cycle_prev(None), Some(SkillSet::Salesforce));
        assert_eq!(SkillSet::cycle_prev(Some(SkillSet::DotNet)), None);
    }

    #[test]
    fn test_serde_uses_labels() {
        let record = SkillRecord::new("John Doe", SkillSet::DotNet, Level::Expert).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"John Doe","skillSet":".NET","level":"Expert"}"#
        );
        let back: SkillRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_deserialize_rejects_blank_name() {
        let json = r#"{"name":"  ","skillSet":".NET","level":"Expert"}"#;
        assert!(serde_json::from_str::<SkillRecord>(json).is_err());
    }

    #[test]
    fn test_matches_name_or_skill() {
        let record = SkillRecord::new("Vivek Mano", SkillSet::DotNet, Level::Beginner).unwrap();
        assert!(record.matches_lowercase("net"));
        assert!(record.matches_lowercase("vivek"));
        // Level is not searched
        assert!(!record.matches_lowercase("beginner"));
    }
}
