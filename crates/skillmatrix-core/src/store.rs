//! In-memory record store
//!
//! An append-only ordered sequence of skill records. Search is a linear,
//! case-insensitive substring filter over name and skill set.

use serde::{Deserialize, Serialize};

use crate::record::{Level, SkillRecord, SkillSet};

/// Records loaded at startup
const SEED: &[(&str, SkillSet, Level)] = &[
    ("John Doe", SkillSet::DotNet, Level::Expert),
    ("Bob Marty", SkillSet::SqlServer, Level::Intermediate),
    ("Vivek Mano", SkillSet::DotNet, Level::Beginner),
    ("Jeff Marsh", SkillSet::Salesforce, Level::Intermediate),
    ("Steve Smith", SkillSet::SqlServer, Level::Beginner),
    ("Mark Edwards", SkillSet::Salesforce, Level::Expert),
    ("Nick Bosa", SkillSet::DotNet, Level::Intermediate),
];

/// Ordered, append-only collection of records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    records: Vec<SkillRecord>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the seven startup records
    pub fn seeded() -> Self {
        let records = SEED
            .iter()
            .filter_map(|(name, skill_set, level)| SkillRecord::new(name, *skill_set, *level).ok())
            .collect();
        Self { records }
    }

    /// Add a record at the end
    pub fn append(&mut self, record: SkillRecord) {
        self.records.push(record);
    }

    /// Records whose name or skill set contains `term`, ignoring case.
    /// A blank term means no filter.
    pub fn query(&self, term: &str) -> Vec<&SkillRecord> {
        if term.trim().is_empty() {
            return self.records.iter().collect();
        }
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.matches_lowercase(&needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[SkillRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&SkillRecord> {
        self.records.last()
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = &'a SkillRecord;
    type IntoIter = std::slice::Iter<'a, SkillRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
