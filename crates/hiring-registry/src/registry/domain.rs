use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Proficiency an applicant holds in a skill, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct ProficiencyLevel(u8);

impl ProficiencyLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for ProficiencyLevel {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(format!(
                "level {value} outside {}..={}",
                Self::MIN,
                Self::MAX
            ))
        }
    }
}

impl From<ProficiencyLevel> for u8 {
    fn from(level: ProficiencyLevel) -> Self {
        level.0
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named capability plus the positions that require it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    name: String,
    positions: BTreeSet<String>,
}

impl Skill {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            positions: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Positions requiring this skill, ordered by name.
    pub fn positions(&self) -> impl Iterator<Item = &str> {
        self.positions.iter().map(String::as_str)
    }

    pub(crate) fn link_position(&mut self, position: &str) {
        self.positions.insert(position.to_string());
    }
}

/// Job opening with a fixed requirement set, its applicants, and at most one winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    name: String,
    required_skills: BTreeSet<String>,
    applicants: BTreeSet<String>,
    winner: Option<String>,
}

impl Position {
    pub(crate) fn new(name: String, required_skills: BTreeSet<String>) -> Self {
        Self {
            name,
            required_skills,
            applicants: BTreeSet::new(),
            winner: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Required skills in enumeration order (alphabetical).
    pub fn required_skills(&self) -> impl Iterator<Item = &str> {
        self.required_skills.iter().map(String::as_str)
    }

    pub fn required_skill_count(&self) -> usize {
        self.required_skills.len()
    }

    /// Applicants who applied, ordered by name.
    pub fn applicants(&self) -> impl Iterator<Item = &str> {
        self.applicants.iter().map(String::as_str)
    }

    pub fn applicant_count(&self) -> usize {
        self.applicants.len()
    }

    pub fn has_applicant(&self, applicant: &str) -> bool {
        self.applicants.contains(applicant)
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Smallest total level strictly above which an applicant can win.
    pub fn winning_threshold(&self) -> u32 {
        WINNING_LEVEL_PER_SKILL * self.required_skills.len() as u32
    }

    pub(crate) fn add_applicant(&mut self, applicant: &str) {
        self.applicants.insert(applicant.to_string());
    }

    pub(crate) fn set_winner(&mut self, applicant: &str) {
        debug_assert!(self.winner.is_none());
        self.winner = Some(applicant.to_string());
    }
}

/// Per-skill level a winner must average above.
pub const WINNING_LEVEL_PER_SKILL: u32 = 6;

/// Candidate with fixed capabilities and the single position they applied to, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applicant {
    name: String,
    capabilities: BTreeMap<String, ProficiencyLevel>,
    applied_to: Option<String>,
}

impl Applicant {
    pub(crate) fn new(name: String, capabilities: BTreeMap<String, ProficiencyLevel>) -> Self {
        Self {
            name,
            capabilities,
            applied_to: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capabilities(&self) -> &BTreeMap<String, ProficiencyLevel> {
        &self.capabilities
    }

    pub fn level(&self, skill: &str) -> Option<ProficiencyLevel> {
        self.capabilities.get(skill).copied()
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.capabilities.contains_key(skill)
    }

    pub fn has_applied(&self) -> bool {
        self.applied_to.is_some()
    }

    pub fn applied_to(&self) -> Option<&str> {
        self.applied_to.as_deref()
    }

    pub(crate) fn mark_applied(&mut self, position: &str) {
        debug_assert!(self.applied_to.is_none());
        self.applied_to = Some(position.to_string());
    }
}
