use std::collections::{BTreeMap, BTreeSet};

use super::capability::{format_capabilities, parse_capabilities};
use super::domain::{Applicant, Position, Skill};
use super::error::RegistryError;

/// Owns every skill, position, and applicant by name and enforces the hiring rules.
///
/// Each mutating operation validates fully before touching state, so a failed call leaves
/// the registry exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct HiringRegistry {
    skills: BTreeMap<String, Skill>,
    positions: BTreeMap<String, Position>,
    applicants: BTreeMap<String, Applicant>,
}

impl HiringRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a batch of skills. Rejects names already registered or repeated in the batch.
    pub fn add_skills<I, S>(&mut self, names: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut batch = BTreeSet::new();
        let mut ordered = Vec::new();
        for name in names {
            let name = name.into();
            if self.skills.contains_key(&name) || !batch.insert(name.clone()) {
                return Err(RegistryError::DuplicateSkill { skill: name });
            }
            ordered.push(name);
        }

        for name in ordered {
            self.skills.insert(name.clone(), Skill::new(name));
        }
        Ok(())
    }

    /// Registers a position over already-registered skills and links each skill back to it.
    pub fn add_position<I, S>(&mut self, name: &str, required_skills: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.positions.contains_key(name) {
            return Err(RegistryError::DuplicatePosition {
                position: name.to_string(),
            });
        }

        let mut required = BTreeSet::new();
        for skill in required_skills {
            let skill = skill.as_ref();
            if !self.skills.contains_key(skill) {
                return Err(RegistryError::UnknownSkill {
                    skill: skill.to_string(),
                });
            }
            required.insert(skill.to_string());
        }

        for skill in &required {
            if let Some(entry) = self.skills.get_mut(skill) {
                entry.link_position(name);
            }
        }
        self.positions
            .insert(name.to_string(), Position::new(name.to_string(), required));
        Ok(())
    }

    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.get(name)
    }

    pub fn position(&self, name: &str) -> Option<&Position> {
        self.positions.get(name)
    }

    pub fn applicant(&self, name: &str) -> Option<&Applicant> {
        self.applicants.get(name)
    }

    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills.values()
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.positions.values()
    }

    pub fn applicants(&self) -> impl Iterator<Item = &Applicant> {
        self.applicants.values()
    }

    /// Registers an applicant from a capability spec such as `java:9,sql:7`.
    pub fn add_applicant(&mut self, name: &str, capabilities: &str) -> Result<(), RegistryError> {
        if self.applicants.contains_key(name) {
            return Err(RegistryError::DuplicateApplicant {
                applicant: name.to_string(),
            });
        }

        let capabilities = parse_capabilities(capabilities, |skill| self.skills.contains_key(skill))?;
        self.applicants.insert(
            name.to_string(),
            Applicant::new(name.to_string(), capabilities),
        );
        Ok(())
    }

    /// Canonical `skill:level,...` listing of an applicant's capabilities, sorted by skill.
    pub fn capabilities(&self, applicant: &str) -> Result<String, RegistryError> {
        let applicant = self.require_applicant(applicant)?;
        Ok(format_capabilities(applicant.capabilities()))
    }

    /// Files the applicant's one and only application. Levels are not checked here.
    pub fn enter_application(
        &mut self,
        applicant_name: &str,
        position_name: &str,
    ) -> Result<(), RegistryError> {
        let applicant = self.require_applicant(applicant_name)?;
        let position = self.require_position(position_name)?;

        if let Some(previous) = applicant.applied_to() {
            return Err(RegistryError::AlreadyApplied {
                applicant: applicant_name.to_string(),
                position: previous.to_string(),
            });
        }

        if let Some(skill) = position
            .required_skills()
            .find(|skill| !applicant.has_skill(skill))
        {
            return Err(RegistryError::MissingSkill {
                applicant: applicant_name.to_string(),
                skill: skill.to_string(),
            });
        }

        if let Some(position) = self.positions.get_mut(position_name) {
            position.add_applicant(applicant_name);
        }
        if let Some(applicant) = self.applicants.get_mut(applicant_name) {
            applicant.mark_applied(position_name);
        }
        Ok(())
    }

    /// Selects the position's winner and returns the applicant's summed required-skill levels.
    ///
    /// The score must be strictly greater than six times the number of required skills.
    pub fn set_winner(
        &mut self,
        position_name: &str,
        applicant_name: &str,
    ) -> Result<u32, RegistryError> {
        let position = self.require_position(position_name)?;
        let applicant = self.require_applicant(applicant_name)?;

        if !position.has_applicant(applicant_name) {
            return Err(RegistryError::NotApplied {
                applicant: applicant_name.to_string(),
                position: position_name.to_string(),
            });
        }
        if let Some(winner) = position.winner() {
            return Err(RegistryError::WinnerAlreadySet {
                position: position_name.to_string(),
                winner: winner.to_string(),
            });
        }

        let mut score = 0u32;
        for skill in position.required_skills() {
            let level = applicant
                .level(skill)
                .ok_or_else(|| RegistryError::MissingSkill {
                    applicant: applicant_name.to_string(),
                    skill: skill.to_string(),
                })?;
            score += u32::from(level.value());
        }

        let threshold = position.winning_threshold();
        if score <= threshold {
            return Err(RegistryError::InsufficientScore {
                applicant: applicant_name.to_string(),
                score,
                threshold,
            });
        }

        if let Some(position) = self.positions.get_mut(position_name) {
            position.set_winner(applicant_name);
        }
        Ok(score)
    }

    fn require_applicant(&self, name: &str) -> Result<&Applicant, RegistryError> {
        self.applicants
            .get(name)
            .ok_or_else(|| RegistryError::ApplicantNotFound {
                applicant: name.to_string(),
            })
    }

    fn require_position(&self, name: &str) -> Result<&Position, RegistryError> {
        self.positions
            .get(name)
            .ok_or_else(|| RegistryError::PositionNotFound {
                position: name.to_string(),
            })
    }
}
