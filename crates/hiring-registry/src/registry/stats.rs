use serde::{Deserialize, Serialize};

use super::engine::HiringRegistry;

/// Number of applicants holding a skill at any level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillApplicantCount {
    pub skill: String,
    pub applicants: usize,
}

impl HiringRegistry {
    /// One entry per registered skill, alphabetical by skill name.
    pub fn skill_applicant_counts(&self) -> Vec<SkillApplicantCount> {
        self.skills()
            .map(|skill| SkillApplicantCount {
                skill: skill.name().to_string(),
                applicants: self
                    .applicants()
                    .filter(|applicant| applicant.has_skill(skill.name()))
                    .count(),
            })
            .collect()
    }

    /// Position with the most applicants; ties go to the alphabetically smallest name.
    pub fn max_position(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for position in self.positions() {
            let count = position.applicant_count();
            match best {
                Some((_, top)) if top >= count => {}
                _ => best = Some((position.name(), count)),
            }
        }
        best.map(|(name, _)| name)
    }
}
