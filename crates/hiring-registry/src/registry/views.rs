use serde::Serialize;

use super::capability::format_capabilities;
use super::domain::{Applicant, Position, Skill};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillView {
    pub name: String,
    pub positions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionView {
    pub name: String,
    pub required_skills: Vec<String>,
    pub applicants: Vec<String>,
    pub winner: Option<String>,
    pub winning_threshold: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicantView {
    pub name: String,
    pub capabilities: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_to: Option<String>,
}

impl Skill {
    pub fn view(&self) -> SkillView {
        SkillView {
            name: self.name().to_string(),
            positions: self.positions().map(str::to_string).collect(),
        }
    }
}

impl Position {
    pub fn view(&self) -> PositionView {
        PositionView {
            name: self.name().to_string(),
            required_skills: self.required_skills().map(str::to_string).collect(),
            applicants: self.applicants().map(str::to_string).collect(),
            winner: self.winner().map(str::to_string),
            winning_threshold: self.winning_threshold(),
        }
    }
}

impl Applicant {
    pub fn view(&self) -> ApplicantView {
        ApplicantView {
            name: self.name().to_string(),
            capabilities: format_capabilities(self.capabilities()),
            applied_to: self.applied_to().map(str::to_string),
        }
    }
}
