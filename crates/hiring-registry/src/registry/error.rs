/// Validation failure raised by a registry operation. A failed call leaves the registry unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("skill '{skill}' is already registered")]
    DuplicateSkill { skill: String },
    #[error("position '{position}' is already registered")]
    DuplicatePosition { position: String },
    #[error("applicant '{applicant}' is already registered")]
    DuplicateApplicant { applicant: String },
    #[error("skill '{skill}' is not registered")]
    UnknownSkill { skill: String },
    #[error("capability '{pair}' is malformed: {reason}")]
    MalformedCapability { pair: String, reason: &'static str },
    #[error("level '{level}' for skill '{skill}' must be an integer between 1 and 10")]
    InvalidLevel { skill: String, level: String },
    #[error("applicant '{applicant}' not found")]
    ApplicantNotFound { applicant: String },
    #[error("position '{position}' not found")]
    PositionNotFound { position: String },
    #[error("applicant '{applicant}' already applied to position '{position}'")]
    AlreadyApplied { applicant: String, position: String },
    #[error("applicant '{applicant}' lacks required skill '{skill}'")]
    MissingSkill { applicant: String, skill: String },
    #[error("applicant '{applicant}' did not apply to position '{position}'")]
    NotApplied { applicant: String, position: String },
    #[error("position '{position}' already has winner '{winner}'")]
    WinnerAlreadySet { position: String, winner: String },
    #[error("score {score} for applicant '{applicant}' does not exceed threshold {threshold}")]
    InsufficientScore {
        applicant: String,
        score: u32,
        threshold: u32,
    },
}

impl RegistryError {
    /// Stable machine-readable label for the failure kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            RegistryError::DuplicateSkill { .. } => "duplicate_skill",
            RegistryError::DuplicatePosition { .. } => "duplicate_position",
            RegistryError::DuplicateApplicant { .. } => "duplicate_applicant",
            RegistryError::UnknownSkill { .. } => "unknown_skill",
            RegistryError::MalformedCapability { .. } => "malformed_capability",
            RegistryError::InvalidLevel { .. } => "invalid_level",
            RegistryError::ApplicantNotFound { .. } => "applicant_not_found",
            RegistryError::PositionNotFound { .. } => "position_not_found",
            RegistryError::AlreadyApplied { .. } => "already_applied",
            RegistryError::MissingSkill { .. } => "missing_skill",
            RegistryError::NotApplied { .. } => "not_applied",
            RegistryError::WinnerAlreadySet { .. } => "winner_already_set",
            RegistryError::InsufficientScore { .. } => "insufficient_score",
        }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::ApplicantNotFound { .. } | RegistryError::PositionNotFound { .. }
        )
    }

    /// Failures caused by an entity or transition that already exists.
    pub const fn is_conflict(&self) -> bool {
        matches!(
            self,
            RegistryError::DuplicateSkill { .. }
                | RegistryError::DuplicatePosition { .. }
                | RegistryError::DuplicateApplicant { .. }
                | RegistryError::AlreadyApplied { .. }
                | RegistryError::WinnerAlreadySet { .. }
        )
    }
}
