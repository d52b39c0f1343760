//! Skill, position, and applicant registry with application and winner-selection rules.
//!
//! [`HiringRegistry`] is a plain single-threaded value. Hosts that serve concurrent callers
//! go through [`SharedRegistry`], which guards the whole registry with one lock.

pub mod capability;
pub mod domain;
mod engine;
pub mod error;
pub mod roster;
pub mod router;
mod shared;
mod stats;
pub mod views;

#[cfg(test)]
mod tests;

pub use capability::{format_capabilities, parse_capabilities};
pub use domain::{Applicant, Position, ProficiencyLevel, Skill, WINNING_LEVEL_PER_SKILL};
pub use engine::HiringRegistry;
pub use error::RegistryError;
pub use roster::{RosterImportError, RosterImporter, RosterSummary, WinnerRecord};
pub use router::registry_router;
pub use shared::SharedRegistry;
pub use stats::SkillApplicantCount;
pub use views::{ApplicantView, PositionView, SkillView};
