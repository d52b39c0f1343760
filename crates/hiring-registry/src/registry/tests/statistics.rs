use super::common::*;
use crate::registry::{HiringRegistry, SkillApplicantCount};

fn counts(registry: &HiringRegistry) -> Vec<(String, usize)> {
    registry
        .skill_applicant_counts()
        .into_iter()
        .map(|SkillApplicantCount { skill, applicants }| (skill, applicants))
        .collect()
}

#[test]
fn skill_counts_cover_every_skill_alphabetically() {
    let mut registry = HiringRegistry::new();
    registry.add_skills(["sql", "java"]).expect("skills register");
    registry
        .add_applicant("alice", "java:5")
        .expect("alice registers");
    registry
        .add_applicant("bob", "java:3,sql:8")
        .expect("bob registers");

    assert_eq!(
        counts(&registry),
        vec![("java".to_string(), 2), ("sql".to_string(), 1)]
    );
}

#[test]
fn skill_counts_include_unclaimed_skills() {
    let registry = registry_with_applicants();

    assert_eq!(
        counts(&registry),
        vec![
            ("java".to_string(), 3),
            ("python".to_string(), 2),
            ("sql".to_string(), 3),
        ]
    );
    assert!(counts(&HiringRegistry::new()).is_empty());
}

#[test]
fn max_position_is_none_without_positions() {
    assert_eq!(HiringRegistry::new().max_position(), None);
}

#[test]
fn max_position_prefers_most_applicants() {
    let mut registry = registry_with_applicants();
    registry
        .enter_application("carol", "data")
        .expect("carol applies");
    registry
        .add_applicant("gina", "python:4,sql:4")
        .expect("gina registers");
    registry
        .enter_application("gina", "data")
        .expect("gina applies");
    registry
        .enter_application("alice", "backend")
        .expect("alice applies");

    assert_eq!(registry.max_position(), Some("data"));
}

#[test]
fn max_position_breaks_ties_alphabetically() {
    let mut registry = registry_with_applicants();
    assert_eq!(registry.max_position(), Some("backend"));

    registry
        .enter_application("carol", "data")
        .expect("carol applies");
    assert_eq!(registry.max_position(), Some("data"));

    registry
        .enter_application("alice", "backend")
        .expect("alice applies");
    assert_eq!(registry.max_position(), Some("backend"));
}
