//! End-to-end scenarios through the public registry facade and roster importer.

use std::io::Cursor;

use hiring_registry::registry::{
    HiringRegistry, RegistryError, RosterImporter, SharedRegistry, SkillApplicantCount,
};

fn registry_with_skills(skills: &[&str]) -> HiringRegistry {
    let mut registry = HiringRegistry::new();
    registry
        .add_skills(skills.iter().copied())
        .expect("skills register");
    registry
}

#[test]
fn every_registered_skill_rejects_re_registration() {
    let mut registry = registry_with_skills(&["java", "sql", "rust"]);

    for skill in ["java", "sql", "rust"] {
        assert_eq!(
            registry.add_skills([skill]),
            Err(RegistryError::DuplicateSkill {
                skill: skill.to_string()
            })
        );
    }
}

#[test]
fn unknown_skill_only_when_a_requirement_was_never_registered() {
    let mut registry = registry_with_skills(&["a", "b"]);

    assert!(registry.add_position("p1", ["a", "b"]).is_ok());
    assert!(matches!(
        registry.add_position("p2", ["a", "c"]),
        Err(RegistryError::UnknownSkill { .. })
    ));
    registry.add_skills(["c"]).expect("c registers");
    assert!(registry.add_position("p2", ["a", "c"]).is_ok());
}

#[test]
fn capabilities_round_trip_through_registration() {
    let mut registry = registry_with_skills(&["java", "sql"]);
    registry
        .add_applicant("alice", "java:9,sql:7")
        .expect("alice registers");

    let canonical = registry.capabilities("alice").expect("alice registered");
    assert_eq!(canonical, "java:9,sql:7");

    registry
        .add_applicant("alice-again", &canonical)
        .expect("canonical string re-parses");
    assert_eq!(
        registry.capabilities("alice-again").expect("registered"),
        canonical
    );
}

#[test]
fn hiring_threshold_scenario() {
    let mut registry = registry_with_skills(&["a", "b"]);
    registry.add_position("P", ["a", "b"]).expect("P registers");
    registry.add_applicant("even", "a:6,b:6").expect("even");
    registry.add_applicant("above", "a:6,b:7").expect("above");
    registry.add_applicant("late", "a:10,b:10").expect("late");
    for applicant in ["even", "above", "late"] {
        registry
            .enter_application(applicant, "P")
            .expect("application accepted");
    }

    assert!(matches!(
        registry.set_winner("P", "even"),
        Err(RegistryError::InsufficientScore { score: 12, .. })
    ));
    assert_eq!(registry.set_winner("P", "above"), Ok(13));
    assert!(matches!(
        registry.set_winner("P", "late"),
        Err(RegistryError::WinnerAlreadySet { .. })
    ));

    assert!(matches!(
        registry.enter_application("above", "P"),
        Err(RegistryError::AlreadyApplied { .. })
    ));
}

#[test]
fn statistics_over_roster_import() {
    let roster = "kind,name,detail\n\
skill,java,\n\
skill,sql,\n\
applicant,alice,java:5\n\
applicant,bob,\"java:3,sql:8\"\n";

    let registry = RosterImporter::from_reader(Cursor::new(roster)).expect("roster imports");

    assert_eq!(
        registry.skill_applicant_counts(),
        vec![
            SkillApplicantCount {
                skill: "java".to_string(),
                applicants: 2,
            },
            SkillApplicantCount {
                skill: "sql".to_string(),
                applicants: 1,
            },
        ]
    );
    assert_eq!(registry.max_position(), None);
}

#[test]
fn shared_registry_serializes_access_across_threads() {
    let shared = SharedRegistry::new(registry_with_skills(&["java"]));
    shared.with(|registry| {
        registry
            .add_position("backend", ["java"])
            .expect("backend registers")
    });

    let handles: Vec<_> = (0..8)
        .map(|index| {
            let shared = shared.clone();
            std::thread::spawn(move || {
                let name = format!("dev-{index}");
                shared.with(|registry| {
                    registry.add_applicant(&name, "java:7")?;
                    registry.enter_application(&name, "backend")
                })
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .expect("thread completes")
            .expect("application accepted");
    }

    let applicants = shared.with(|registry| {
        registry
            .position("backend")
            .map(|position| position.applicant_count())
    });
    assert_eq!(applicants, Some(8));
}

#[test]
fn sample_roster_fixture_imports_cleanly() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../fixtures/roster.csv");
    let mut registry = HiringRegistry::new();
    let file = std::fs::File::open(path).expect("fixture present");
    let summary = RosterImporter::apply(file, &mut registry).expect("fixture imports");

    let winners: Vec<_> = summary
        .winners
        .iter()
        .map(|winner| (winner.position.as_str(), winner.applicant.as_str(), winner.score))
        .collect();
    assert_eq!(
        winners,
        vec![("backend", "alice", 13), ("data", "carol", 17)]
    );
    assert_eq!(registry.max_position(), Some("backend"));
    assert_eq!(
        registry
            .position("backend")
            .map(|position| position.applicants().collect::<Vec<_>>()),
        Some(vec!["alice", "bob"])
    );

    let reloaded = RosterImporter::from_path(path).expect("fixture imports by path");
    assert_eq!(
        reloaded.capabilities("carol").expect("carol imported"),
        "java:2,python:9,sql:8"
    );
}
