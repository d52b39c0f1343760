//! Replays a roster CSV (`kind,name,detail`) against a registry, one operation per row.
//!
//! | kind          | name      | detail                         |
//! |---------------|-----------|--------------------------------|
//! | `skill`       | skill     | (empty)                        |
//! | `position`    | position  | required skills, `;`-separated |
//! | `applicant`   | applicant | capability spec, quoted        |
//! | `application` | applicant | position                       |
//! | `winner`      | position  | applicant                      |

mod parser;

use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use super::engine::HiringRegistry;
use super::error::RegistryError;
use parser::RosterRow;

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: unknown row kind '{kind}'")]
    UnknownRowKind { line: u64, kind: String },
    #[error("line {line}: {source}")]
    Registry {
        line: u64,
        #[source]
        source: RegistryError,
    },
}

/// Winner selected while replaying a roster, with the score the registry returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinnerRecord {
    pub position: String,
    pub applicant: String,
    pub score: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterSummary {
    pub rows_applied: usize,
    pub winners: Vec<WinnerRecord>,
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<HiringRegistry, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<HiringRegistry, RosterImportError> {
        let mut registry = HiringRegistry::new();
        Self::apply(reader, &mut registry)?;
        Ok(registry)
    }

    /// Applies rows in file order, stopping at the first failure. Earlier rows stay applied.
    pub fn apply<R: Read>(
        reader: R,
        registry: &mut HiringRegistry,
    ) -> Result<RosterSummary, RosterImportError> {
        let mut summary = RosterSummary::default();

        for row in parser::parse_rows(reader)? {
            apply_row(&row, registry, &mut summary)?;
            summary.rows_applied += 1;
            debug!(line = row.line, kind = %row.kind, name = %row.name, "roster row applied");
        }

        Ok(summary)
    }
}

fn apply_row(
    row: &RosterRow,
    registry: &mut HiringRegistry,
    summary: &mut RosterSummary,
) -> Result<(), RosterImportError> {
    let at_line = |source| RosterImportError::Registry {
        line: row.line,
        source,
    };

    match row.kind.as_str() {
        "skill" => registry.add_skills([row.name.as_str()]).map_err(at_line),
        "position" => registry
            .add_position(&row.name, parser::skill_list(&row.detail))
            .map_err(at_line),
        "applicant" => registry.add_applicant(&row.name, &row.detail).map_err(at_line),
        "application" => registry
            .enter_application(&row.name, &row.detail)
            .map_err(at_line),
        "winner" => {
            let score = registry.set_winner(&row.name, &row.detail).map_err(at_line)?;
            summary.winners.push(WinnerRecord {
                position: row.name.clone(),
                applicant: row.detail.clone(),
                score,
            });
            Ok(())
        }
        other => Err(RosterImportError::UnknownRowKind {
            line: row.line,
            kind: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const ROSTER: &str = "kind,name,detail\n\
skill,java,\n\
skill,sql,\n\
position,backend,java;sql\n\
applicant,alice,\"java:7,sql:6\"\n\
applicant,bob,java:3\n\
application,alice,backend\n\
winner,backend,alice\n";

    #[test]
    fn importer_replays_rows_in_order() {
        let mut registry = HiringRegistry::new();
        let summary =
            RosterImporter::apply(Cursor::new(ROSTER), &mut registry).expect("import succeeds");

        assert_eq!(summary.rows_applied, 7);
        assert_eq!(
            summary.winners,
            vec![WinnerRecord {
                position: "backend".to_string(),
                applicant: "alice".to_string(),
                score: 13,
            }]
        );
        let position = registry.position("backend").expect("position imported");
        assert_eq!(position.winner(), Some("alice"));
        assert_eq!(
            registry.capabilities("alice").expect("alice imported"),
            "java:7,sql:6"
        );
    }

    #[test]
    fn importer_accepts_rows_without_detail_column() {
        let csv = "kind,name,detail\nSkill,rust\napplicant,intern\n";
        let registry = RosterImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert!(registry.skill("rust").is_some());
        assert_eq!(registry.capabilities("intern").expect("intern imported"), "");
    }

    #[test]
    fn importer_reports_registry_failures_with_line() {
        let csv = "kind,name,detail\nskill,java,\nposition,backend,java;go\n";
        match RosterImporter::from_reader(Cursor::new(csv)) {
            Err(RosterImportError::Registry { line, source }) => {
                assert_eq!(line, 3);
                assert_eq!(
                    source,
                    RegistryError::UnknownSkill {
                        skill: "go".to_string()
                    }
                );
            }
            other => panic!("expected registry error, got {other:?}"),
        }
    }

    #[test]
    fn importer_rejects_unknown_row_kinds() {
        let csv = "kind,name,detail\nmanager,carol,\n";
        match RosterImporter::from_reader(Cursor::new(csv)) {
            Err(RosterImportError::UnknownRowKind { line, kind }) => {
                assert_eq!(line, 2);
                assert_eq!(kind, "manager");
            }
            other => panic!("expected unknown kind, got {other:?}"),
        }
    }

    #[test]
    fn importer_keeps_rows_applied_before_failure() {
        let csv = "kind,name,detail\nskill,java,\nskill,java,\n";
        let mut registry = HiringRegistry::new();
        let error = RosterImporter::apply(Cursor::new(csv), &mut registry)
            .expect_err("duplicate skill fails");
        assert!(matches!(error, RosterImportError::Registry { line: 3, .. }));
        assert!(registry.skill("java").is_some());
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        match RosterImporter::from_path("./does-not-exist.csv") {
            Err(RosterImportError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn skill_list_ignores_blank_entries() {
        assert_eq!(parser::skill_list(" java ; ;sql;"), vec!["java", "sql"]);
        assert!(parser::skill_list("").is_empty());
    }
}
