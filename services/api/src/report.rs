use clap::Args;
use hiring_registry::error::AppError;
use hiring_registry::registry::{
    HiringRegistry, PositionView, RosterImporter, RosterSummary, SkillApplicantCount,
    WinnerRecord,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RosterReportArgs {
    /// Roster CSV with a `kind,name,detail` header
    pub(crate) path: PathBuf,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct RosterReport {
    pub(crate) rows_applied: usize,
    pub(crate) positions: Vec<PositionView>,
    pub(crate) winners: Vec<WinnerRecord>,
    pub(crate) skill_applicants: Vec<SkillApplicantCount>,
    pub(crate) max_position: Option<String>,
}

pub(crate) fn run_roster_report(args: RosterReportArgs) -> Result<(), AppError> {
    let RosterReportArgs { path, json } = args;

    let mut registry = HiringRegistry::new();
    let file = std::fs::File::open(&path)?;
    let summary = RosterImporter::apply(file, &mut registry)?;
    let report = build_report(&registry, summary);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&path, &report);
    }

    Ok(())
}

pub(crate) fn build_report(registry: &HiringRegistry, summary: RosterSummary) -> RosterReport {
    RosterReport {
        rows_applied: summary.rows_applied,
        positions: registry.positions().map(|position| position.view()).collect(),
        winners: summary.winners,
        skill_applicants: registry.skill_applicant_counts(),
        max_position: registry.max_position().map(str::to_string),
    }
}

fn render_report(path: &std::path::Path, report: &RosterReport) {
    println!(
        "Hiring roster {} ({} rows applied)",
        path.display(),
        report.rows_applied
    );

    println!("\nPositions");
    if report.positions.is_empty() {
        println!("- none registered");
    }
    for position in &report.positions {
        println!(
            "- {} requires [{}] (threshold > {})",
            position.name,
            position.required_skills.join(", "),
            position.winning_threshold
        );
        println!(
            "  applicants: {}",
            if position.applicants.is_empty() {
                "none".to_string()
            } else {
                position.applicants.join(", ")
            }
        );
        match &position.winner {
            Some(winner) => println!("  winner: {winner}"),
            None => println!("  winner: open"),
        }
    }

    if !report.winners.is_empty() {
        println!("\nWinners selected");
        for winner in &report.winners {
            println!(
                "- {} -> {} (score {})",
                winner.position, winner.applicant, winner.score
            );
        }
    }

    println!("\nApplicants per skill");
    for entry in &report.skill_applicants {
        println!("- {}: {}", entry.skill, entry.applicants);
    }

    match &report.max_position {
        Some(position) => println!("\nMost applied position: {position}"),
        None => println!("\nMost applied position: none"),
    }
}
