use crate::report::{run_roster_report, RosterReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hiring_registry::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Hiring Registry",
    about = "Serve or inspect the skill, position, and applicant registry",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Import a roster CSV and print positions, winners, and statistics
    Roster(RosterReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Roster CSV to seed the registry with (overrides APP_ROSTER_PATH)
    #[arg(long)]
    pub(crate) roster: Option<std::path::PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Roster(args) => run_roster_report(args),
    }
}
