use crate::demo::{
    run_candidate_show, run_candidates_list, run_dashboard, run_demo, run_team_report, DemoArgs,
    ListArgs, ShowArgs, TeamReportArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hiring_ai::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Hiring Dashboard",
    about = "Score applicants, assemble a team, and report on it from the command line",
    version
)]
struct Cli {
    /// Applicant submissions file (JSON array). Overrides APP_CANDIDATES_PATH.
    #[arg(long, global = true)]
    candidates: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Browse the applicant pool
    Candidates {
        #[command(subcommand)]
        command: CandidatesCommand,
    },
    /// Build a team and produce the final hiring report
    Team {
        #[command(subcommand)]
        command: TeamCommand,
    },
    /// Print headline numbers for the applicant pool
    Dashboard,
    /// Walk through scoring, team selection, and reporting on sample data
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CandidatesCommand {
    /// List candidates with their scores, optionally filtered by a search query
    List(ListArgs),
    /// Show the score breakdown for one candidate
    Show(ShowArgs),
}

#[derive(Subcommand, Debug)]
enum TeamCommand {
    /// Select candidates and print the final hiring report
    Report(TeamReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let candidates = cli.candidates;
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args, candidates).await,
        Command::Candidates {
            command: CandidatesCommand::List(args),
        } => run_candidates_list(candidates, args),
        Command::Candidates {
            command: CandidatesCommand::Show(args),
        } => run_candidate_show(candidates, args),
        Command::Team {
            command: TeamCommand::Report(args),
        } => run_team_report(candidates, args),
        Command::Dashboard => run_dashboard(candidates),
        Command::Demo(args) => run_demo(candidates, args),
    }
}
