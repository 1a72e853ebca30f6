use crate::infra::{load_config, load_pool, parse_date, InMemorySelectionRepository};
use chrono::{Local, NaiveDate};
use clap::Args;
use hiring_ai::error::AppError;
use hiring_ai::telemetry::{self, LogSink};
use hiring_ai::workflows::hiring::salary::format_usd;
use hiring_ai::workflows::hiring::{
    write_team_csv, CandidateCard, CandidateDetail, DashboardOverview, HiringReport,
    HiringService, TeamView,
};
use hiring_ai::workflows::intake::CandidateImporter;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

const SAMPLE_SUBMISSIONS: &str =
    include_str!("../../../crates/hiring-ai/form-submissions.sample.json");

type CliService = HiringService<InMemorySelectionRepository>;

#[derive(Args, Debug, Default)]
pub(crate) struct ListArgs {
    /// Only show candidates whose name, skills, or work history match
    #[arg(long, short)]
    pub(crate) query: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    /// Candidate name, exactly as submitted
    pub(crate) name: String,
}

#[derive(Args, Debug)]
pub(crate) struct TeamReportArgs {
    /// Candidate to seat on the team; repeat in seat order
    #[arg(long = "select", value_name = "NAME", required = true)]
    pub(crate) select: Vec<String>,
    /// Report date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the markdown narrative instead of the summary
    #[arg(long)]
    pub(crate) markdown: bool,
    /// Also write the selected team to a CSV file
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Report date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Also write the demo team to a CSV file
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

fn cli_service(candidates: Option<PathBuf>) -> Result<CliService, AppError> {
    let config = load_config(candidates)?;
    telemetry::init_with_sink(&config.telemetry, LogSink::Stderr)?;
    let pool = load_pool(&config)?;
    Ok(HiringService::new(
        pool,
        Arc::new(InMemorySelectionRepository::default()),
        config.hiring.team_size,
    ))
}

pub(crate) fn run_candidates_list(
    candidates: Option<PathBuf>,
    args: ListArgs,
) -> Result<(), AppError> {
    let service = cli_service(candidates)?;
    let cards = service.candidates(args.query.as_deref())?;
    render_cards(&cards);
    Ok(())
}

pub(crate) fn run_candidate_show(
    candidates: Option<PathBuf>,
    args: ShowArgs,
) -> Result<(), AppError> {
    let service = cli_service(candidates)?;
    let detail = service.candidate(&args.name)?;
    render_detail(&detail);
    Ok(())
}

pub(crate) fn run_dashboard(candidates: Option<PathBuf>) -> Result<(), AppError> {
    let service = cli_service(candidates)?;
    let overview = service.dashboard()?;
    render_dashboard(&overview);
    Ok(())
}

pub(crate) fn run_team_report(
    candidates: Option<PathBuf>,
    args: TeamReportArgs,
) -> Result<(), AppError> {
    let TeamReportArgs {
        select,
        today,
        markdown,
        csv,
    } = args;

    let service = cli_service(candidates)?;
    for name in &select {
        service.select(name)?;
    }

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let report = service.report(today)?;

    if markdown {
        print!("{}", report.to_markdown());
    } else {
        let team = service.team()?;
        render_team(&team);
        render_report_summary(&report);
    }

    if let Some(path) = csv {
        export_csv(&path, &report)?;
    }

    Ok(())
}

pub(crate) fn run_demo(candidates: Option<PathBuf>, args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { today, csv } = args;

    let config = load_config(candidates.clone())?;
    telemetry::init_with_sink(&config.telemetry, LogSink::Stderr)?;
    let (pool, source) = match candidates {
        Some(path) => (load_pool(&config)?, path.display().to_string()),
        None => (
            CandidateImporter::from_reader(SAMPLE_SUBMISSIONS.as_bytes())?,
            "bundled sample submissions".to_string(),
        ),
    };
    let service = HiringService::new(
        pool,
        Arc::new(InMemorySelectionRepository::default()),
        config.hiring.team_size,
    );

    println!("Hiring dashboard demo");
    println!("Data source: {source}");

    println!("\nDashboard");
    render_dashboard(&service.dashboard()?);

    let cards = service.candidates(None)?;
    println!("\nCandidate pool");
    render_cards(&cards);

    let picks = top_candidates(&cards, service.team_size());
    if picks.is_empty() {
        println!("\nNo candidates to seat.");
        return Ok(());
    }
    for name in &picks {
        service.select(name)?;
    }
    info!(seated = picks.len(), "demo team assembled from top scores");

    println!("\nHighest scoring team");
    render_team(&service.team()?);

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let report = service.report(today)?;
    println!();
    print!("{}", report.to_markdown());

    if let Some(path) = csv {
        export_csv(&path, &report)?;
    }

    Ok(())
}

/// Names of the best scoring candidates, ties kept in source order.
pub(crate) fn top_candidates(cards: &[CandidateCard], seats: usize) -> Vec<String> {
    let mut ranked: Vec<&CandidateCard> = cards.iter().collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
        .into_iter()
        .take(seats)
        .map(|card| card.name.clone())
        .collect()
}

fn export_csv(path: &Path, report: &HiringReport) -> Result<(), AppError> {
    let file = File::create(path)?;
    write_team_csv(BufWriter::new(file), report)?;
    println!("\nTeam CSV written to {}", path.display());
    Ok(())
}

fn render_cards(cards: &[CandidateCard]) {
    println!("{} candidate(s)", cards.len());
    for card in cards {
        let marker = if card.selected { " [selected]" } else { "" };
        println!(
            "- {}{} | score {}/100 | {} | {}",
            card.name, marker, card.score, card.location, card.salary
        );
        if let Some(headline) = &card.headline {
            println!("    {headline}");
        }
        if !card.top_skills.is_empty() {
            println!("    Skills: {}", card.top_skills.join(", "));
        }
    }
}

fn render_detail(detail: &CandidateDetail) {
    let candidate = &detail.candidate;
    println!("{}", candidate.name);
    println!("Location: {}", candidate.location_label());
    if let Some(email) = &candidate.email {
        println!("Email: {email}");
    }
    println!("Salary expectation: {}", detail.salary);
    match detail.team_position {
        Some(position) => println!("Team: seat {position}"),
        None => println!("Team: not selected"),
    }

    println!("\nScore {}/100", detail.breakdown.total);
    for component in &detail.breakdown.components {
        println!(
            "- {}: {} ({})",
            component.factor.label(),
            component.points,
            component.notes
        );
    }

    if !detail.breakdown.justifications.is_empty() {
        println!("\nStrengths");
        for reason in &detail.breakdown.justifications {
            println!("- {}", reason.summary());
        }
    }

    if !candidate.work_experiences.is_empty() {
        println!("\nExperience");
        for experience in &candidate.work_experiences {
            println!("- {}", experience.headline());
        }
    }
}

fn render_dashboard(overview: &DashboardOverview) {
    println!("- Total applicants: {}", overview.total_applicants);
    println!(
        "- Average salary expectation: {}",
        format_usd(overview.average_salary_expectation)
    );
    println!(
        "- Selected for team: {} of {} ({} remaining)",
        overview.selected, overview.team_size, overview.remaining_slots
    );

    if !overview.education_distribution.is_empty() {
        println!("Education");
        for entry in &overview.education_distribution {
            println!("  - {}: {}", entry.label, entry.count);
        }
    }
    if !overview.top_locations.is_empty() {
        println!("Top locations");
        for entry in &overview.top_locations {
            println!("  - {}: {}", entry.label, entry.count);
        }
    }
}

fn render_team(team: &TeamView) {
    println!(
        "Team {}/{} ({} open)",
        team.filled, team.capacity, team.remaining_slots
    );
    for member in &team.members {
        println!(
            "{}. {} | score {}/100 | {} | {}",
            member.position, member.name, member.score, member.location, member.salary
        );
        for experience in &member.experiences {
            println!("    {experience}");
        }
    }
    println!(
        "Geographic diversity: {} | Skill diversity: {}",
        team.diversity.geographic_diversity, team.diversity.skill_diversity
    );
    if let Some(score) = team.average_score {
        println!("Average team score: {score}/100");
    }
}

fn render_report_summary(report: &HiringReport) {
    println!("\nFinal hiring report ({})", report.generated_on);
    println!("- Team size: {} of {}", report.team_size, report.capacity);
    println!("- Total annual budget: {}", format_usd(report.total_budget));
    println!("- Average salary: {}", format_usd(report.average_salary));
    if !report.non_usd_members.is_empty() {
        println!(
            "- Non-USD expectations (summed as recorded): {}",
            report.non_usd_members.join(", ")
        );
    }
    for member in &report.members {
        let reasons = if member.justifications.is_empty() {
            "overall fit".to_string()
        } else {
            member.justifications.join(", ")
        };
        println!("  {}. {}: {}", member.position, member.name, reasons);
    }
}
