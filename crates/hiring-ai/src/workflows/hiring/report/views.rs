use super::super::diversity::DiversityMetrics;
use super::super::domain::Candidate;
use super::super::salary::SalaryCurrency;
use super::super::scoring::ScoreBreakdown;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CandidateCard {
    pub name: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    pub top_skills: Vec<String>,
    pub score: u8,
    pub salary: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateDetail {
    pub candidate: Candidate,
    pub breakdown: ScoreBreakdown,
    pub salary: String,
    pub selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_position: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMemberView {
    pub position: usize,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub location: String,
    pub experiences: Vec<String>,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    pub salary: String,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamView {
    pub filled: usize,
    pub capacity: usize,
    pub remaining_slots: usize,
    pub members: Vec<TeamMemberView>,
    pub diversity: DiversityMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionEntry {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    pub total_applicants: usize,
    pub average_salary_expectation: u64,
    pub selected: usize,
    pub remaining_slots: usize,
    pub team_size: usize,
    pub education_distribution: Vec<DistributionEntry>,
    pub top_locations: Vec<DistributionEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMember {
    pub position: usize,
    pub name: String,
    pub score: u8,
    pub salary: String,
    pub annual_salary: u64,
    pub currency: SalaryCurrency,
    pub justifications: Vec<String>,
}
