use super::super::diversity::{diversity, DiversityMetrics};
use super::super::domain::CandidatePool;
use super::super::salary::{currency_of, extract_salary, salary_display, SalaryCurrency};
use super::super::scoring::{CandidateScorer, ScoreBook};
use super::super::selection::TeamSelection;
use super::dashboard::average_score;
use super::views::ReportMember;
use chrono::NaiveDate;
use serde::Serialize;

const STRATEGIC_RATIONALE: [&str; 5] = [
    "Technical Excellence: Strong engineering and development capabilities",
    "Leadership Experience: Proven track record in senior roles",
    "Educational Foundation: Mix of advanced degrees and practical experience",
    "Global Perspective: Diverse geographic representation",
    "Scalable Skillset: Skills that align with long-term growth ambitions",
];

const NEXT_STEPS: [&str; 4] = [
    "Send offer letters to selected candidates",
    "Schedule onboarding calls",
    "Prepare equity packages",
    "Plan first team meeting",
];

/// Final hiring report for the selected team.
#[derive(Debug, Clone, Serialize)]
pub struct HiringReport {
    pub generated_on: NaiveDate,
    pub team_size: usize,
    pub capacity: usize,
    pub members: Vec<ReportMember>,
    pub total_budget: u64,
    pub average_salary: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score: Option<u8>,
    pub diversity: DiversityMetrics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub non_usd_members: Vec<String>,
    pub strategic_rationale: Vec<&'static str>,
    pub next_steps: Vec<&'static str>,
}

impl HiringReport {
    pub fn build(
        pool: &CandidatePool,
        scores: &ScoreBook,
        selection: &TeamSelection,
        generated_on: NaiveDate,
    ) -> Self {
        let scorer = CandidateScorer;
        let mut members = Vec::with_capacity(selection.len());
        let mut non_usd_members = Vec::new();

        for (idx, name) in selection.members().iter().enumerate() {
            let Some(candidate) = pool.get(name) else {
                continue;
            };

            let breakdown = match scores.get(name) {
                Some(breakdown) => breakdown.clone(),
                None => scorer.evaluate(candidate),
            };

            let currency = currency_of(
                &candidate.salary_expectation,
                candidate.location.as_deref(),
            );
            if currency == SalaryCurrency::Other {
                non_usd_members.push(candidate.name.clone());
            }

            members.push(ReportMember {
                position: idx + 1,
                name: candidate.name.clone(),
                score: breakdown.total,
                salary: salary_display(candidate),
                annual_salary: extract_salary(&candidate.salary_expectation),
                currency,
                justifications: breakdown
                    .justifications
                    .iter()
                    .map(|reason| reason.summary())
                    .collect(),
            });
        }

        let total_budget = members
            .iter()
            .fold(0u64, |total, member| total.saturating_add(member.annual_salary));
        let average_salary = if members.is_empty() {
            0
        } else {
            total_budget / members.len() as u64
        };
        let average_score = average_score(members.iter().map(|member| member.score));

        Self {
            generated_on,
            team_size: members.len(),
            capacity: selection.capacity(),
            members,
            total_budget,
            average_salary,
            average_score,
            diversity: diversity(pool.candidates(), selection.members()),
            non_usd_members,
            strategic_rationale: STRATEGIC_RATIONALE.to_vec(),
            next_steps: NEXT_STEPS.to_vec(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.team_size >= self.capacity
    }
}
