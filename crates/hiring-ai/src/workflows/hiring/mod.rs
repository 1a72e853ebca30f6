//! Candidate scoring, team selection, and hiring reports.
//!
//! Scoring and diversity are pure functions over the loaded [`CandidatePool`]. The only mutable
//! state is the [`TeamSelection`], which lives behind a [`SelectionRepository`] and is changed
//! exclusively through [`HiringService`].

pub mod diversity;
pub mod domain;
pub mod export;
pub mod report;
pub mod repository;
pub mod router;
pub mod salary;
pub mod scoring;
pub mod search;
pub mod selection;
pub mod service;

#[cfg(test)]
mod tests;

pub use diversity::{diversity, DiversityMetrics};
pub use domain::{
    Candidate, CandidatePool, Degree, Education, SalaryExpectation, WorkExperience, UNKNOWN_LABEL,
};
pub use export::write_team_csv;
pub use report::views::{
    CandidateCard, CandidateDetail, DashboardOverview, DistributionEntry, ReportMember,
    TeamMemberView, TeamView,
};
pub use report::HiringReport;
pub use repository::{RepositoryError, SelectionRepository};
pub use router::hiring_router;
pub use salary::{extract_salary, salary_display, SalaryCurrency};
pub use scoring::{
    score, CandidateScorer, EducationTier, Justification, ScoreBook, ScoreBreakdown,
    ScoreComponent, ScoreFactor, ScoreSignals,
};
pub use selection::{SelectionError, TeamSelection};
pub use service::{HiringService, HiringServiceError};
