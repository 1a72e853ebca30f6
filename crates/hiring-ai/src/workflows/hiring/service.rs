use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use tracing::{debug, info};

use super::domain::CandidatePool;
use super::report::views::{CandidateCard, CandidateDetail, DashboardOverview, TeamView};
use super::report::{candidate_cards, dashboard_overview, team_view, HiringReport};
use super::repository::{RepositoryError, SelectionRepository};
use super::salary::salary_display;
use super::scoring::ScoreBook;
use super::selection::{SelectionError, TeamSelection};

/// Service composing the loaded candidate pool, memoised scores, and the selection store.
pub struct HiringService<R> {
    pool: Arc<CandidatePool>,
    scores: Arc<ScoreBook>,
    repository: Arc<R>,
    team_size: usize,
    write_lock: Mutex<()>,
}

impl<R> HiringService<R>
where
    R: SelectionRepository + 'static,
{
    pub fn new(pool: CandidatePool, repository: Arc<R>, team_size: usize) -> Self {
        let scores = ScoreBook::for_pool(&pool);
        info!(candidates = pool.len(), team_size, "hiring service initialised");

        Self {
            pool: Arc::new(pool),
            scores: Arc::new(scores),
            repository,
            team_size,
            write_lock: Mutex::new(()),
        }
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    pub fn team_size(&self) -> usize {
        self.team_size
    }

    /// Candidate cards in source order, optionally narrowed by a search query.
    pub fn candidates(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<CandidateCard>, HiringServiceError> {
        let selection = self.selection()?;
        Ok(candidate_cards(&self.pool, &self.scores, &selection, query))
    }

    pub fn candidate(&self, name: &str) -> Result<CandidateDetail, HiringServiceError> {
        let candidate = self
            .pool
            .get(name)
            .ok_or_else(|| HiringServiceError::UnknownCandidate(name.to_string()))?;
        let breakdown = self
            .scores
            .get(name)
            .cloned()
            .ok_or_else(|| HiringServiceError::UnknownCandidate(name.to_string()))?;
        let selection = self.selection()?;

        Ok(CandidateDetail {
            candidate: candidate.clone(),
            breakdown,
            salary: salary_display(candidate),
            selected: selection.contains(name),
            team_position: selection.position(name),
        })
    }

    /// Add a candidate to the team, returning the updated team composition.
    pub fn select(&self, name: &str) -> Result<TeamView, HiringServiceError> {
        if !self.pool.contains(name) {
            return Err(HiringServiceError::UnknownCandidate(name.to_string()));
        }

        let selection = self.modify(|selection| selection.select(name))?;
        info!(
            %name,
            filled = selection.len(),
            capacity = selection.capacity(),
            "candidate selected"
        );
        Ok(team_view(&self.pool, &self.scores, &selection))
    }

    pub fn remove(&self, name: &str) -> Result<TeamView, HiringServiceError> {
        let selection = self.modify(|selection| selection.remove(name))?;
        info!(%name, filled = selection.len(), "candidate removed from team");
        Ok(team_view(&self.pool, &self.scores, &selection))
    }

    pub fn team(&self) -> Result<TeamView, HiringServiceError> {
        let selection = self.selection()?;
        Ok(team_view(&self.pool, &self.scores, &selection))
    }

    pub fn dashboard(&self) -> Result<DashboardOverview, HiringServiceError> {
        let selection = self.selection()?;
        Ok(dashboard_overview(&self.pool, &selection))
    }

    /// Build the final hiring report. Requires at least one selected candidate.
    pub fn report(&self, generated_on: NaiveDate) -> Result<HiringReport, HiringServiceError> {
        let selection = self.selection()?;
        if selection.is_empty() {
            return Err(HiringServiceError::EmptyTeam);
        }

        let report = HiringReport::build(&self.pool, &self.scores, &selection, generated_on);
        debug!(
            members = report.team_size,
            total_budget = report.total_budget,
            "hiring report generated"
        );
        Ok(report)
    }

    pub fn selection(&self) -> Result<TeamSelection, HiringServiceError> {
        let stored = self.repository.load()?;
        Ok(stored.unwrap_or_else(|| TeamSelection::new(self.team_size)))
    }

    fn modify<F>(&self, apply: F) -> Result<TeamSelection, HiringServiceError>
    where
        F: FnOnce(&mut TeamSelection) -> Result<(), SelectionError>,
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| RepositoryError::Unavailable("selection lock poisoned".to_string()))?;

        let mut selection = self.selection()?;
        apply(&mut selection)?;
        self.repository.store(selection.clone())?;
        Ok(selection)
    }
}

/// Error raised by the hiring service.
#[derive(Debug, thiserror::Error)]
pub enum HiringServiceError {
    #[error("no candidate named '{0}'")]
    UnknownCandidate(String),
    #[error("no candidates selected yet")]
    EmptyTeam,
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
