use chrono::NaiveDate;
use hiring_ai::config::AppConfig;
use hiring_ai::error::AppError;
use hiring_ai::workflows::hiring::{
    CandidatePool, RepositoryError, SelectionRepository, TeamSelection,
};
use hiring_ai::workflows::intake::CandidateImporter;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local selection store; the team lives as long as the server or CLI run.
#[derive(Default, Clone)]
pub(crate) struct InMemorySelectionRepository {
    selection: Arc<Mutex<Option<TeamSelection>>>,
}

impl SelectionRepository for InMemorySelectionRepository {
    fn load(&self) -> Result<Option<TeamSelection>, RepositoryError> {
        let guard = self
            .selection
            .lock()
            .map_err(|_| RepositoryError::Unavailable("selection mutex poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn store(&self, selection: TeamSelection) -> Result<(), RepositoryError> {
        let mut guard = self
            .selection
            .lock()
            .map_err(|_| RepositoryError::Unavailable("selection mutex poisoned".to_string()))?;
        *guard = Some(selection);
        Ok(())
    }
}

/// Loads configuration, letting `--candidates` win over `APP_CANDIDATES_PATH`.
pub(crate) fn load_config(candidates: Option<PathBuf>) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = candidates {
        config.hiring.candidates_path = path;
    }
    Ok(config)
}

pub(crate) fn load_pool(config: &AppConfig) -> Result<CandidatePool, AppError> {
    CandidateImporter::from_path(&config.hiring.candidates_path).map_err(AppError::from)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_round_trips_selection() {
        let repository = InMemorySelectionRepository::default();
        assert!(repository.load().expect("load").is_none());

        let mut selection = TeamSelection::new(2);
        selection.select("Alex Johnson").expect("seat");
        repository.store(selection.clone()).expect("store");

        assert_eq!(repository.load().expect("load"), Some(selection));
    }

    #[test]
    fn parse_date_reports_bad_input() {
        assert_eq!(
            parse_date(" 2026-03-02 "),
            Ok(NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date"))
        );
        let err = parse_date("03/02/2026").expect_err("wrong format");
        assert!(err.contains("YYYY-MM-DD"));
    }
}
