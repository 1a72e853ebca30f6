use super::selection::TeamSelection;

/// Storage abstraction for the current team selection so the service can be exercised in isolation.
pub trait SelectionRepository: Send + Sync {
    /// Current selection, or `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<TeamSelection>, RepositoryError>;
    fn store(&self, selection: TeamSelection) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("selection store unavailable: {0}")]
    Unavailable(String),
}
