mod normalizer;
mod parser;

use crate::workflows::hiring::domain::CandidatePool;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug)]
pub enum CandidateImportError {
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
}

impl std::fmt::Display for CandidateImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandidateImportError::Open { path, source } => write!(
                f,
                "failed to open applicant data '{}': {}",
                path.display(),
                source
            ),
            CandidateImportError::Json(err) => {
                write!(f, "applicant data is not a JSON array of records: {}", err)
            }
        }
    }
}

impl std::error::Error for CandidateImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CandidateImportError::Open { source, .. } => Some(source),
            CandidateImportError::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for CandidateImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Loads `form-submissions.json` style exports into a [`CandidatePool`].
pub struct CandidateImporter;

impl CandidateImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<CandidatePool, CandidateImportError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CandidateImportError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loading applicant data");
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<CandidatePool, CandidateImportError> {
        let batch = parser::parse_candidates(reader)?;
        if batch.skipped > 0 {
            warn!(skipped = batch.skipped, "some applicant rows were unusable");
        }

        let pool = CandidatePool::new(batch.candidates);
        info!(candidates = pool.len(), "applicant data loaded");
        Ok(pool)
    }
}
