use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use super::domain::Candidate;

/// Spread of the selected group across locations and skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiversityMetrics {
    pub geographic_diversity: usize,
    pub skill_diversity: usize,
    pub unique_locations: Vec<String>,
    pub unique_skills: Vec<String>,
}

/// Computes diversity for the named subset of `candidates`.
///
/// Values are compared after trimming and case folding, and the first spelling
/// seen is the one reported. Missing locations count as the shared "Unknown"
/// bucket. Names without a matching record are skipped; when a name appears on
/// several records the first one is used.
pub fn diversity(candidates: &[Candidate], names: &[String]) -> DiversityMetrics {
    if names.is_empty() {
        return DiversityMetrics::default();
    }

    let mut by_name: HashMap<&str, &Candidate> = HashMap::with_capacity(candidates.len());
    for candidate in candidates {
        by_name.entry(candidate.name.as_str()).or_insert(candidate);
    }

    let mut seen_names = HashSet::new();
    let mut locations = DistinctValues::default();
    let mut skills = DistinctValues::default();

    for name in names {
        if !seen_names.insert(name.as_str()) {
            continue;
        }
        let Some(candidate) = by_name.get(name.as_str()) else {
            debug!(%name, "selected name has no candidate record; skipping");
            continue;
        };

        locations.insert(candidate.location_label());
        for skill in &candidate.skills {
            skills.insert(skill);
        }
    }

    DiversityMetrics {
        geographic_diversity: locations.len(),
        skill_diversity: skills.len(),
        unique_locations: locations.into_values(),
        unique_skills: skills.into_values(),
    }
}

#[derive(Default)]
struct DistinctValues {
    keys: HashSet<String>,
    values: Vec<String>,
}

impl DistinctValues {
    fn insert(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }
        if self.keys.insert(trimmed.to_lowercase()) {
            self.values.push(trimmed.to_string());
        }
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn into_values(self) -> Vec<String> {
        self.values
    }
}
