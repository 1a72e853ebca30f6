use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Bucket used when an applicant leaves a grouping field (location, education) blank.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Applicant record after intake has resolved every optional field to a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "annual_salary_expectation", default)]
    pub salary_expectation: SalaryExpectation,
    #[serde(default)]
    pub work_experiences: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Education,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Candidate {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            location: None,
            salary_expectation: SalaryExpectation::default(),
            work_experiences: Vec::new(),
            education: Education::default(),
            skills: Vec::new(),
        }
    }

    /// Location label used for grouping; blank or missing values share one bucket.
    pub fn location_label(&self) -> &str {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(UNKNOWN_LABEL)
    }

    pub fn most_recent_experience(&self) -> Option<&WorkExperience> {
        self.work_experiences.first()
    }
}

/// Salary expectations keyed by engagement type. Only full-time is collected today.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryExpectation {
    #[serde(rename = "full-time", default, skip_serializing_if = "Option::is_none")]
    pub full_time: Option<String>,
}

impl SalaryExpectation {
    pub fn full_time(amount: impl Into<String>) -> Self {
        Self {
            full_time: Some(amount.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(default)]
    pub company: String,
    #[serde(rename = "roleName", default)]
    pub role_name: String,
}

impl WorkExperience {
    pub fn new(company: impl Into<String>, role_name: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            role_name: role_name.into(),
        }
    }

    pub fn headline(&self) -> String {
        let role = non_empty_or(&self.role_name, "N/A");
        let company = non_empty_or(&self.company, "N/A");
        format!("{role} at {company}")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_level: Option<String>,
    #[serde(default)]
    pub degrees: Vec<Degree>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub school: String,
    #[serde(rename = "isTop50", default)]
    pub is_top50: bool,
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

/// The loaded applicant batch, in source order, indexed by name.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
    index: HashMap<String, usize>,
}

impl CandidatePool {
    /// Builds a pool, keeping the first record for any repeated name.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        let mut kept = Vec::with_capacity(candidates.len());
        let mut index = HashMap::with_capacity(candidates.len());

        for candidate in candidates {
            if index.contains_key(&candidate.name) {
                warn!(name = %candidate.name, "dropping duplicate candidate record");
                continue;
            }
            index.insert(candidate.name.clone(), kept.len());
            kept.push(candidate);
        }

        Self {
            candidates: kept,
            index,
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn get(&self, name: &str) -> Option<&Candidate> {
        self.position(name).map(|idx| &self.candidates[idx])
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
