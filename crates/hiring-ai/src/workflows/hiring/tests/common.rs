use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::hiring::domain::{
    Candidate, CandidatePool, Degree, Education, SalaryExpectation, WorkExperience,
};
use crate::workflows::hiring::repository::{RepositoryError, SelectionRepository};
use crate::workflows::hiring::selection::TeamSelection;
use crate::workflows::hiring::{hiring_router, HiringService};

pub(super) const TEAM_SIZE: usize = 5;

pub(super) fn education(level: &str, top_schools: usize) -> Education {
    Education {
        highest_level: Some(level.to_string()),
        degrees: (0..top_schools.max(1))
            .map(|idx| Degree {
                subject: "Computer Science".to_string(),
                school: format!("University {idx}"),
                is_top50: idx < top_schools,
            })
            .collect(),
    }
}

pub(super) fn skills(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn roles(titles: &[&str]) -> Vec<WorkExperience> {
    titles
        .iter()
        .enumerate()
        .map(|(idx, title)| WorkExperience::new(format!("Company {idx}"), *title))
        .collect()
}

/// Master's graduate of a top-50 school with three roles, one senior, and five skills.
pub(super) fn alex() -> Candidate {
    let mut candidate = Candidate::named("Alex Johnson");
    candidate.email = Some("alex.johnson@example.com".to_string());
    candidate.location = Some("San Francisco".to_string());
    candidate.salary_expectation = SalaryExpectation::full_time("$120,000");
    candidate.education = education("Master's Degree", 1);
    candidate.work_experiences = vec![
        WorkExperience::new("Stripe", "Senior Software Engineer"),
        WorkExperience::new("Dropbox", "Software Engineer"),
        WorkExperience::new("Intuit", "Software Engineer Intern"),
    ];
    candidate.skills = skills(&["Python", "AWS", "Docker", "SQL", "React"]);
    candidate
}

pub(super) fn priya() -> Candidate {
    let mut candidate = Candidate::named("Priya Raman");
    candidate.location = Some("Bangalore, India".to_string());
    candidate.salary_expectation = SalaryExpectation::full_time("₹15,00,000");
    candidate.education = Education {
        highest_level: Some("PhD".to_string()),
        degrees: Vec::new(),
    };
    candidate.work_experiences = vec![
        WorkExperience::new("Infosys", "Lead Data Scientist"),
        WorkExperience::new("TCS", "Data Analyst"),
    ];
    candidate.skills = skills(&["Machine Learning", "TensorFlow", "Python"]);
    candidate
}

pub(super) fn sarah() -> Candidate {
    let mut candidate = Candidate::named("Sarah Chen");
    candidate.location = Some("New York".to_string());
    candidate.salary_expectation = SalaryExpectation::full_time("$95000");
    candidate.education = Education {
        highest_level: Some("Bachelor's Degree".to_string()),
        degrees: Vec::new(),
    };
    candidate.work_experiences = vec![WorkExperience::new("Uber", "Senior Product Manager")];
    candidate.skills = skills(&["Product Strategy", "A/B Testing"]);
    candidate
}

pub(super) fn marcus() -> Candidate {
    let mut candidate = Candidate::named("Marcus Silva");
    candidate.education = Education {
        highest_level: Some("Associate Degree".to_string()),
        degrees: Vec::new(),
    };
    candidate
}

pub(super) fn lena() -> Candidate {
    let mut candidate = Candidate::named("Lena Fischer");
    candidate.location = Some("Berlin".to_string());
    candidate.salary_expectation = SalaryExpectation::full_time("€70,000");
    candidate.education = Education {
        highest_level: Some("Master's Degree".to_string()),
        degrees: Vec::new(),
    };
    candidate.work_experiences = vec![WorkExperience::new("SAP", "Engineer")];
    candidate.skills = skills(&["Rust", "Kubernetes"]);
    candidate
}

pub(super) fn tom() -> Candidate {
    Candidate::named("Tom Baker")
}

pub(super) fn pool() -> CandidatePool {
    CandidatePool::new(vec![alex(), priya(), sarah(), marcus(), lena(), tom()])
}

pub(super) fn names(values: &[&str]) -> Vec<String> {
    skills(values)
}

pub(super) fn build_service() -> (HiringService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = HiringService::new(pool(), repository.clone(), TEAM_SIZE);
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) selection: Arc<Mutex<Option<TeamSelection>>>,
}

impl MemoryRepository {
    pub(super) fn stored(&self) -> Option<TeamSelection> {
        self.selection
            .lock()
            .expect("repository mutex poisoned")
            .clone()
    }
}

impl SelectionRepository for MemoryRepository {
    fn load(&self) -> Result<Option<TeamSelection>, RepositoryError> {
        Ok(self.stored())
    }

    fn store(&self, selection: TeamSelection) -> Result<(), RepositoryError> {
        *self.selection.lock().expect("repository mutex poisoned") = Some(selection);
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl SelectionRepository for UnavailableRepository {
    fn load(&self) -> Result<Option<TeamSelection>, RepositoryError> {
        Err(RepositoryError::Unavailable("session store offline".to_string()))
    }

    fn store(&self, _selection: TeamSelection) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("session store offline".to_string()))
    }
}

pub(super) fn hiring_router_with_service(service: HiringService<MemoryRepository>) -> axum::Router {
    hiring_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
