use super::domain::Candidate;

/// Case-insensitive match of `query` against name, skills, and work history.
///
/// A blank query matches every candidate.
pub fn matches(candidate: &Candidate, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    contains(&candidate.name)
        || candidate.skills.iter().any(|skill| contains(skill))
        || candidate
            .work_experiences
            .iter()
            .any(|experience| contains(&experience.company) || contains(&experience.role_name))
}

pub fn filter<'a>(candidates: &'a [Candidate], query: Option<&str>) -> Vec<&'a Candidate> {
    match query {
        Some(query) => candidates
            .iter()
            .filter(|candidate| matches(candidate, query))
            .collect(),
        None => candidates.iter().collect(),
    }
}
