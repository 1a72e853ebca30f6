use std::collections::HashMap;

use super::super::diversity::diversity;
use super::super::domain::{CandidatePool, UNKNOWN_LABEL};
use super::super::salary::{extract_salary, salary_display};
use super::super::scoring::ScoreBook;
use super::super::search;
use super::super::selection::TeamSelection;
use super::views::{CandidateCard, DashboardOverview, DistributionEntry, TeamMemberView, TeamView};

const TOP_LOCATION_LIMIT: usize = 10;
const CARD_SKILL_LIMIT: usize = 5;
const TEAM_EXPERIENCE_LIMIT: usize = 3;

pub(crate) fn dashboard_overview(
    pool: &CandidatePool,
    selection: &TeamSelection,
) -> DashboardOverview {
    let candidates = pool.candidates();

    let average_salary_expectation = if candidates.is_empty() {
        0
    } else {
        let total: u128 = candidates
            .iter()
            .map(|candidate| u128::from(extract_salary(&candidate.salary_expectation)))
            .sum();
        (total / candidates.len() as u128).min(u128::from(u64::MAX)) as u64
    };

    let education_distribution = distribution(candidates.iter().map(|candidate| {
        candidate
            .education
            .highest_level
            .as_deref()
            .map(str::trim)
            .filter(|level| !level.is_empty())
            .unwrap_or(UNKNOWN_LABEL)
    }));

    let mut top_locations =
        distribution(candidates.iter().map(|candidate| candidate.location_label()));
    top_locations.truncate(TOP_LOCATION_LIMIT);

    DashboardOverview {
        total_applicants: candidates.len(),
        average_salary_expectation,
        selected: selection.len(),
        remaining_slots: selection.remaining_slots(),
        team_size: selection.capacity(),
        education_distribution,
        top_locations,
    }
}

/// Counts labels, most common first, ties broken alphabetically.
fn distribution<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<DistributionEntry> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }

    let mut entries: Vec<DistributionEntry> = counts
        .into_iter()
        .map(|(label, count)| DistributionEntry {
            label: label.to_string(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    entries
}

pub(crate) fn candidate_cards(
    pool: &CandidatePool,
    scores: &ScoreBook,
    selection: &TeamSelection,
    query: Option<&str>,
) -> Vec<CandidateCard> {
    search::filter(pool.candidates(), query)
        .into_iter()
        .map(|candidate| CandidateCard {
            name: candidate.name.clone(),
            location: candidate.location_label().to_string(),
            headline: candidate
                .most_recent_experience()
                .map(|experience| experience.headline()),
            top_skills: candidate
                .skills
                .iter()
                .take(CARD_SKILL_LIMIT)
                .cloned()
                .collect(),
            score: scores.total(&candidate.name),
            salary: salary_display(candidate),
            selected: selection.contains(&candidate.name),
        })
        .collect()
}

pub(crate) fn team_view(
    pool: &CandidatePool,
    scores: &ScoreBook,
    selection: &TeamSelection,
) -> TeamView {
    let members: Vec<TeamMemberView> = selection
        .members()
        .iter()
        .enumerate()
        .filter_map(|(idx, name)| pool.get(name).map(|candidate| (idx + 1, candidate)))
        .map(|(position, candidate)| TeamMemberView {
            position,
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            location: candidate.location_label().to_string(),
            experiences: candidate
                .work_experiences
                .iter()
                .take(TEAM_EXPERIENCE_LIMIT)
                .map(|experience| experience.headline())
                .collect(),
            skills: candidate.skills.clone(),
            education: candidate.education.highest_level.clone(),
            salary: salary_display(candidate),
            score: scores.total(&candidate.name),
        })
        .collect();

    let average_score = average_score(members.iter().map(|member| member.score));
    let diversity = diversity(pool.candidates(), selection.members());

    TeamView {
        filled: selection.len(),
        capacity: selection.capacity(),
        remaining_slots: selection.remaining_slots(),
        members,
        diversity,
        average_score,
    }
}

pub(crate) fn average_score(scores: impl Iterator<Item = u8>) -> Option<u8> {
    let (sum, count) = scores.fold((0u32, 0u32), |(sum, count), score| {
        (sum + u32::from(score), count + 1)
    });
    if count == 0 {
        return None;
    }
    Some((sum as f32 / count as f32).round() as u8)
}
