use super::super::domain::Candidate;
use super::{EducationTier, ScoreComponent, ScoreFactor, ScoreSignals, MAX_SCORE};

pub(crate) const TOP_SCHOOL_BONUS: u8 = 5;
pub(crate) const LEADERSHIP_BONUS: u8 = 10;
pub(crate) const POINTS_PER_SKILL: usize = 2;
pub(crate) const SKILL_POINTS_CAP: usize = 25;

pub(crate) const LEADERSHIP_KEYWORDS: [&str; 8] = [
    "senior",
    "lead",
    "principal",
    "manager",
    "director",
    "vp",
    "cto",
    "head",
];

pub(crate) const HIGH_VALUE_SKILLS: [&str; 9] = [
    "python",
    "machine learning",
    "ai",
    "react",
    "node",
    "aws",
    "docker",
    "sql",
    "tensorflow",
];

/// (minimum roles, base points), checked from the top down.
const EXPERIENCE_TIERS: [(usize, u8); 4] = [(5, 30), (3, 25), (2, 20), (1, 15)];

/// Number of roles at which experience is considered extensive.
pub(crate) const EXTENSIVE_EXPERIENCE_ROLES: usize = EXPERIENCE_TIERS[1].0;

pub(crate) fn education_tier(highest_level: Option<&str>) -> EducationTier {
    let Some(level) = highest_level else {
        return EducationTier::Unrecognized;
    };
    let level = level.to_lowercase();

    if level.contains("phd") || level.contains("doctorate") {
        EducationTier::Doctorate
    } else if level.contains("master") {
        EducationTier::Master
    } else if level.contains("bachelor") {
        EducationTier::Bachelor
    } else if level.contains("associate") {
        EducationTier::Associate
    } else {
        EducationTier::Unrecognized
    }
}

pub(crate) fn experience_base_points(roles: usize) -> u8 {
    EXPERIENCE_TIERS
        .iter()
        .find(|(minimum, _)| roles >= *minimum)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

pub(crate) fn has_leadership_title(role_name: &str) -> bool {
    let role = role_name.to_lowercase();
    LEADERSHIP_KEYWORDS
        .iter()
        .any(|keyword| role.contains(keyword))
}

pub(crate) fn high_value_hits(skills: &[String]) -> Vec<&'static str> {
    let haystack = skills.join(" ").to_lowercase();
    HIGH_VALUE_SKILLS
        .iter()
        .copied()
        .filter(|keyword| haystack.contains(keyword))
        .collect()
}

pub(crate) fn score_candidate(candidate: &Candidate) -> (Vec<ScoreComponent>, u8, ScoreSignals) {
    let mut components = Vec::with_capacity(3);

    let tier = education_tier(candidate.education.highest_level.as_deref());
    let top_school = candidate
        .education
        .degrees
        .iter()
        .any(|degree| degree.is_top50);
    let mut education_points = tier.points();
    let mut education_notes = match candidate.education.highest_level.as_deref() {
        Some(level) => format!("'{}' graded as {}", level.trim(), tier.label()),
        None => "no education level provided".to_string(),
    };
    if top_school {
        education_points += TOP_SCHOOL_BONUS;
        education_notes.push_str("; top-50 school bonus");
    }
    components.push(ScoreComponent {
        factor: ScoreFactor::Education,
        points: education_points,
        notes: education_notes,
    });

    let role_count = candidate.work_experiences.len();
    let leadership_role = candidate
        .work_experiences
        .iter()
        .map(|experience| experience.role_name.as_str())
        .find(|role| has_leadership_title(role))
        .map(str::to_string);
    let mut experience_points = experience_base_points(role_count);
    let mut experience_notes = format!("{role_count} role(s) on record");
    if let Some(role) = &leadership_role {
        experience_points += LEADERSHIP_BONUS;
        experience_notes.push_str(&format!("; leadership title '{role}'"));
    }
    components.push(ScoreComponent {
        factor: ScoreFactor::Experience,
        points: experience_points,
        notes: experience_notes,
    });

    let skill_count = candidate.skills.len();
    let keyword_hits = high_value_hits(&candidate.skills);
    let breadth_points = (skill_count * POINTS_PER_SKILL).min(SKILL_POINTS_CAP);
    let skill_points = (breadth_points + keyword_hits.len()) as u8;
    let skill_notes = if keyword_hits.is_empty() {
        format!("{skill_count} skill(s) listed")
    } else {
        format!(
            "{skill_count} skill(s) listed; in-demand: {}",
            keyword_hits.join(", ")
        )
    };
    components.push(ScoreComponent {
        factor: ScoreFactor::Skills,
        points: skill_points,
        notes: skill_notes,
    });

    let raw_total: u16 = components
        .iter()
        .map(|component| u16::from(component.points))
        .sum();
    let total = raw_total.min(u16::from(MAX_SCORE)) as u8;

    let signals = ScoreSignals {
        education_tier: tier,
        top_school,
        role_count,
        leadership_role,
        skill_count,
        keyword_hits: keyword_hits.iter().map(|hit| hit.to_string()).collect(),
    };

    (components, total, signals)
}
