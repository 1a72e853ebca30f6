use super::common::*;
use crate::workflows::hiring::domain::{Candidate, Education};
use crate::workflows::hiring::scoring::{
    score, CandidateScorer, EducationTier, Justification, ScoreBook, ScoreFactor,
};

fn with_skills(values: &[&str]) -> Candidate {
    let mut candidate = Candidate::named("Skills Only");
    candidate.skills = skills(values);
    candidate
}

fn with_roles(titles: &[&str]) -> Candidate {
    let mut candidate = Candidate::named("Roles Only");
    candidate.work_experiences = roles(titles);
    candidate
}

fn generic_skills(count: usize) -> Vec<String> {
    (0..count).map(|idx| format!("Skill{idx}")).collect()
}

#[test]
fn empty_candidate_scores_zero() {
    assert_eq!(score(&tom()), 0);

    let breakdown = CandidateScorer.evaluate(&tom());
    assert_eq!(breakdown.total, 0);
    assert!(breakdown.components.iter().all(|component| component.points == 0));
    assert!(breakdown.justifications.is_empty());
}

#[test]
fn worked_example_scores_each_factor() {
    let breakdown = CandidateScorer.evaluate(&alex());

    assert_eq!(breakdown.points_for(ScoreFactor::Education), 30);
    assert_eq!(breakdown.points_for(ScoreFactor::Experience), 35);
    // React is a listed keyword too, so five hits land on top of the breadth points.
    assert_eq!(breakdown.points_for(ScoreFactor::Skills), 15);
    assert_eq!(breakdown.total, 80);
    assert_eq!(
        breakdown.signals.keyword_hits,
        vec!["python", "react", "aws", "docker", "sql"]
    );
}

#[test]
fn worked_example_is_justified() {
    let breakdown = CandidateScorer.evaluate(&alex());

    assert_eq!(
        breakdown.justifications,
        vec![
            Justification::AdvancedDegree,
            Justification::TopTierSchool,
            Justification::ExtensiveExperience { roles: 3 },
            Justification::LeadershipExperience {
                role: "Senior Software Engineer".to_string()
            },
            Justification::DiverseSkillSet { skills: 5 },
            Justification::HighValueSkills {
                keywords: skills(&["python", "react", "aws", "docker", "sql"])
            },
        ]
    );
    assert_eq!(
        breakdown.justifications[3].summary(),
        "Leadership experience (Senior Software Engineer)"
    );
}

#[test]
fn doctorate_outranks_master() {
    let mut phd = alex();
    phd.education.highest_level = Some("PhD".to_string());
    let mut master = alex();
    master.education.highest_level = Some("Master's".to_string());

    assert!(score(&phd) >= score(&master));
    assert_eq!(
        CandidateScorer.evaluate(&phd).signals.education_tier,
        EducationTier::Doctorate
    );
}

#[test]
fn education_levels_map_to_tiers() {
    let points = |level: &str| {
        let mut candidate = Candidate::named("Level");
        candidate.education = Education {
            highest_level: Some(level.to_string()),
            degrees: Vec::new(),
        };
        score(&candidate)
    };

    assert_eq!(points("Doctorate (PhD)"), 30);
    assert_eq!(points("MASTER OF SCIENCE"), 25);
    assert_eq!(points("Bachelor's Degree"), 20);
    assert_eq!(points("Associate Degree"), 15);
    assert_eq!(points("High School Diploma"), 0);
}

#[test]
fn top_school_bonus_applies_once() {
    let mut one = Candidate::named("One");
    one.education = education("Bachelor's Degree", 1);
    let mut two = Candidate::named("Two");
    two.education = education("Bachelor's Degree", 2);
    let mut none = Candidate::named("None");
    none.education = education("Bachelor's Degree", 0);

    assert_eq!(score(&one), 25);
    assert_eq!(score(&two), 25);
    assert_eq!(score(&none), 20);
}

#[test]
fn experience_base_caps_at_five_roles() {
    let five = with_roles(&["Engineer"; 5]);
    let six = with_roles(&["Engineer"; 6]);

    assert_eq!(score(&five), 30);
    assert_eq!(score(&six), 30);
    assert_eq!(score(&with_roles(&["Engineer"; 3])), 25);
    assert_eq!(score(&with_roles(&["Engineer"; 2])), 20);
    assert_eq!(score(&with_roles(&["Engineer"])), 15);
}

#[test]
fn leadership_bonus_is_awarded_once() {
    let one_senior = with_roles(&["Engineer", "Engineer", "Senior Engineer", "Engineer", "Engineer"]);
    let many_senior = with_roles(&[
        "Senior Engineer",
        "Engineering Manager",
        "Head of Platform",
        "Engineer",
        "Engineer",
    ]);

    assert_eq!(score(&one_senior), 40);
    assert_eq!(score(&many_senior), 40);
    assert_eq!(
        CandidateScorer
            .evaluate(&many_senior)
            .signals
            .leadership_role
            .as_deref(),
        Some("Senior Engineer")
    );
}

#[test]
fn skill_breadth_is_capped() {
    assert_eq!(score(&with_skills(&[])), 0);

    let mut candidate = Candidate::named("Breadth");
    for count in 1..=12 {
        candidate.skills = generic_skills(count);
        assert_eq!(usize::from(score(&candidate)), count * 2);
    }

    candidate.skills = generic_skills(13);
    assert_eq!(score(&candidate), 25);
    candidate.skills = generic_skills(30);
    assert_eq!(score(&candidate), 25);
}

#[test]
fn keyword_bonus_counts_each_keyword_once() {
    let repeated = with_skills(&["Python", "python", "PYTHON scripting"]);
    assert_eq!(score(&repeated), 3 * 2 + 1);

    let distinct = with_skills(&["Python", "Docker"]);
    assert_eq!(score(&distinct), 2 * 2 + 2);
}

#[test]
fn scores_never_exceed_maximum() {
    let mut candidate = Candidate::named("Overqualified");
    candidate.education = education("PhD", 2);
    candidate.work_experiences = roles(&["CTO", "VP Engineering", "Director", "Lead", "Principal"]);
    candidate.skills = generic_skills(20);
    candidate.skills.extend(skills(&[
        "Python",
        "Machine Learning",
        "AI",
        "React",
        "Node",
        "AWS",
        "Docker",
        "SQL",
        "TensorFlow",
    ]));

    assert_eq!(score(&candidate), 100);
    for candidate in pool().candidates() {
        assert!(score(candidate) <= 100);
    }
}

#[test]
fn scoring_does_not_mutate_and_is_deterministic() {
    let candidate = alex();
    let before = candidate.clone();

    let first = CandidateScorer.evaluate(&candidate);
    let second = CandidateScorer.evaluate(&candidate);

    assert_eq!(first, second);
    assert_eq!(candidate, before);
}

#[test]
fn score_book_memoises_pool() {
    let pool = pool();
    let book = ScoreBook::for_pool(&pool);

    assert_eq!(book.total("Alex Johnson"), 80);
    assert_eq!(book.total("Tom Baker"), 0);
    assert_eq!(book.total("Not In Pool"), 0);
    assert!(book.get("Priya Raman").is_some());
}
