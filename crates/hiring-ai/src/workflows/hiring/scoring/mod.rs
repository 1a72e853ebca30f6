mod justification;
mod rules;

pub use justification::{justify, Justification};

use std::collections::HashMap;

use super::domain::{Candidate, CandidatePool};
use serde::{Deserialize, Serialize};

pub const MAX_SCORE: u8 = 100;

/// Fit score for one candidate, always within `0..=100`.
pub fn score(candidate: &Candidate) -> u8 {
    CandidateScorer.score(candidate)
}

/// Stateless scorer applying the fixed education/experience/skills rubric.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateScorer;

impl CandidateScorer {
    pub fn score(&self, candidate: &Candidate) -> u8 {
        let (_, total, _) = rules::score_candidate(candidate);
        total
    }

    pub fn evaluate(&self, candidate: &Candidate) -> ScoreBreakdown {
        let (components, total, signals) = rules::score_candidate(candidate);
        let justifications = justify(&signals);

        ScoreBreakdown {
            candidate: candidate.name.clone(),
            total,
            components,
            signals,
            justifications,
        }
    }
}

/// Rubric dimension a component contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Education,
    Experience,
    Skills,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreFactor::Education => "Education",
            ScoreFactor::Experience => "Experience",
            ScoreFactor::Skills => "Skills",
        }
    }
}

/// Highest recognised education level, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationTier {
    Unrecognized,
    Associate,
    Bachelor,
    Master,
    Doctorate,
}

impl EducationTier {
    pub const fn points(self) -> u8 {
        match self {
            EducationTier::Unrecognized => 0,
            EducationTier::Associate => 15,
            EducationTier::Bachelor => 20,
            EducationTier::Master => 25,
            EducationTier::Doctorate => 30,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EducationTier::Unrecognized => "unrecognized",
            EducationTier::Associate => "associate",
            EducationTier::Bachelor => "bachelor",
            EducationTier::Master => "master",
            EducationTier::Doctorate => "doctorate",
        }
    }

    pub const fn is_advanced(self) -> bool {
        matches!(self, EducationTier::Master | EducationTier::Doctorate)
    }
}

/// Discrete contribution to a score, kept for transparent review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: u8,
    pub notes: String,
}

/// Facts observed while scoring; justification reads these instead of re-deriving them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSignals {
    pub education_tier: EducationTier,
    pub top_school: bool,
    pub role_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leadership_role: Option<String>,
    pub skill_count: usize,
    pub keyword_hits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub candidate: String,
    pub total: u8,
    pub components: Vec<ScoreComponent>,
    pub signals: ScoreSignals,
    pub justifications: Vec<Justification>,
}

impl ScoreBreakdown {
    pub fn points_for(&self, factor: ScoreFactor) -> u8 {
        self.components
            .iter()
            .filter(|component| component.factor == factor)
            .map(|component| component.points)
            .sum()
    }
}

/// Breakdowns memoised per candidate name; a loaded pool never changes.
#[derive(Debug, Clone, Default)]
pub struct ScoreBook {
    breakdowns: HashMap<String, ScoreBreakdown>,
}

impl ScoreBook {
    pub fn for_pool(pool: &CandidatePool) -> Self {
        let scorer = CandidateScorer;
        let breakdowns = pool
            .candidates()
            .iter()
            .map(|candidate| (candidate.name.clone(), scorer.evaluate(candidate)))
            .collect();
        Self { breakdowns }
    }

    pub fn get(&self, name: &str) -> Option<&ScoreBreakdown> {
        self.breakdowns.get(name)
    }

    /// Total for a scored candidate; names outside the pool score 0.
    pub fn total(&self, name: &str) -> u8 {
        self.get(name).map(|breakdown| breakdown.total).unwrap_or(0)
    }
}
