use super::rules::EXTENSIVE_EXPERIENCE_ROLES;
use super::ScoreSignals;
use serde::{Deserialize, Serialize};

/// Skill count at which a candidate reads as a generalist.
const DIVERSE_SKILL_COUNT: usize = 5;

/// Reason a candidate stands out, restating the scoring thresholds in prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Justification {
    AdvancedDegree,
    TopTierSchool,
    ExtensiveExperience { roles: usize },
    LeadershipExperience { role: String },
    DiverseSkillSet { skills: usize },
    HighValueSkills { keywords: Vec<String> },
}

impl Justification {
    pub fn summary(&self) -> String {
        match self {
            Justification::AdvancedDegree => "Advanced degree holder".to_string(),
            Justification::TopTierSchool => "Top-tier university graduate".to_string(),
            Justification::ExtensiveExperience { roles } => {
                format!("Extensive work experience ({roles} roles)")
            }
            Justification::LeadershipExperience { role } => {
                format!("Leadership experience ({role})")
            }
            Justification::DiverseSkillSet { skills } => {
                format!("Diverse skill set ({skills} skills)")
            }
            Justification::HighValueSkills { keywords } => {
                format!("In-demand skills: {}", keywords.join(", "))
            }
        }
    }
}

pub fn justify(signals: &ScoreSignals) -> Vec<Justification> {
    let mut reasons = Vec::new();

    if signals.education_tier.is_advanced() {
        reasons.push(Justification::AdvancedDegree);
    }

    if signals.top_school {
        reasons.push(Justification::TopTierSchool);
    }

    if signals.role_count >= EXTENSIVE_EXPERIENCE_ROLES {
        reasons.push(Justification::ExtensiveExperience {
            roles: signals.role_count,
        });
    }

    if let Some(role) = &signals.leadership_role {
        reasons.push(Justification::LeadershipExperience { role: role.clone() });
    }

    if signals.skill_count >= DIVERSE_SKILL_COUNT {
        reasons.push(Justification::DiverseSkillSet {
            skills: signals.skill_count,
        });
    }

    if !signals.keyword_hits.is_empty() {
        reasons.push(Justification::HighValueSkills {
            keywords: signals.keyword_hits.clone(),
        });
    }

    reasons
}
