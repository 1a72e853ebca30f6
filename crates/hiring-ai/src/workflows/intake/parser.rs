use super::normalizer::{clean_text, non_blank};
use crate::workflows::hiring::domain::{
    Candidate, Degree, Education, SalaryExpectation, WorkExperience,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::io::Read;
use tracing::warn;

#[derive(Debug, Default)]
pub(crate) struct ParsedBatch {
    pub(crate) candidates: Vec<Candidate>,
    pub(crate) skipped: usize,
}

/// Parses a JSON array of applicant records.
///
/// Only a malformed document or a non-array top level is an error. Records that are not
/// objects or have no usable name are skipped, and malformed nested fields fall back to
/// their empty defaults.
pub(crate) fn parse_candidates<R: Read>(reader: R) -> Result<ParsedBatch, serde_json::Error> {
    let rows: Vec<Value> = serde_json::from_reader(reader)?;
    let mut batch = ParsedBatch::default();

    for (row_index, row) in rows.into_iter().enumerate() {
        if !row.is_object() {
            warn!(row_index, "skipping applicant row that is not an object");
            batch.skipped += 1;
            continue;
        }
        let raw = match RawCandidate::deserialize(row) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(row_index, error = %err, "skipping malformed applicant row");
                batch.skipped += 1;
                continue;
            }
        };

        match raw.into_candidate() {
            Some(candidate) => batch.candidates.push(candidate),
            None => {
                warn!(row_index, "skipping applicant row without a name");
                batch.skipped += 1;
            }
        }
    }

    Ok(batch)
}

#[derive(Debug, Default, Deserialize)]
struct RawCandidate {
    #[serde(default, deserialize_with = "lenient_text")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    annual_salary_expectation: Option<RawSalary>,
    #[serde(default, deserialize_with = "lenient_list")]
    work_experiences: Vec<RawExperience>,
    #[serde(default, deserialize_with = "lenient")]
    education: Option<RawEducation>,
    #[serde(default, deserialize_with = "lenient_text_list")]
    skills: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSalary {
    #[serde(rename = "full-time", default, deserialize_with = "lenient_text")]
    full_time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawExperience {
    #[serde(default, deserialize_with = "lenient_text")]
    company: Option<String>,
    #[serde(rename = "roleName", default, deserialize_with = "lenient_text")]
    role_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawEducation {
    #[serde(default, deserialize_with = "lenient_text")]
    highest_level: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    degrees: Vec<RawDegree>,
}

#[derive(Debug, Default, Deserialize)]
struct RawDegree {
    #[serde(default, deserialize_with = "lenient_text")]
    subject: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    school: Option<String>,
    #[serde(rename = "isTop50", default, deserialize_with = "lenient_flag")]
    is_top50: bool,
}

impl RawCandidate {
    fn into_candidate(self) -> Option<Candidate> {
        let name = non_blank(self.name)?;

        let salary_expectation = SalaryExpectation {
            full_time: self
                .annual_salary_expectation
                .and_then(|salary| non_blank(salary.full_time)),
        };

        let work_experiences = self
            .work_experiences
            .into_iter()
            .map(|experience| WorkExperience {
                company: non_blank(experience.company).unwrap_or_default(),
                role_name: non_blank(experience.role_name).unwrap_or_default(),
            })
            .collect();

        let education = self
            .education
            .map(|education| Education {
                highest_level: non_blank(education.highest_level),
                degrees: education
                    .degrees
                    .into_iter()
                    .map(|degree| Degree {
                        subject: non_blank(degree.subject).unwrap_or_default(),
                        school: non_blank(degree.school).unwrap_or_default(),
                        is_top50: degree.is_top50,
                    })
                    .collect(),
            })
            .unwrap_or_default();

        let skills = self
            .skills
            .iter()
            .map(|skill| clean_text(skill))
            .filter(|skill| !skill.is_empty())
            .collect();

        Some(Candidate {
            name,
            email: non_blank(self.email),
            location: non_blank(self.location),
            salary_expectation,
            work_experiences,
            education,
            skills,
        })
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| T::deserialize(item).ok())
        .collect())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_of(value))
}

fn lenient_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items.into_iter().filter_map(text_of).collect())
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(flag) => flag,
        Value::String(raw) => raw.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
