use serde::Serialize;

use super::domain::{Candidate, SalaryExpectation};

const NON_DOLLAR_SYMBOLS: [char; 5] = ['₹', '€', '£', '¥', '₱'];

/// Denomination inferred from the raw salary string and the applicant's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryCurrency {
    UsDollar,
    Other,
}

/// Extracts every digit from the full-time expectation and parses the result.
///
/// Separators and currency markers are ignored, so `"$120,000"` and
/// `"₹15,00,000"` both parse. Absent fields, strings without digits, and values
/// that overflow `u64` yield 0.
pub fn extract_salary(expectation: &SalaryExpectation) -> u64 {
    let Some(raw) = expectation.full_time.as_deref() else {
        return 0;
    };

    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }

    digits.parse::<u64>().unwrap_or(0)
}

pub fn currency_of(expectation: &SalaryExpectation, location: Option<&str>) -> SalaryCurrency {
    let located_in_india = location
        .map(|value| value.to_lowercase().contains("india"))
        .unwrap_or(false);
    if located_in_india {
        return SalaryCurrency::Other;
    }

    let Some(raw) = expectation.full_time.as_deref() else {
        return SalaryCurrency::UsDollar;
    };

    let lowered = raw.trim().to_lowercase();
    if raw.chars().any(|ch| NON_DOLLAR_SYMBOLS.contains(&ch))
        || lowered.contains("inr")
        || lowered.starts_with("rs")
    {
        SalaryCurrency::Other
    } else {
        SalaryCurrency::UsDollar
    }
}

/// Human readable expectation: dollar amounts are normalised, anything else is shown verbatim.
pub fn salary_display(candidate: &Candidate) -> String {
    let expectation = &candidate.salary_expectation;
    let raw = match expectation.full_time.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return "N/A".to_string(),
    };

    match currency_of(expectation, candidate.location.as_deref()) {
        SalaryCurrency::UsDollar => match extract_salary(expectation) {
            0 => raw.to_string(),
            amount => format_usd(amount),
        },
        SalaryCurrency::Other => raw.to_string(),
    }
}

pub fn format_usd(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
