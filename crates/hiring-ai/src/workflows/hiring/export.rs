use std::io::Write;

use serde::Serialize;

use super::report::HiringReport;
use super::salary::SalaryCurrency;

#[derive(Debug, Serialize)]
struct TeamExportRow<'a> {
    position: usize,
    name: &'a str,
    score: u8,
    annual_salary: u64,
    currency: SalaryCurrency,
    salary: &'a str,
    justifications: String,
}

/// Writes one CSV row per selected team member, in seat order.
pub fn write_team_csv<W: Write>(writer: W, report: &HiringReport) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for member in &report.members {
        csv_writer.serialize(TeamExportRow {
            position: member.position,
            name: &member.name,
            score: member.score,
            annual_salary: member.annual_salary,
            currency: member.currency,
            salary: &member.salary,
            justifications: member.justifications.join("; "),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
