use super::common::*;
use crate::workflows::hiring::export::write_team_csv;
use crate::workflows::hiring::report::HiringReport;
use crate::workflows::hiring::scoring::ScoreBook;
use crate::workflows::hiring::selection::TeamSelection;
use chrono::NaiveDate;

fn report_for(members: &[&str]) -> HiringReport {
    let pool = pool();
    let scores = ScoreBook::for_pool(&pool);
    let mut selection = TeamSelection::new(TEAM_SIZE);
    for name in members {
        selection.select(*name).expect("seat available");
    }
    let date = NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date");
    HiringReport::build(&pool, &scores, &selection, date)
}

#[test]
fn markdown_sections_are_ordered() {
    let markdown = report_for(&["Alex Johnson", "Sarah Chen"]).to_markdown();

    let sections = [
        "# Final Hiring Report",
        "## Executive Summary",
        "## Team Selection Justification",
        "## Strategic Rationale",
        "## Next Steps",
    ];
    let offsets: Vec<usize> = sections
        .iter()
        .map(|heading| markdown.find(heading).expect("section present"))
        .collect();
    assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));

    assert!(markdown.contains("- **Total Annual Budget**: $215,000"));
    assert!(markdown.contains("### 1. Alex Johnson (Score: 80/100)"));
    assert!(markdown.contains("### 2. Sarah Chen"));
    assert!(markdown.contains("1. Send offer letters to selected candidates"));
    assert!(!markdown.contains("non-USD"));
}

#[test]
fn markdown_flags_non_usd_members() {
    let markdown = report_for(&["Priya Raman"]).to_markdown();
    assert!(markdown.contains("non-USD expectations from: Priya Raman"));
}

#[test]
fn members_without_reasons_fall_back_to_overall_fit() {
    let report = report_for(&["Tom Baker"]);
    assert!(report.members[0].justifications.is_empty());
    assert!(report.to_markdown().contains("- Why chosen: overall fit"));
}

#[test]
fn empty_selection_builds_an_empty_report() {
    let report = report_for(&[]);
    assert_eq!(report.team_size, 0);
    assert_eq!(report.total_budget, 0);
    assert_eq!(report.average_salary, 0);
    assert_eq!(report.average_score, None);
    assert_eq!(report.diversity.geographic_diversity, 0);
}

#[test]
fn full_team_is_complete() {
    let report = report_for(&[
        "Alex Johnson",
        "Priya Raman",
        "Sarah Chen",
        "Marcus Silva",
        "Lena Fischer",
    ]);
    assert!(report.is_complete());
    assert_eq!(report.strategic_rationale.len(), 5);
    assert_eq!(report.next_steps.len(), 4);
}

#[test]
fn csv_export_lists_members_in_seat_order() {
    let report = report_for(&["Sarah Chen", "Alex Johnson"]);
    let mut buffer = Vec::new();
    write_team_csv(&mut buffer, &report).expect("csv written");
    let csv = String::from_utf8(buffer).expect("utf8");

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "position,name,score,annual_salary,currency,salary,justifications"
    );
    assert!(lines[1].starts_with("1,Sarah Chen,49,95000,us_dollar,\"$95,000\","));
    assert!(lines[2].starts_with("2,Alex Johnson,80,120000,us_dollar,"));
    assert_eq!(lines.len(), 3);
}
