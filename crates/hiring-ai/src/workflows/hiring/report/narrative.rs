use std::fmt::Write;

use super::super::salary::format_usd;
use super::summary::HiringReport;

impl HiringReport {
    /// Executive summary narrative in markdown.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_markdown(&mut out);
        out
    }

    fn write_markdown(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "# Final Hiring Report")?;
        writeln!(out)?;
        writeln!(out, "_Generated {}_", self.generated_on)?;
        writeln!(out)?;

        writeln!(out, "## Executive Summary")?;
        writeln!(out)?;
        writeln!(
            out,
            "- **Total Team Size**: {} of {} members",
            self.team_size, self.capacity
        )?;
        writeln!(
            out,
            "- **Total Annual Budget**: {}",
            format_usd(self.total_budget)
        )?;
        writeln!(out, "- **Average Salary**: {}", format_usd(self.average_salary))?;
        if let Some(score) = self.average_score {
            writeln!(out, "- **Average Team Score**: {score}/100")?;
        }
        writeln!(
            out,
            "- **Geographic Diversity**: {} location{}",
            self.diversity.geographic_diversity,
            plural(self.diversity.geographic_diversity)
        )?;
        writeln!(
            out,
            "- **Skill Coverage**: {} unique skill{}",
            self.diversity.skill_diversity,
            plural(self.diversity.skill_diversity)
        )?;
        if !self.non_usd_members.is_empty() {
            writeln!(out)?;
            writeln!(
                out,
                "_Budget sums recorded amounts as-is; non-USD expectations from: {}._",
                self.non_usd_members.join(", ")
            )?;
        }
        writeln!(out)?;

        writeln!(out, "## Team Selection Justification")?;
        writeln!(out)?;
        for member in &self.members {
            writeln!(
                out,
                "### {}. {} (Score: {}/100)",
                member.position, member.name, member.score
            )?;
            writeln!(out)?;
            writeln!(out, "- Salary expectation: {}", member.salary)?;
            if member.justifications.is_empty() {
                writeln!(out, "- Why chosen: overall fit")?;
            } else {
                writeln!(out, "- Why chosen: {}", member.justifications.join(", "))?;
            }
            writeln!(out)?;
        }

        writeln!(out, "## Strategic Rationale")?;
        writeln!(out)?;
        for line in &self.strategic_rationale {
            writeln!(out, "- {line}")?;
        }
        writeln!(out)?;

        writeln!(out, "## Next Steps")?;
        writeln!(out)?;
        for (idx, step) in self.next_steps.iter().enumerate() {
            writeln!(out, "{}. {step}", idx + 1)?;
        }

        Ok(())
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
