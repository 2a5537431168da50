//! Markdown rendering of the assembled report.

use std::fmt;

use super::collections::{AnalysisList, StepList};
use crate::models::Report;

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Log Analysis")?;
        writeln!(f)?;
        writeln!(f, "{}", StepList(&self.steps))?;
        writeln!(f)?;
        writeln!(f, "{}", self.log_analysis)?;
        writeln!(f)?;

        writeln!(f, "# Screenshot Analysis")?;
        if self.from_cache {
            writeln!(f)?;
            writeln!(f, "*(loaded from existing analysis)*")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", AnalysisList(&self.records))?;

        writeln!(f, "# Cross-Check")?;
        writeln!(f)?;
        if self.conclusions.is_empty() {
            writeln!(f, "No conclusions produced.")?;
        } else {
            for conclusion in &self.conclusions {
                writeln!(f, "- {conclusion}")?;
            }
        }
        writeln!(f)?;

        writeln!(f, "# Verification")?;
        writeln!(f)?;
        write!(f, "{}", self.verification)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{AnalysisRecord, PlanStep, Report};

    #[test]
    fn report_renders_all_sections() {
        let report = Report {
            steps: vec![PlanStep::new(1, "Open app")],
            log_analysis: "One step found.".to_string(),
            records: vec![AnalysisRecord {
                screenshot: "click_start_1.png".to_string(),
                analysis: "app opened".to_string(),
            }],
            from_cache: true,
            initial_cross_check: "raw".to_string(),
            conclusions: vec!["All steps evidenced".to_string()],
            verification: "VERIFICATION RESULTS: confirmed".to_string(),
        };

        let rendered = report.to_string();
        assert!(rendered.contains("# Log Analysis"));
        assert!(rendered.contains("Found 1 steps:"));
        assert!(rendered.contains("*(loaded from existing analysis)*"));
        assert!(rendered.contains("- All steps evidenced"));
        assert!(rendered.contains("# Verification"));
        assert!(rendered.ends_with("VERIFICATION RESULTS: confirmed"));
    }
}
