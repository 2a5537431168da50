//! Collection wrapper types for formatting step and record lists.

use std::fmt;

use crate::models::{AnalysisRecord, PlanStep};

/// Formats a step collection the way the log analyzer consumes it.
///
/// Produces the `Found N steps:` header followed by one numbered line
/// per step, or `No steps found in the log file.` for an empty
/// extraction.
pub struct StepList<'a>(pub &'a [PlanStep]);

impl fmt::Display for StepList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No steps found in the log file.");
        }

        writeln!(f, "Found {} steps:", self.0.len())?;
        for (i, step) in self.0.iter().enumerate() {
            if i + 1 < self.0.len() {
                writeln!(f, "{step}")?;
            } else {
                write!(f, "{step}")?;
            }
        }
        Ok(())
    }
}

/// Formats per-screenshot analyses as markdown sections.
pub struct AnalysisList<'a>(pub &'a [AnalysisRecord]);

impl fmt::Display for AnalysisList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No screenshot analyses available.");
        }

        for (i, record) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "## Screenshot: {}", record.screenshot)?;
            writeln!(f, "{}", record.analysis)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_list_formats_header_and_lines() {
        let steps = vec![PlanStep::new(1, "Open app"), PlanStep::new(2, "Tap search")];
        assert_eq!(
            StepList(&steps).to_string(),
            "Found 2 steps:\n1. Open app\n2. Tap search"
        );
    }

    #[test]
    fn empty_step_list_reports_no_findings() {
        assert_eq!(
            StepList(&[]).to_string(),
            "No steps found in the log file."
        );
    }

    #[test]
    fn analysis_list_renders_sections() {
        let records = vec![AnalysisRecord {
            screenshot: "click_start_1.png".to_string(),
            analysis: "login page".to_string(),
        }];
        let rendered = AnalysisList(&records).to_string();
        assert!(rendered.contains("## Screenshot: click_start_1.png"));
        assert!(rendered.contains("login page"));
    }
}
