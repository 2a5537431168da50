//! Terminal rendering for the analysis report markdown.
//!
//! The report document has a fixed shape: top-level sections (Log
//! Analysis, Screenshot Analysis, Cross-Check, Verification),
//! per-screenshot subsections, an italic cache annotation, and bullet
//! conclusions. The renderer classifies each line against that shape
//! and styles it accordingly, with a plain-text fallback for
//! `--no-color` and non-interactive use.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Report line classes the renderer styles differently.
#[derive(Debug, PartialEq, Eq)]
enum ReportLine<'a> {
    /// Top-level pipeline section, e.g. `# Cross-Check`
    Section(&'a str),
    /// Per-screenshot subsection, e.g. `## Screenshot: click_start_1.png`
    Subsection(&'a str),
    /// The `*(loaded from existing analysis)*` cache annotation
    CacheNote(&'a str),
    /// Anything else: bullets, prose, blank lines
    Body(&'a str),
}

fn classify(line: &str) -> ReportLine<'_> {
    if let Some(rest) = line.strip_prefix("## ") {
        ReportLine::Subsection(rest)
    } else if line.starts_with("# ") {
        ReportLine::Section(line)
    } else if line.starts_with("*(") && line.ends_with(")*") {
        ReportLine::CacheNote(line)
    } else {
        ReportLine::Body(line)
    }
}

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render report markdown to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{}", markdown);
            return Ok(());
        }

        for line in markdown.lines() {
            match classify(line) {
                ReportLine::Section(text) => {
                    // Pipeline sections get an underline so they stand
                    // out when scrolling a long report.
                    print!("\x1b[1;34m{text}\x1b[0m");
                    println!();
                    println!("\x1b[2m{}\x1b[0m", Self::section_rule(text));
                }
                ReportLine::Subsection(text) => {
                    print!("\x1b[36m{text}\x1b[0m");
                    println!();
                }
                ReportLine::CacheNote(text) => {
                    print!("\x1b[2;3m{text}\x1b[0m");
                    println!();
                }
                ReportLine::Body(text) => {
                    self.skin.print_inline(text);
                    println!();
                }
            }
        }
        Ok(())
    }

    /// Returns the underline for a section header, matching its width.
    fn section_rule(header: &str) -> String {
        "─".repeat(header.chars().count())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use attest_core::models::{AnalysisRecord, PlanStep, Report};

    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn section_rule_matches_header_width() {
        let rule = TerminalRenderer::section_rule("# Cross-Check");
        assert_eq!(rule.chars().count(), "# Cross-Check".chars().count());
    }

    #[test]
    fn classifies_report_line_shapes() {
        assert_eq!(classify("# Log Analysis"), ReportLine::Section("# Log Analysis"));
        assert_eq!(
            classify("## Screenshot: click_start_1.png"),
            ReportLine::Subsection("Screenshot: click_start_1.png")
        );
        assert_eq!(
            classify("*(loaded from existing analysis)*"),
            ReportLine::CacheNote("*(loaded from existing analysis)*")
        );
        assert_eq!(classify("- Missing cart step"), ReportLine::Body("- Missing cart step"));
        assert_eq!(classify(""), ReportLine::Body(""));
    }

    #[test]
    fn report_document_classifies_into_expected_sections() {
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
            verification: "confirmed".to_string(),
        };

        let rendered = report.to_string();
        let sections = rendered
            .lines()
            .filter(|l| matches!(classify(l), ReportLine::Section(_)))
            .count();
        let subsections = rendered
            .lines()
            .filter(|l| matches!(classify(l), ReportLine::Subsection(_)))
            .count();
        let cache_notes = rendered
            .lines()
            .filter(|l| matches!(classify(l), ReportLine::CacheNote(_)))
            .count();

        assert_eq!(sections, 4);
        assert_eq!(subsections, 1);
        assert_eq!(cache_notes, 1);
    }
}
