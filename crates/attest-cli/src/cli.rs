//! Command handlers bridging parsed arguments to the core analyzer.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use attest_core::extract::extract_steps;
use attest_core::screenshot::{list_screenshots, parse_screenshot_name};
use attest_core::{Analyzer, RunParams, StepList};

use crate::renderer::TerminalRenderer;

/// Executes CLI commands and renders their markdown output.
pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    /// Creates a handler with the given renderer.
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Runs the full cross-check pipeline and renders the report.
    pub async fn run(&self, analyzer: &Analyzer, params: &RunParams) -> Result<()> {
        let report = analyzer
            .run(params)
            .await
            .context("Analysis pipeline failed")?;
        self.renderer.render(&format!("{report}\n"))
    }

    /// Extracts and prints the plan steps from one log file.
    pub fn steps(&self, log_file: &Path) -> Result<()> {
        let log_text = std::fs::read_to_string(log_file)
            .with_context(|| format!("Failed to read log file {}", log_file.display()))?;
        let steps = extract_steps(&log_text)
            .with_context(|| format!("Failed to parse log file {}", log_file.display()))?;

        let mut output = String::from("# Plan Steps\n\n");
        let _ = writeln!(output, "{}", StepList(&steps));
        self.renderer.render(&output)
    }

    /// Lists the screenshots in a directory, validating each name.
    pub fn shots(&self, dir: &Path) -> Result<()> {
        let screenshots = list_screenshots(dir)
            .with_context(|| format!("Failed to list screenshots in {}", dir.display()))?;

        let mut output = String::from("# Screenshots\n\n");
        if screenshots.is_empty() {
            output.push_str("No screenshots found.\n");
            return self.renderer.render(&output);
        }

        let _ = writeln!(output, "Found {} candidates:", screenshots.len());
        for path in &screenshots {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("<non-utf8>");
            match parse_screenshot_name(name) {
                Ok(shot) => {
                    let _ = writeln!(output, "- {name}: {shot}");
                }
                Err(_) => {
                    let _ = writeln!(output, "- {name}: invalid filename");
                }
            }
        }
        self.renderer.render(&output)
    }
}
