//! Command-line argument definitions using clap.
//!
//! Argument structs carry the clap-specific attributes and convert into
//! core parameter types via `From`, keeping the core crate free of CLI
//! framework concerns.

use std::path::PathBuf;

use attest_core::RunParams;
use clap::{Parser, Subcommand};

/// Main command-line interface for the attest evidence analyzer
///
/// Attest cross-checks the execution log of an automated UI test
/// against the before/after screenshots captured during the run and
/// reports plan steps that lack visual evidence. The `run` command
/// drives the full LLM-backed pipeline; `steps` and `shots` inspect
/// artifacts offline.
#[derive(Parser)]
#[command(version, about, name = "attest")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the attest CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Run the full cross-check pipeline for a test run
    #[command(alias = "r")]
    Run(RunArgs),
    /// Extract and print the plan steps from an execution log
    #[command(alias = "s")]
    Steps(StepsArgs),
    /// List and validate the screenshots in a directory
    #[command(alias = "sh")]
    Shots(ShotsArgs),
}

/// Run the full cross-check pipeline
///
/// Locates the newest execution log and the screenshot directory for
/// the given test run, analyzes both with the configured models, and
/// prints the cross-checked report. Requires `OPENAI_API_KEY` and
/// `GROQ_API_KEY` in the environment.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Name of the test whose artifacts to analyze
    pub test_name: String,
    /// Run identifier within the test's artifacts
    pub run_id: String,
    /// Re-analyze screenshots even when a cached analysis exists
    #[arg(long, help = "Ignore any cached screenshot analysis and run fresh")]
    pub fresh: bool,
    /// Root of the execution log tree. Defaults to opt/log_files
    #[arg(long)]
    pub log_root: Option<PathBuf>,
    /// Root of the screenshot tree. Defaults to opt/proofs
    #[arg(long)]
    pub proof_root: Option<PathBuf>,
    /// Directory for cached analyses. Defaults to
    /// $XDG_DATA_HOME/attest/analysis_logs
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,
}

impl From<&RunArgs> for RunParams {
    fn from(val: &RunArgs) -> Self {
        RunParams {
            test_name: val.test_name.clone(),
            run_id: val.run_id.clone(),
            use_cached_analysis: !val.fresh,
        }
    }
}

/// Extract plan steps from a single execution log file
#[derive(clap::Args)]
pub struct StepsArgs {
    /// Path to the execution log JSON file
    #[arg(help = "Execution log file to extract plan steps from")]
    pub log_file: PathBuf,
}

/// List and validate screenshots in a directory
#[derive(clap::Args)]
pub struct ShotsArgs {
    /// Directory containing the captured screenshots
    #[arg(help = "Screenshot directory to list and validate")]
    pub dir: PathBuf,
}
