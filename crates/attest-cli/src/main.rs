//! Attest CLI Application
//!
//! Command-line interface for cross-checking UI-test execution logs
//! against screenshot evidence.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands, RunArgs};
use attest_core::llm::{OpenAiChatModel, OpenAiConfig};
use attest_core::{Analyzer, AnalyzerBuilder, RunParams};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

/// Model driving the log and screenshot analyzer agents.
const AGENT_MODEL: &str = "gpt-4o";
const AGENT_API_BASE: &str = "https://api.openai.com/v1";

/// Model driving the cross-check and verification calls.
const CROSS_CHECK_MODEL: &str = "deepseek-r1-distill-llama-70b";
const CROSS_CHECK_API_BASE: &str = "https://api.groq.com/openai/v1";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();
    let cli = Cli::new(TerminalRenderer::new(!no_color));

    info!("Attest started");

    match command {
        Run(run_args) => {
            let params = RunParams::from(&run_args);
            let analyzer = build_analyzer(run_args)?;
            cli.run(&analyzer, &params).await
        }
        Steps(steps_args) => cli.steps(&steps_args.log_file),
        Shots(shots_args) => cli.shots(&shots_args.dir),
    }
}

/// Assembles the analyzer from CLI flags and environment credentials.
///
/// API keys are resolved here, at the process boundary; core components
/// never read the environment themselves.
fn build_analyzer(args: RunArgs) -> Result<Analyzer> {
    let openai_key = std::env::var("OPENAI_API_KEY")
        .context("OPENAI_API_KEY environment variable is not set")?;
    let groq_key =
        std::env::var("GROQ_API_KEY").context("GROQ_API_KEY environment variable is not set")?;

    let agent_model = OpenAiChatModel::new(OpenAiConfig::new(
        openai_key,
        AGENT_MODEL,
        AGENT_API_BASE,
    ))
    .context("Failed to build the analyzer agent client")?;
    let cross_check_model = OpenAiChatModel::new(OpenAiConfig::new(
        groq_key,
        CROSS_CHECK_MODEL,
        CROSS_CHECK_API_BASE,
    ))
    .context("Failed to build the cross-check client")?;

    AnalyzerBuilder::new()
        .with_log_root(args.log_root)
        .with_proof_root(args.proof_root)
        .with_cache_dir(args.cache_dir)
        .with_agent_model(Box::new(agent_model))
        .with_cross_check_model(Box::new(cross_check_model))
        .build()
        .context("Failed to initialize analyzer")
}
