//! High-level analyzer API orchestrating one analysis run.
//!
//! The [`Analyzer`] sequences the full pipeline over the artifacts of a
//! test run:
//!
//! 1. Locate and read the latest execution log
//! 2. Extract plan steps (deterministic)
//! 3. Log-analysis model call over the step listing
//! 4. Per-screenshot vision calls (or the cached analysis)
//! 5. Cross-check model call comparing both analyses
//! 6. Verification model call over the cross-check conclusions
//!
//! Model calls run under the configured [`RetryPolicy`]; failures
//! scoped to one screenshot (invalid filename, unreadable file, an
//! exhausted retry) are logged and skipped without affecting the other
//! screenshots or the run as a whole.
//!
//! Instances are configured through [`AnalyzerBuilder`], which injects
//! the two model endpoints, the artifact roots, and the cache
//! directory.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::{
    artifacts, cache,
    crosscheck::{split_conclusions, summarize_records},
    display::StepList,
    error::{AnalyzerError, Result},
    extract::extract_steps,
    llm::{ChatModel, ChatRequest, MessageContent},
    models::{AnalysisRecord, Report},
    params::RunParams,
    prompts,
    retry::{RetryPolicy, Sleeper},
    screenshot::{list_screenshots, parse_screenshot_name},
};

pub mod builder;

pub use builder::AnalyzerBuilder;

/// Sampling temperature for the analyzer agents.
const AGENT_TEMPERATURE: f32 = 0.7;

/// Sampling temperature for cross-check and verification calls.
///
/// Zero keeps the comparison deterministic and factual.
const CROSS_CHECK_TEMPERATURE: f32 = 0.0;

/// Main analyzer interface for cross-checking a test run.
pub struct Analyzer {
    pub(crate) log_root: PathBuf,
    pub(crate) proof_root: PathBuf,
    pub(crate) cache_dir: PathBuf,
    pub(crate) agent_model: Box<dyn ChatModel>,
    pub(crate) cross_check_model: Box<dyn ChatModel>,
    pub(crate) retry: RetryPolicy,
    pub(crate) sleeper: Box<dyn Sleeper>,
}

impl Analyzer {
    /// Runs the full analysis pipeline for one test run.
    ///
    /// # Errors
    ///
    /// Fails when the execution log cannot be located or parsed, or
    /// when a run-level model call (log analysis, cross-check,
    /// verification) fails after retries. Per-screenshot failures are
    /// skipped, never fatal.
    pub async fn run(&self, params: &RunParams) -> Result<Report> {
        let log_path = artifacts::latest_log_file(&self.log_root, &params.test_name, &params.run_id)?;
        log::info!("Using log file: {}", log_path.display());

        let log_text = std::fs::read_to_string(&log_path)
            .map_err(|e| AnalyzerError::file_system(&log_path, e))?;
        let steps = extract_steps(&log_text)?;
        let step_listing = StepList(&steps).to_string();
        log::info!("Extracted {} plan steps", steps.len());

        let log_analysis = self
            .complete_with_retry(
                self.agent_model.as_ref(),
                ChatRequest::new(
                    AGENT_TEMPERATURE,
                    prompts::LOG_ANALYZER_SYSTEM,
                    MessageContent::Text(prompts::log_analysis_prompt(&step_listing)),
                ),
            )
            .await?;

        let (records, from_cache) = self.screenshot_analysis(params).await?;

        let summaries = summarize_records(&records);
        log::info!(
            "Cross-checking {} screenshot summaries against the log analysis",
            summaries.len()
        );

        let initial_cross_check = self
            .complete_with_retry(
                self.cross_check_model.as_ref(),
                ChatRequest::new(
                    CROSS_CHECK_TEMPERATURE,
                    prompts::CROSS_CHECK_SYSTEM,
                    MessageContent::Text(prompts::cross_check_prompt(&log_analysis, &summaries)),
                ),
            )
            .await?;

        let conclusions = split_conclusions(&initial_cross_check);
        log::info!("Verifying {} cross-check conclusions", conclusions.len());

        let verification = self
            .complete_with_retry(
                self.cross_check_model.as_ref(),
                ChatRequest::new(
                    CROSS_CHECK_TEMPERATURE,
                    prompts::VERIFICATION_SYSTEM,
                    MessageContent::Text(prompts::verification_prompt(&conclusions, &summaries)),
                ),
            )
            .await?;

        Ok(Report {
            steps,
            log_analysis,
            records,
            from_cache,
            initial_cross_check,
            conclusions,
            verification,
        })
    }

    /// Produces the screenshot analysis, from cache when permitted.
    ///
    /// An unreadable cache file degrades to a fresh analysis with a
    /// warning; "absent" and "unreadable" stay distinguishable in the
    /// logs.
    async fn screenshot_analysis(&self, params: &RunParams) -> Result<(Vec<AnalysisRecord>, bool)> {
        if params.use_cached_analysis {
            match cache::load(&self.cache_dir, &params.test_name, &params.run_id) {
                Ok(Some(records)) => return Ok((records, true)),
                Ok(None) => {
                    log::info!("No existing analysis found, running new analysis");
                }
                Err(err) => {
                    log::warn!("Ignoring unreadable analysis cache: {err}");
                }
            }
        }

        let dir = artifacts::screenshots_dir(&self.proof_root, &params.test_name, &params.run_id);
        let screenshots = list_screenshots(&dir)?;
        log::info!("Analyzing {} screenshots from {}", screenshots.len(), dir.display());

        let mut records = Vec::new();
        for path in &screenshots {
            match self.analyze_screenshot(path).await {
                Ok(record) => {
                    log::info!("Analyzed {}", path.display());
                    records.push(record);
                }
                Err(err) => {
                    // One bad screenshot never fails the others.
                    log::warn!("Skipping screenshot {}: {err}", path.display());
                }
            }
        }

        if let Err(err) = cache::save(&self.cache_dir, &params.test_name, &params.run_id, &records)
        {
            log::warn!("Failed to save analysis cache: {err}");
        }

        Ok((records, false))
    }

    /// Runs one vision call for a single screenshot file.
    async fn analyze_screenshot(&self, path: &Path) -> Result<AnalysisRecord> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AnalyzerError::InvalidFilename {
                filename: path.display().to_string(),
            })?;

        // Strict validation happens here, not at listing time.
        let shot = parse_screenshot_name(filename)?;

        let bytes = std::fs::read(path).map_err(|e| AnalyzerError::file_system(path, e))?;
        let data_url = format!("data:image/png;base64,{}", BASE64.encode(bytes));

        let analysis = self
            .complete_with_retry(
                self.agent_model.as_ref(),
                ChatRequest::new(
                    AGENT_TEMPERATURE,
                    prompts::SCREENSHOT_ANALYZER_SYSTEM,
                    MessageContent::with_image(
                        prompts::screenshot_analysis_prompt(&shot.action_type),
                        data_url,
                    ),
                ),
            )
            .await?;

        Ok(AnalysisRecord {
            screenshot: path.display().to_string(),
            analysis,
        })
    }

    async fn complete_with_retry(
        &self,
        model: &dyn ChatModel,
        request: ChatRequest,
    ) -> Result<String> {
        self.retry
            .run(self.sleeper.as_ref(), || model.complete(request.clone()))
            .await
    }
}
