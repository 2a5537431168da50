//! Builder for creating and configuring Analyzer instances.

use std::path::{Path, PathBuf};

use super::Analyzer;
use crate::{
    error::{AnalyzerError, Result},
    llm::ChatModel,
    retry::{RetryPolicy, Sleeper, TokioSleeper},
};

/// Default root of the execution log tree.
const DEFAULT_LOG_ROOT: &str = "opt/log_files";

/// Default root of the proof (screenshot) tree.
const DEFAULT_PROOF_ROOT: &str = "opt/proofs";

/// Builder for creating and configuring Analyzer instances.
///
/// The two model endpoints are required; everything else has a
/// default. The cache directory defaults to the XDG data directory
/// (`$XDG_DATA_HOME/attest/analysis_logs`).
pub struct AnalyzerBuilder {
    log_root: Option<PathBuf>,
    proof_root: Option<PathBuf>,
    cache_dir: Option<PathBuf>,
    agent_model: Option<Box<dyn ChatModel>>,
    cross_check_model: Option<Box<dyn ChatModel>>,
    retry: RetryPolicy,
    sleeper: Box<dyn Sleeper>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            log_root: None,
            proof_root: None,
            cache_dir: None,
            agent_model: None,
            cross_check_model: None,
            retry: RetryPolicy::default(),
            sleeper: Box::new(TokioSleeper),
        }
    }

    /// Sets the root of the execution log tree.
    pub fn with_log_root<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.log_root = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the root of the proof (screenshot) tree.
    pub fn with_proof_root<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.proof_root = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a custom analysis cache directory.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/attest/analysis_logs`
    pub fn with_cache_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.cache_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the model used by the log and screenshot analyzer agents.
    pub fn with_agent_model(mut self, model: Box<dyn ChatModel>) -> Self {
        self.agent_model = Some(model);
        self
    }

    /// Sets the model used for cross-check and verification calls.
    pub fn with_cross_check_model(mut self, model: Box<dyn ChatModel>) -> Self {
        self.cross_check_model = Some(model);
        self
    }

    /// Overrides the retry policy for model calls.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Overrides the delay source (tests use a non-sleeping fake).
    pub fn with_sleeper(mut self, sleeper: Box<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Builds the configured analyzer instance.
    ///
    /// # Errors
    ///
    /// Returns `AnalyzerError::Configuration` when a required model is
    /// missing and `AnalyzerError::XdgDirectory` when the default cache
    /// directory cannot be resolved.
    pub fn build(self) -> Result<Analyzer> {
        let agent_model = self
            .agent_model
            .ok_or_else(|| AnalyzerError::configuration("agent model is required"))?;
        let cross_check_model = self
            .cross_check_model
            .ok_or_else(|| AnalyzerError::configuration("cross-check model is required"))?;

        let cache_dir = match self.cache_dir {
            Some(dir) => dir,
            None => Self::default_cache_dir()?,
        };

        Ok(Analyzer {
            log_root: self
                .log_root
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_ROOT)),
            proof_root: self
                .proof_root
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PROOF_ROOT)),
            cache_dir,
            agent_model,
            cross_check_model,
            retry: self.retry,
            sleeper: self.sleeper,
        })
    }

    /// Returns the default cache directory following XDG Base Directory
    /// specification.
    fn default_cache_dir() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("attest")
            .create_data_directory("analysis_logs")
            .map_err(|e| AnalyzerError::XdgDirectory(e.to_string()))
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
