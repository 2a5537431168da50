//! Core library for the Attest UI-test evidence analyzer.
//!
//! Attest cross-checks automated UI-test execution artifacts: a
//! structured execution log (JSON), a directory of before/after
//! screenshots captured during the run, and a reconciliation step that
//! reports plan steps lacking visual evidence.
//!
//! # Architecture
//!
//! The crate separates a small deterministic core from the LLM-backed
//! pipeline around it:
//!
//! - [`extract`]: plan-step extraction from execution logs (pure,
//!   deterministic)
//! - [`screenshot`]: screenshot filename validation and directory
//!   listing (pure, deterministic)
//! - [`artifacts`], [`cache`]: on-disk artifact conventions and the
//!   persisted analysis cache
//! - [`llm`], [`retry`], [`prompts`]: the hosted-model collaborators,
//!   treated as opaque `text -> text` functions behind a retry policy
//! - [`crosscheck`], [`analyzer`]: the reconciliation helpers and the
//!   orchestrating [`Analyzer`]
//! - [`display`]: markdown formatting for all output
//!
//! # Quick Start
//!
//! ```rust
//! use attest_core::extract::extract_steps;
//!
//! let log = r#"{"user_proxy_agent": [
//!     {"name": "planner_agent", "content": {"plan": "1. Open app\n2. Tap search"}}
//! ]}"#;
//!
//! let steps = extract_steps(log)?;
//! assert_eq!(steps.len(), 2);
//! assert_eq!(steps[0].description, "Open app");
//! # Ok::<(), attest_core::AnalyzerError>(())
//! ```

pub mod analyzer;
pub mod artifacts;
pub mod cache;
pub mod crosscheck;
pub mod display;
pub mod error;
pub mod extract;
pub mod llm;
pub mod models;
pub mod params;
pub mod prompts;
pub mod retry;
pub mod screenshot;

// Re-export commonly used types
pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use display::{AnalysisList, StepList};
pub use error::{AnalyzerError, Result};
pub use models::{AnalysisRecord, Phase, PlanStep, RecordSummary, Report, ScreenshotRef};
pub use params::RunParams;
pub use retry::{RetryPolicy, Sleeper, TokioSleeper};
