//! Final discrepancy report model.

use serde::{Deserialize, Serialize};

use super::{AnalysisRecord, PlanStep};

/// The assembled output of one full analysis run.
///
/// Collects every stage's artifact so the display layer can render a
/// single markdown document. The record list is either freshly produced
/// or loaded verbatim from the analysis cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Plan steps extracted from the execution log
    pub steps: Vec<PlanStep>,

    /// Free-text log analysis produced by the log analyzer model
    pub log_analysis: String,

    /// Per-screenshot analyses (fresh or cached)
    pub records: Vec<AnalysisRecord>,

    /// Whether `records` was served from the analysis cache
    pub from_cache: bool,

    /// Raw cross-check response, including any chain-of-thought block
    pub initial_cross_check: String,

    /// Conclusions isolated from the cross-check response
    pub conclusions: Vec<String>,

    /// Verification of the conclusions against the screenshot data
    pub verification: String,
}
