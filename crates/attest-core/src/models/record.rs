//! Per-screenshot analysis records and their condensed summaries.

use serde::{Deserialize, Serialize};

/// One entry of the persisted screenshot analysis.
///
/// This is the flat cache format written to
/// `video_analysis_<test_name>_<run_id>.json`: a JSON array of these
/// records, keyed by `(test_name, run_id)` through the filename. When the
/// file exists it is trusted verbatim regardless of age or completeness.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisRecord {
    /// Path of the analyzed screenshot
    pub screenshot: String,

    /// Free-text analysis returned by the vision model
    pub analysis: String,
}

/// Condensed view of an [`AnalysisRecord`] used in cross-check prompts.
///
/// Holds the three structured lines the screenshot analyzer is prompted
/// to produce. A field is empty when the analysis text lacks the
/// corresponding section marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordSummary {
    /// Path of the analyzed screenshot
    pub screenshot: String,

    /// The "Current State Description" line, if present
    pub current_state: String,

    /// The "UI Elements and Their States" line, if present
    pub ui_elements: String,

    /// The "Notable Interactions or Changes" line, if present
    pub interactions: String,
}
