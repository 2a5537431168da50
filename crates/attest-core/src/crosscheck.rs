//! Deterministic helpers for the cross-check reconciliation step.
//!
//! The cross-check itself is a model call; what is testable here is the
//! preparation of its inputs (condensing per-screenshot analyses into
//! the three structured lines the prompt relies on) and the handling of
//! its output (isolating conclusions from a reasoning model's
//! chain-of-thought block).

use crate::models::{AnalysisRecord, RecordSummary};

/// Marker closing a reasoning model's chain-of-thought block.
const THINK_END_MARKER: &str = "</think>";

/// Section markers the screenshot analyzer is prompted to emit.
const CURRENT_STATE_MARKER: &str = "Current State Description";
const UI_ELEMENTS_MARKER: &str = "UI Elements and Their States";
const INTERACTIONS_MARKER: &str = "Notable Interactions or Changes";

/// Condenses analysis records into cross-check prompt summaries.
///
/// For each record, picks the first line containing each section marker;
/// a missing section yields an empty string rather than dropping the
/// record.
pub fn summarize_records(records: &[AnalysisRecord]) -> Vec<RecordSummary> {
    records
        .iter()
        .map(|record| RecordSummary {
            screenshot: record.screenshot.clone(),
            current_state: marker_line(&record.analysis, CURRENT_STATE_MARKER),
            ui_elements: marker_line(&record.analysis, UI_ELEMENTS_MARKER),
            interactions: marker_line(&record.analysis, INTERACTIONS_MARKER),
        })
        .collect()
}

/// Returns the first line of `text` containing `marker`, or empty.
fn marker_line(text: &str, marker: &str) -> String {
    text.lines()
        .find(|line| line.contains(marker))
        .unwrap_or_default()
        .to_string()
}

/// Isolates a model response's conclusions from its reasoning block.
///
/// Returns the trimmed, non-blank lines after the first line containing
/// the `</think>` marker. When no marker is present the response has no
/// chain-of-thought to strip, so every non-blank line counts as a
/// conclusion.
pub fn split_conclusions(response: &str) -> Vec<String> {
    let mut found_marker = false;
    let mut conclusions = Vec::new();

    for line in response.lines() {
        let line = line.trim();
        if line.contains(THINK_END_MARKER) {
            if !found_marker {
                found_marker = true;
                conclusions.clear();
            }
            continue;
        }
        if !line.is_empty() {
            conclusions.push(line.to_string());
        }
    }

    conclusions
}
