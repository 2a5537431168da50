//! Plan-step extraction from test-execution logs.
//!
//! An execution log is a JSON document whose root mapping holds, under
//! [`MESSAGES_KEY`], the ordered message transcript of a test run. The
//! extractor locates the first planning message in that transcript and
//! splits its embedded multi-line plan into numbered steps.
//!
//! The function is total over its text input: only fundamentally
//! non-parseable JSON is an error ([`AnalyzerError::MalformedInput`]).
//! Every structural surprise below that point, such as a missing root
//! key or a malformed plan line, degrades to an empty or
//! partial result instead of failing the whole document. A log with zero
//! qualifying messages deliberately yields an empty sequence, not an
//! error, so "no findings" and "could not parse" stay distinguishable.

use serde_json::Value;

use crate::{
    error::{AnalyzerError, Result},
    models::PlanStep,
};

/// Root key holding the ordered message transcript.
pub const MESSAGES_KEY: &str = "user_proxy_agent";

/// `name` value identifying the planning agent's messages.
pub const PLANNER_NAME: &str = "planner_agent";

/// Extracts plan steps from the raw text of an execution log.
///
/// Scans the message transcript in document order and selects the first
/// message whose `name` equals [`PLANNER_NAME`] and whose `content` is a
/// mapping containing a `plan` key. Scanning stops at that envelope even
/// if its plan text yields no steps; later planning messages are never
/// inspected.
///
/// Steps are returned in the textual order of the plan. The numeric
/// prefixes are taken verbatim, so an out-of-order plan ("3. Foo" before
/// "1. Bar") produces steps in that same out-of-order sequence.
///
/// # Errors
///
/// Returns [`AnalyzerError::MalformedInput`] when `log_text` is not
/// syntactically valid JSON. No other failure mode exists.
pub fn extract_steps(log_text: &str) -> Result<Vec<PlanStep>> {
    let document: Value =
        serde_json::from_str(log_text).map_err(|source| AnalyzerError::MalformedInput { source })?;

    let Some(messages) = document.get(MESSAGES_KEY).and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    let Some(plan) = first_plan(messages) else {
        return Ok(Vec::new());
    };

    Ok(parse_plan_text(plan))
}

/// Returns the `plan` text of the first qualifying planner message.
fn first_plan(messages: &[Value]) -> Option<&str> {
    messages
        .iter()
        .find(|msg| {
            msg.get("name").and_then(Value::as_str) == Some(PLANNER_NAME)
                && msg
                    .get("content")
                    .and_then(Value::as_object)
                    .is_some_and(|content| content.contains_key("plan"))
        })
        .and_then(|msg| msg.get("content"))
        .and_then(|content| content.get("plan"))
        .and_then(Value::as_str)
}

/// Splits a multi-line plan into numbered steps, best effort.
///
/// Only lines whose very first character is an ASCII digit are
/// considered; an indented numbered line is prose, not a step. Each
/// candidate is split on the first period; lines that do not yield two
/// non-empty parts, or whose left part is not an integer, are skipped
/// individually and never abort the rest of the plan.
fn parse_plan_text(plan: &str) -> Vec<PlanStep> {
    let mut steps = Vec::new();

    for line in plan.lines() {
        // The digit check runs on the untrimmed line.
        if !line.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            continue;
        }

        let Some((number, description)) = line.split_once('.') else {
            log::debug!("Skipping plan line without a numbered prefix: {line:?}");
            continue;
        };

        let description = description.trim();
        if description.is_empty() {
            log::debug!("Skipping plan line with an empty description: {line:?}");
            continue;
        }

        match number.trim().parse::<u32>() {
            Ok(step_number) => steps.push(PlanStep::new(step_number, description)),
            Err(_) => {
                log::debug!("Skipping plan line with a non-numeric prefix: {line:?}");
            }
        }
    }

    steps
}
