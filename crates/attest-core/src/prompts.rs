//! System prompts and user-prompt builders for the analysis agents.

use crate::models::RecordSummary;

/// System prompt for the execution-log analyzer.
pub const LOG_ANALYZER_SYSTEM: &str = "\
# Role and Purpose
You are a Test Execution Log Analyzer, designed to analyze and extract meaningful \
information from test execution logs. Your primary goal is to provide clear, \
structured analysis of test steps and their execution.

# Response Guidelines
- Provide clear, numbered steps in your analysis
- Focus on the sequence of actions and their purposes
- Be precise and technical in your descriptions
- Maintain a structured format in your responses

# Analysis Format
Structure your response as follows:
1. Total number of steps found
2. List of steps with their descriptions
3. Brief summary of the test flow
4. Key actions and their purposes

# Important Notes
- Ensure all steps are properly numbered
- Maintain chronological order of steps
- Focus on the main test flow and actions";

/// System prompt for the per-screenshot analyzer.
pub const SCREENSHOT_ANALYZER_SYSTEM: &str = "\
# Role and Purpose
You are a Test Execution Screenshot Analyzer, designed to analyze and describe \
test execution screenshots. Your primary goal is to provide clear, detailed \
descriptions of what is happening in each screenshot, using the filename as a \
general guide but not a strict requirement.

# Response Guidelines
- Focus on describing what you actually see in the screenshot
- Use the filename as a general guide for context, but don't force exact matches
- Look for specific UI elements and their states
- Describe the current state of the interface

# Analysis Format
Structure your response as follows:
1. Current State Description
2. UI Elements and Their States
3. Visual Context and Layout
4. Notable Interactions or Changes
5. Overall Context Summary

# Important Notes
- The filename provides context but doesn't need to match exactly
- Look for visual indicators of user interactions
- Provide clear, descriptive analysis";

/// System prompt for the cross-check comparison call.
pub const CROSS_CHECK_SYSTEM: &str = "You are a test analysis comparison assistant. \
Focus on identifying only genuine gaps by carefully analyzing the actual content \
of the screenshot analyses. Be precise and avoid making assumptions.";

/// System prompt for the verification pass.
pub const VERIFICATION_SYSTEM: &str = "You are a verification assistant. Your job \
is to fact-check conclusions against the actual screenshot data. Be extremely \
precise and only make claims you can verify.";

/// Builds the user prompt for the log-analysis call.
pub fn log_analysis_prompt(step_listing: &str) -> String {
    format!(
        "Analyze this test execution plan extracted from the log file:\n\n{step_listing}"
    )
}

/// Builds the user prompt for one screenshot-analysis call.
pub fn screenshot_analysis_prompt(action_type: &str) -> String {
    format!(
        "Analyze this screenshot and provide a detailed description of what you see.\n\
         The filename suggests this might be related to a {action_type} action, but \
         focus on describing the actual content.\n\n\
         Please provide:\n\
         1. A clear description of the current state and UI elements\n\
         2. Any visible user interactions or system responses\n\
         3. The overall context and layout of the interface\n\
         4. Any notable changes or transitions visible\n\
         5. A summary of what's happening in this moment\n\n\
         Focus on describing what you actually see, using the filename only as \
         general context."
    )
}

/// Builds the user prompt for the cross-check comparison call.
pub fn cross_check_prompt(log_summary: &str, summaries: &[RecordSummary]) -> String {
    let summary_json =
        serde_json::to_string_pretty(summaries).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Compare these analyses and identify genuine gaps:\n\n\
         Log Analysis:\n{log_summary}\n\n\
         Screenshot Analysis Summary:\n{summary_json}\n\n\
         Please provide a detailed analysis of:\n\
         1. Genuine Missing Evidence: List only steps that are truly missing from \
         screenshots, after verifying the actual content of each screenshot\n\
         2. Actual Sequence Issues: Note only real sequence mismatches, based on \
         the actual content of screenshots\n\
         3. Real Verification Gaps: List only verification steps that are truly \
         missing, after checking the screenshot analysis for verification evidence\n\n\
         Important:\n\
         - Check the actual content of each screenshot before declaring it missing\n\
         - Don't assume a step is missing just because of the filename\n\
         - Look for evidence in the analysis text\n\
         - Consider implicit verifications in the screenshots\n\
         - Focus on what's genuinely missing, not what might be missing\n\n\
         Example of proper analysis:\n\
         BAD: \"No screenshots show login screens\" (incorrect because we have \
         screenshots showing username field filled)\n\
         GOOD: \"The login process is partially captured with username entry, but \
         missing the password entry step\"\n\n\
         Please be this precise in your analysis."
    )
}

/// Builds the user prompt for the verification pass.
pub fn verification_prompt(conclusions: &[String], summaries: &[RecordSummary]) -> String {
    let summary_json =
        serde_json::to_string_pretty(summaries).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Please verify these conclusions against the actual screenshot data:\n\n\
         Conclusions to Verify:\n{}\n\n\
         Screenshot Analysis Summary:\n{summary_json}\n\n\
         For each conclusion, verify if it's correct by checking the actual \
         screenshot data. Format your response as:\n\n\
         VERIFICATION RESULTS:\n\n\
         1. Confirmed Conclusions (with evidence):\n\
            - List conclusions that are accurate with screenshot evidence\n\
            - Include the specific screenshot number/ID where the evidence was found\n\n\
         2. Incorrect Conclusions (with actual evidence):\n\
            - List conclusions that were wrong with screenshot evidence\n\
            - Specify which screenshots were checked and what was actually found\n\
            - If a step is missing, identify between which screenshots it should \
         have occurred\n\n\
         3. Final Summary:\n\
            - List each missing step and specify:\n\
              * Between which screenshots it should have occurred\n\
              * What evidence we have before and after the missing step\n\
              * Any partial evidence of the step being attempted\n\n\
         Be extremely precise and only make claims you can verify with the actual data.",
        conclusions.join("\n")
    )
}
