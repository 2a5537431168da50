//! Plan step model definition.

use serde::{Deserialize, Serialize};

/// Represents one numbered line item of a textual test plan.
///
/// Steps are constructed transiently during one parse of one execution
/// log and are immutable after creation. The sequence order follows the
/// textual order of the plan, not the numeric value of `step_number`;
/// callers that need numeric order must sort themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanStep {
    /// Step number taken verbatim from the plan text (not renumbered)
    pub step_number: u32,

    /// Remainder of the plan line after the numeric prefix, trimmed
    pub description: String,
}

impl PlanStep {
    /// Creates a new plan step.
    pub fn new(step_number: u32, description: impl Into<String>) -> Self {
        Self {
            step_number,
            description: description.into(),
        }
    }
}
