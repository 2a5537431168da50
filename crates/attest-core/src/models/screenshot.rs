//! Screenshot reference model and capture-phase enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of capture phases.
///
/// Every screenshot is taken either immediately before (`start`) or
/// immediately after (`end`) the action named in its filename.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Captured before the action was performed
    Start,

    /// Captured after the action completed
    End,
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Phase::Start),
            "end" => Ok(Phase::End),
            _ => Err(format!("Invalid capture phase: {s}")),
        }
    }
}

impl Phase {
    /// Convert to the string form used in filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::End => "end",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a screenshot, derived entirely from its filename.
///
/// Recomputed on every parse and never cached; the file content is not
/// inspected here. The timestamp is kept as an opaque digit string: the
/// chronological ordering of a run relies on the lexical sort of
/// filenames, which is only correct when timestamps are encoded as
/// order-preserving digit strings. That property is assumed, not
/// validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScreenshotRef {
    /// Action named in the filename prefix (word characters only)
    pub action_type: String,

    /// Capture phase relative to the action
    pub phase: Phase,

    /// Opaque digit string used only as a sortable token
    pub timestamp: String,
}
