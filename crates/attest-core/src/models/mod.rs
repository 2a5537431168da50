//! Data models for test-plan steps, screenshot references, and analysis
//! artifacts.
//!
//! This module contains the core domain models of the attest system.
//! Display implementations live in [`crate::display`] to keep data
//! structures separate from presentation logic.
//!
//! Two of these models form the deterministic core of the system:
//!
//! - [`PlanStep`]: one numbered line item of a textual test plan,
//!   produced by [`crate::extract::extract_steps`]
//! - [`ScreenshotRef`]: the action/phase/timestamp triple recovered from
//!   a screenshot filename by
//!   [`crate::screenshot::parse_screenshot_name`]
//!
//! The remaining models carry the artifacts of the LLM-backed analysis
//! pipeline: per-screenshot analysis records (the flat cache format),
//! their condensed summaries used in cross-check prompts, and the final
//! report.

pub mod record;
pub mod report;
pub mod screenshot;
pub mod step;

pub use record::{AnalysisRecord, RecordSummary};
pub use report::Report;
pub use screenshot::{Phase, ScreenshotRef};
pub use step::PlanStep;
