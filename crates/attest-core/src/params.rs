//! Parameter structures for analyzer operations.
//!
//! Shared parameter types that interface layers (CLI today, other
//! frontends later) convert their framework-specific argument structs
//! into. Core types stay free of clap derives; the CLI wraps them and
//! converts via `From`.

use serde::{Deserialize, Serialize};

/// Parameters for one full analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunParams {
    /// Test name identifying the artifact tree
    pub test_name: String,

    /// Run identifier within the test's artifacts
    pub run_id: String,

    /// Whether to reuse a cached screenshot analysis when one exists.
    ///
    /// When `true` (the default mode) and the cache file for
    /// `(test_name, run_id)` is present, its records are trusted
    /// verbatim and no vision calls are made.
    pub use_cached_analysis: bool,
}
