//! Display formatting for analysis output.
//!
//! Domain models implement [`std::fmt::Display`] directly
//! ([`models`]), while newtype wrappers ([`collections`]) format
//! collections with surrounding context. All formatters produce
//! markdown so the CLI's terminal renderer and plain-text output share
//! one code path.
//!
//! - [`collections`]: wrappers for step and record collections
//! - [`models`]: Display implementations for domain models
//! - [`report`]: the assembled report document

pub mod collections;
pub mod models;
pub mod report;

pub use collections::{AnalysisList, StepList};
