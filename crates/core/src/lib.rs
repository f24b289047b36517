//! ReportingHub Core - workbook merge engine.
//!
//! This crate contains the merge business logic: naming-rule parsing and
//! resolution, sheet-name sanitization, collision handling, and the merge
//! orchestration itself. It is transport-agnostic; the HTTP layer lives in
//! the `reportinghub-server` crate.

pub mod constants;
pub mod errors;
pub mod merge;
pub mod naming;
pub mod workbook;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
