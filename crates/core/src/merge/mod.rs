//! Merge module - request model, errors, and the orchestration service.

mod merge_errors;
mod merge_model;
mod merge_service;

#[cfg(test)]
mod merge_service_tests;

pub use merge_errors::MergeError;
pub use merge_model::{MergeLimits, MergedWorkbook, UploadedFile};
pub use merge_service::{MergeService, MergeServiceTrait};
