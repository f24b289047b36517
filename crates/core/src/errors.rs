//! Root error types for the merge engine.

use thiserror::Error;

use crate::merge::MergeError;
use crate::workbook::WorkbookError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the merge engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Merge failed: {0}")]
    Merge(#[from] MergeError),

    #[error("Workbook operation failed: {0}")]
    Workbook(#[from] WorkbookError),
}
