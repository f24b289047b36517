//! Request-fatal merge failures.
//!
//! Each variant maps to one stable wire code rendered by the transport
//! layer. Any of these aborts the whole merge; no partial output is ever
//! returned.

use thiserror::Error;

use crate::naming::NameCollision;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("No files uploaded.")]
    NoFiles,

    #[error("Too many files. Max {max} files.")]
    TooManyFiles { max: usize },

    #[error("File '{file_name}' exceeds {max} bytes.")]
    PayloadTooLarge { file_name: String, max: u64 },

    #[error("Unsupported file type for '{file_name}'. Only .xlsx allowed.")]
    InvalidFileType { file_name: String },

    #[error("'{file_name}' is not a valid .xlsx or is corrupted.")]
    InvalidWorkbook { file_name: String },

    #[error("Too many worksheets in total. Max {max}.")]
    TooManyWorksheets { max: usize },

    #[error(transparent)]
    NameCollision(#[from] NameCollision),

    #[error("Failed to serialize the merged workbook: {0}")]
    Save(String),
}

impl MergeError {
    /// Stable error code for the transport envelope.
    pub fn code(&self) -> &'static str {
        match self {
            MergeError::NoFiles => "NoFiles",
            MergeError::TooManyFiles { .. } => "TooManyFiles",
            MergeError::PayloadTooLarge { .. } => "PayloadTooLarge",
            MergeError::InvalidFileType { .. } => "InvalidFileType",
            MergeError::InvalidWorkbook { .. } => "InvalidWorkbook",
            MergeError::TooManyWorksheets { .. } => "TooManyWorksheets",
            MergeError::NameCollision(_) => "NameCollision",
            MergeError::Save(_) => "InternalError",
        }
    }
}
