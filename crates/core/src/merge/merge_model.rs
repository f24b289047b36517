//! Data carried into and out of one merge call.

use crate::constants::{MAX_FILES, MAX_FILE_BYTES, MAX_SHEETS_TOTAL, MERGED_FILE_NAME, XLSX_CONTENT_TYPE};

/// One uploaded file, fully buffered in memory.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// File name as declared by the uploader (may contain a path).
    pub file_name: String,
    /// Declared content type, if any.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the upload looks like an xlsx workbook, by declared content
    /// type or by file extension.
    pub fn is_spreadsheet(&self) -> bool {
        let by_type = self
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("spreadsheet"));
        by_type || self.file_name.to_ascii_lowercase().ends_with(".xlsx")
    }
}

/// The merged output, ready for the transport layer to return.
#[derive(Debug, Clone)]
pub struct MergedWorkbook {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl MergedWorkbook {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self {
            file_name: MERGED_FILE_NAME.to_string(),
            content_type: XLSX_CONTENT_TYPE,
            bytes,
        }
    }
}

/// Resource limits enforced per merge call.
///
/// The defaults are the service's fixed policy; non-default values exist for
/// tests.
#[derive(Debug, Clone, Copy)]
pub struct MergeLimits {
    pub max_files: usize,
    pub max_file_bytes: u64,
    pub max_sheets_total: usize,
}

impl Default for MergeLimits {
    fn default() -> Self {
        Self {
            max_files: MAX_FILES,
            max_file_bytes: MAX_FILE_BYTES,
            max_sheets_total: MAX_SHEETS_TOTAL,
        }
    }
}
