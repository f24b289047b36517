/// Default naming pattern applied when the caller supplies none.
pub const DEFAULT_PATTERN: &str = "{file}_{sheet}";

/// Wildcard key inside a per-file sheet map.
pub const WILDCARD_KEY: &str = "*";

/// Maximum sheet-name length accepted by the xlsx format.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Maximum number of uploaded files per merge request.
pub const MAX_FILES: usize = 20;

/// Maximum size of a single uploaded file.
pub const MAX_FILE_BYTES: u64 = 256 * 1024 * 1024;

/// Maximum number of worksheets across all uploaded files combined.
pub const MAX_SHEETS_TOTAL: usize = 200;

/// Content type of the merged output (.xlsx).
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// File name suggested for the merged output.
pub const MERGED_FILE_NAME: &str = "merged.xlsx";
