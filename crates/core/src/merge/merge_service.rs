//! Merge orchestration.

use log::warn;

use crate::merge::{MergeError, MergeLimits, MergedWorkbook, UploadedFile};
use crate::naming::{parse_naming_rules, resolve_name, safe_sheet_name, UsedNames};
use crate::workbook::{OutputWorkbook, SourceWorkbook};

/// Seam between the transport layer and the merge engine.
pub trait MergeServiceTrait: Send + Sync {
    /// Merges the uploaded workbooks into one, renaming every worksheet
    /// according to the raw naming configuration.
    fn merge(
        &self,
        files: &[UploadedFile],
        raw_rules: Option<&str>,
    ) -> Result<MergedWorkbook, MergeError>;
}

/// Default implementation, parameterized only by its resource limits.
///
/// The service holds no request state: every call builds its own
/// [`UsedNames`] accumulator and worksheet counter, so concurrent requests
/// never share anything.
pub struct MergeService {
    limits: MergeLimits,
}

impl MergeService {
    pub fn new() -> Self {
        Self {
            limits: MergeLimits::default(),
        }
    }

    pub fn with_limits(limits: MergeLimits) -> Self {
        Self { limits }
    }
}

impl Default for MergeService {
    fn default() -> Self {
        Self::new()
    }
}

impl MergeServiceTrait for MergeService {
    fn merge(
        &self,
        files: &[UploadedFile],
        raw_rules: Option<&str>,
    ) -> Result<MergedWorkbook, MergeError> {
        let rules = parse_naming_rules(raw_rules);

        if files.is_empty() {
            return Err(MergeError::NoFiles);
        }
        if files.len() > self.limits.max_files {
            return Err(MergeError::TooManyFiles {
                max: self.limits.max_files,
            });
        }

        let mut output = OutputWorkbook::new();
        let mut used_names = UsedNames::new();
        let mut total_sheets = 0usize;

        for file in files {
            if file.is_empty() {
                continue;
            }
            if file.len() > self.limits.max_file_bytes {
                return Err(MergeError::PayloadTooLarge {
                    file_name: file.file_name.clone(),
                    max: self.limits.max_file_bytes,
                });
            }
            if !file.is_spreadsheet() {
                return Err(MergeError::InvalidFileType {
                    file_name: file.file_name.clone(),
                });
            }

            let mut source = SourceWorkbook::open(&file.bytes).map_err(|err| {
                warn!("failed to open '{}': {}", file.file_name, err);
                MergeError::InvalidWorkbook {
                    file_name: file.file_name.clone(),
                }
            })?;

            for sheet_name in source.sheet_names() {
                total_sheets += 1;
                if total_sheets > self.limits.max_sheets_total {
                    return Err(MergeError::TooManyWorksheets {
                        max: self.limits.max_sheets_total,
                    });
                }

                let proposed = resolve_name(&rules, &file.file_name, &sheet_name);
                let safe = safe_sheet_name(&proposed);
                let final_name = used_names.reserve(&safe, rules.collision)?;

                let range = source.worksheet_range(&sheet_name).map_err(|err| {
                    warn!("failed to read '{}' from '{}': {}", sheet_name, file.file_name, err);
                    MergeError::InvalidWorkbook {
                        file_name: file.file_name.clone(),
                    }
                })?;
                output.copy_sheet(&final_name, &range).map_err(|err| {
                    warn!("failed to copy '{}' from '{}': {}", sheet_name, file.file_name, err);
                    MergeError::InvalidWorkbook {
                        file_name: file.file_name.clone(),
                    }
                })?;
            }
        }

        let bytes = output
            .save_to_buffer()
            .map_err(|err| MergeError::Save(err.to_string()))?;
        Ok(MergedWorkbook::new(bytes))
    }
}
