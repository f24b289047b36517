//! Assembly of the merged output workbook.

use calamine::{Data, Range};
use rust_xlsxwriter::Workbook;

use crate::workbook::WorkbookError;

/// The output workbook under assembly.
///
/// Copies transfer cell values (strings, numbers, booleans, datetime
/// serials) at their absolute positions; formatting and formulas are not
/// preserved.
pub struct OutputWorkbook {
    inner: Workbook,
    sheets: usize,
}

impl OutputWorkbook {
    pub fn new() -> Self {
        Self {
            inner: Workbook::new(),
            sheets: 0,
        }
    }

    /// Copies one source worksheet into the output under `name`.
    pub fn copy_sheet(&mut self, name: &str, range: &Range<Data>) -> Result<(), WorkbookError> {
        let sheet = self.inner.add_worksheet();
        sheet.set_name(name)?;
        self.sheets += 1;

        let (start_row, start_col) = match range.start() {
            Some(start) => start,
            None => return Ok(()), // empty sheet: nothing to copy
        };

        for (row, col, cell) in range.used_cells() {
            let row = start_row + row as u32;
            let col = (start_col + col as u32) as u16;
            match cell {
                Data::Empty => {}
                Data::String(s) => {
                    sheet.write_string(row, col, s.as_str())?;
                }
                Data::Float(f) => {
                    sheet.write_number(row, col, *f)?;
                }
                Data::Int(i) => {
                    sheet.write_number(row, col, *i as f64)?;
                }
                Data::Bool(b) => {
                    sheet.write_boolean(row, col, *b)?;
                }
                Data::DateTime(dt) => {
                    sheet.write_number(row, col, dt.as_f64())?;
                }
                Data::DateTimeIso(s) | Data::DurationIso(s) => {
                    sheet.write_string(row, col, s.as_str())?;
                }
                Data::Error(e) => {
                    sheet.write_string(row, col, e.to_string())?;
                }
            }
        }

        Ok(())
    }

    /// Serializes the workbook. The xlsx format requires at least one
    /// worksheet, so an output that never received a copy gets one blank
    /// default sheet.
    pub fn save_to_buffer(&mut self) -> Result<Vec<u8>, WorkbookError> {
        if self.sheets == 0 {
            self.inner.add_worksheet();
        }
        Ok(self.inner.save_to_buffer()?)
    }
}

impl Default for OutputWorkbook {
    fn default() -> Self {
        Self::new()
    }
}
