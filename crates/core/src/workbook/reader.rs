//! Decoding of uploaded workbooks.

use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};

use crate::workbook::WorkbookError;

/// An uploaded workbook, decoded over its in-memory bytes.
pub struct SourceWorkbook<'a> {
    inner: Xlsx<Cursor<&'a [u8]>>,
}

impl<'a> SourceWorkbook<'a> {
    /// Opens a workbook from the raw upload bytes. Any container or format
    /// problem surfaces as a single decode error.
    pub fn open(bytes: &'a [u8]) -> Result<Self, WorkbookError> {
        let inner = Xlsx::new(Cursor::new(bytes))?;
        Ok(Self { inner })
    }

    /// Worksheet names in the workbook's internal order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names()
    }

    /// The cell range of one worksheet.
    pub fn worksheet_range(&mut self, name: &str) -> Result<Range<Data>, WorkbookError> {
        Ok(self.inner.worksheet_range(name)?)
    }
}
