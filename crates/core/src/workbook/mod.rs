//! Workbook module - thin adapter over the spreadsheet codecs.
//!
//! The orchestrator only needs three capabilities: open a workbook from
//! bytes, copy a worksheet into the output, and serialize the output.
//! Reading goes through `calamine`, writing through `rust_xlsxwriter`.

mod reader;
mod writer;

pub use reader::SourceWorkbook;
pub use writer::OutputWorkbook;

use thiserror::Error;

/// Errors from the underlying spreadsheet libraries.
#[derive(Error, Debug)]
pub enum WorkbookError {
    #[error("failed to read workbook: {0}")]
    Read(#[from] calamine::XlsxError),

    #[error("failed to write workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
}
