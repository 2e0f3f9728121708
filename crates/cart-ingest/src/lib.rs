//! Spreadsheet ingestion for cart exports.
//!
//! Turns a vendor file into a [`RawSheet`](cart_model::RawSheet): the first
//! worksheet of an xlsx/xlsm/xlsb/xls/ods workbook, or the rows of a CSV/TSV
//! file (UTF-8 or EUC-KR).

#![deny(unsafe_code)]

mod delimited;
mod error;
mod format;
mod reader;
mod workbook;

pub use delimited::{decode_text, read_delimited};
pub use error::{IngestError, Result};
pub use format::SheetFormat;
pub use reader::{
    MAX_FILE_SIZE, check_file_size, check_file_size_with_limit, read_sheet,
    read_sheet_from_bytes,
};
pub use workbook::{convert_cell, read_workbook};
