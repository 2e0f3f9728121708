//! Error types for spreadsheet ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a cart file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, larger than the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Format Errors ===
    /// Extension is not a known spreadsheet format.
    #[error("unsupported file format '{extension}' (expected xlsx, xlsm, xlsb, xls, ods, csv or tsv)")]
    UnsupportedFormat { extension: String },

    /// Text encoding that cannot be decoded.
    #[error("unsupported text encoding: {encoding}; save the file as UTF-8 CSV")]
    UnsupportedEncoding { encoding: &'static str },

    // === Decoding Errors ===
    /// The workbook could not be opened or a sheet could not be read.
    #[error("failed to read workbook: {message}")]
    Workbook { message: String },

    /// The workbook contains no worksheet.
    #[error("workbook contains no worksheet")]
    NoWorksheet,

    /// Malformed delimited text.
    #[error("failed to parse CSV: {message}")]
    CsvParse { message: String },
}

impl From<calamine::Error> for IngestError {
    fn from(err: calamine::Error) -> Self {
        Self::Workbook {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        Self::CsvParse {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
