//! Input format detection.

use std::fmt;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Container format of a cart file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// Any workbook calamine can open (xlsx, xlsm, xlsb, xls, ods).
    Workbook,
    /// Comma-separated text.
    Csv,
    /// Tab-separated text.
    Tsv,
}

impl SheetFormat {
    /// Format for a file extension, case-insensitive.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(Self::Workbook),
            "csv" => Some(Self::Csv),
            "tsv" | "tab" => Some(Self::Tsv),
            _ => None,
        }
    }

    /// Format for a path, from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(extension).ok_or_else(|| IngestError::UnsupportedFormat {
            extension: extension.to_string(),
        })
    }

    /// Field delimiter for text formats.
    pub fn delimiter(self) -> Option<u8> {
        match self {
            Self::Workbook => None,
            Self::Csv => Some(b','),
            Self::Tsv => Some(b'\t'),
        }
    }
}

impl fmt::Display for SheetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Workbook => write!(f, "workbook"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}
