//! File-level entry points.

use std::path::Path;

use cart_model::RawSheet;
use tracing::{debug, info};

use crate::delimited::read_delimited;
use crate::error::{IngestError, Result};
use crate::format::SheetFormat;
use crate::workbook::read_workbook;

/// Maximum accepted input size (50 MB). Cart exports are a few hundred rows.
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

fn io_error(path: &Path, err: std::io::Error) -> IngestError {
    if err.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Read a cart file into a raw sheet, choosing the decoder by extension.
///
/// Workbooks yield their first worksheet; CSV/TSV cells are all text.
pub fn read_sheet(path: &Path) -> Result<RawSheet> {
    let format = SheetFormat::from_path(path)?;
    check_file_size(path)?;
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), %format, "read input file");

    let sheet = read_sheet_from_bytes(&bytes, format)?;
    info!(
        path = %path.display(),
        rows = sheet.row_count(),
        columns = sheet.column_count(),
        "loaded sheet"
    );
    Ok(sheet)
}

/// Decode an in-memory file of a known format.
pub fn read_sheet_from_bytes(bytes: &[u8], format: SheetFormat) -> Result<RawSheet> {
    match format.delimiter() {
        Some(delimiter) => read_delimited(bytes, delimiter),
        None => read_workbook(bytes),
    }
}
