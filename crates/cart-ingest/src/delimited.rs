//! CSV/TSV decoding.
//!
//! Cart exports saved from Korean spreadsheet tools are often EUC-KR
//! (code page 949) rather than UTF-8; both are accepted.

use std::borrow::Cow;

use cart_model::{CellValue, RawSheet};
use csv::ReaderBuilder;
use encoding_rs::EUC_KR;
use tracing::debug;

use crate::error::{IngestError, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decode raw bytes into text, rejecting encodings that cannot be read.
pub fn decode_text(bytes: &[u8]) -> Result<Cow<'_, str>> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            encoding: "UTF-16 BE",
        });
    }

    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(Cow::Borrowed(text));
    }

    debug!("input is not UTF-8, decoding as EUC-KR");
    EUC_KR
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or(IngestError::UnsupportedEncoding {
            encoding: "unknown (neither UTF-8 nor EUC-KR)",
        })
}

fn normalize_cell(raw: &str) -> CellValue {
    CellValue::text(raw.trim().trim_matches('\u{feff}'))
}

/// Parse delimited text into a sheet. Every cell is read as text; ragged
/// rows are padded. Records keep the row number of the line they start on,
/// so blank lines stay in the grid as empty rows.
pub fn read_delimited(bytes: &[u8], delimiter: u8) -> Result<RawSheet> {
    let text = decode_text(bytes)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(position) = record.position() {
            let line = position.line() as usize;
            while rows.len() + 1 < line {
                rows.push(Vec::new());
            }
        }
        rows.push(record.iter().map(normalize_cell).collect());
    }

    Ok(RawSheet::from_rows(rows))
}
