//! Workbook decoding through calamine.

use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use cart_model::{CellValue, RawSheet};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Decode the first worksheet of an xlsx/xlsm/xlsb/xls/ods workbook.
pub fn read_workbook(bytes: &[u8]) -> Result<RawSheet> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let names = workbook.sheet_names();
    if let Some(name) = names.first() {
        debug!(sheet = %name, sheets = names.len(), "reading first worksheet");
    }

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(IngestError::NoWorksheet)??;
    Ok(RawSheet::from_rows(range_rows(&range)))
}

/// Rows of a range placed at their absolute sheet position, so that row 1
/// is always the first row of the worksheet even when the used range starts
/// further down.
fn range_rows(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); start_row as usize];
    for source in range.rows() {
        let mut row = vec![CellValue::Empty; start_col as usize];
        row.extend(source.iter().map(convert_cell));
        rows.push(row);
    }
    rows
}

/// Map a calamine cell onto the cart cell model.
pub fn convert_cell(value: &Data) -> CellValue {
    match value {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Float(v) => CellValue::Number(*v),
        Data::String(v) | Data::DateTimeIso(v) | Data::DurationIso(v) => {
            CellValue::text(v.as_str())
        }
        Data::Bool(v) => CellValue::text(if *v { "TRUE" } else { "FALSE" }),
        Data::DateTime(v) => CellValue::Number(v.as_f64()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_cell() {
        assert_eq!(convert_cell(&Data::Empty), CellValue::Empty);
        assert_eq!(convert_cell(&Data::Int(3)), CellValue::Number(3.0));
        assert_eq!(convert_cell(&Data::Float(2.5)), CellValue::Number(2.5));
        assert_eq!(
            convert_cell(&Data::String("상품명".to_string())),
            CellValue::text("상품명")
        );
        assert_eq!(convert_cell(&Data::String("  ".to_string())), CellValue::Empty);
        assert_eq!(convert_cell(&Data::Bool(true)), CellValue::text("TRUE"));
        assert_eq!(
            convert_cell(&Data::Error(calamine::CellErrorType::Div0)),
            CellValue::Empty
        );
    }

    #[test]
    fn test_range_keeps_absolute_position() {
        let mut range = Range::new((2, 1), (3, 2));
        range.set_value((2, 1), Data::String("상품명".to_string()));
        range.set_value((3, 2), Data::Int(5));

        let sheet = RawSheet::from_rows(range_rows(&range));
        assert_eq!(sheet.row_count(), 4);
        assert_eq!(sheet.cell(3, 2), &CellValue::text("상품명"));
        assert_eq!(sheet.cell(4, 3), &CellValue::Number(5.0));
        assert!(sheet.cell(1, 1).is_blank());
    }

    #[test]
    fn test_garbage_is_workbook_error() {
        let err = read_workbook(b"not a workbook").unwrap_err();
        assert!(matches!(err, IngestError::Workbook { .. }));
    }
}
