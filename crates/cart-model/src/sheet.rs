//! The raw decoded grid handed to header resolution and normalization.

use crate::cell::CellValue;

static EMPTY: CellValue = CellValue::Empty;

/// An immutable, rectangular grid of cells addressed 1-indexed by `(row, column)`.
///
/// Rows shorter than the widest row are padded with [`CellValue::Empty`] on
/// construction. Addressing outside the grid yields an empty cell rather than
/// panicking, which keeps optional columns cheap to read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSheet {
    rows: Vec<Vec<CellValue>>,
    width: usize,
}

impl RawSheet {
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self { rows, width }
    }

    /// Number of rows (the last 1-based row index).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (the last 1-based column index).
    pub fn column_count(&self) -> usize {
        self.width
    }

    /// Returns the cell at `(row, column)`, both 1-indexed.
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        if row == 0 || column == 0 {
            return &EMPTY;
        }
        self.rows
            .get(row - 1)
            .and_then(|cells| cells.get(column - 1))
            .unwrap_or(&EMPTY)
    }

    /// Returns all cells of a 1-indexed row, or an empty slice when out of range.
    pub fn row(&self, row: usize) -> &[CellValue] {
        if row == 0 {
            return &[];
        }
        self.rows.get(row - 1).map_or(&[], Vec::as_slice)
    }

    /// Trimmed, non-empty text cells of a row with their 1-based column.
    pub fn text_cells(&self, row: usize) -> impl Iterator<Item = (usize, &str)> {
        self.row(row)
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_blank())
            .filter_map(|(idx, cell)| cell.as_text().map(|text| (idx + 1, text.trim())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> RawSheet {
        RawSheet::from_rows(vec![
            vec![CellValue::text("a")],
            vec![CellValue::text("b"), CellValue::Number(2.0), CellValue::text("  ")],
        ])
    }

    #[test]
    fn rows_are_padded_to_width() {
        let sheet = sheet();
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.column_count(), 3);
        assert_eq!(sheet.row(1).len(), 3);
        assert_eq!(sheet.cell(1, 3), &CellValue::Empty);
    }

    #[test]
    fn addressing_is_one_based_and_total() {
        let sheet = sheet();
        assert_eq!(sheet.cell(2, 2), &CellValue::Number(2.0));
        assert_eq!(sheet.cell(0, 1), &CellValue::Empty);
        assert_eq!(sheet.cell(9, 9), &CellValue::Empty);
        assert!(sheet.row(0).is_empty());
    }

    #[test]
    fn text_cells_skip_numbers_and_blanks() {
        let sheet = sheet();
        let cells: Vec<_> = sheet.text_cells(2).collect();
        assert_eq!(cells, vec![(1, "b")]);
    }
}
