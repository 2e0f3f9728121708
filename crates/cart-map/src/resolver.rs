//! Header resolution: locate the header row, then map its columns to fields.
//!
//! Mapping runs in two passes. The exact pass lets every field claim the
//! leftmost column whose normalized label equals one of its synonyms; the
//! containment pass then fills remaining fields from unclaimed columns. A
//! column is never assigned to two fields, so a `할인적용금액` column taken by
//! the sale price cannot also satisfy the `금액` total synonym.

use cart_model::{CellValue, ColumnMap, Field, RawSheet, ResolverOptions};
use tracing::{debug, warn};

use crate::detect::{detect_header_row, scan_window};
use crate::error::{ResolveError, Result};
use crate::synonyms::synonyms;
use crate::utils::{compact_header, normalize_header};

/// Header cells shorter than this never take part in containment matching.
const MIN_CONTAINMENT_LEN: usize = 2;

/// Locates header rows and maps their columns.
#[derive(Debug, Clone, Default)]
pub struct HeaderResolver {
    options: ResolverOptions,
}

impl HeaderResolver {
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Finds the header row and its column mapping.
    ///
    /// # Errors
    ///
    /// [`ResolveError::HeaderNotFound`] when no row in the scan window
    /// qualifies, [`ResolveError::RequiredColumnMissing`] when the name or
    /// quantity column cannot be mapped.
    pub fn resolve(&self, sheet: &RawSheet) -> Result<(usize, ColumnMap)> {
        let header_row = self.detect(sheet)?;
        let columns = map_columns(sheet, header_row)?;
        Ok((header_row, columns))
    }

    /// Finds the header row only.
    pub fn detect(&self, sheet: &RawSheet) -> Result<usize> {
        let scan_rows = self.options.scan_rows;
        match detect_header_row(sheet, &self.options.strategy, scan_rows) {
            Some(row) => {
                debug!(header_row = row, strategy = ?self.options.strategy, "header row detected");
                Ok(row)
            }
            None => Err(ResolveError::HeaderNotFound {
                scanned_rows: scan_window(sheet, scan_rows),
            }),
        }
    }
}

/// Resolves a sheet with default options.
pub fn resolve_header(sheet: &RawSheet) -> Result<(usize, ColumnMap)> {
    HeaderResolver::default().resolve(sheet)
}

/// Non-empty header labels of a row, in column order.
pub fn header_texts(sheet: &RawSheet, row: usize) -> Vec<String> {
    sheet
        .row(row)
        .iter()
        .map(CellValue::display_text)
        .filter(|text| !text.is_empty())
        .collect()
}

struct HeaderCell {
    column: usize,
    normalized: String,
    compact: String,
}

/// Maps the cells of `header_row` to fields.
///
/// # Errors
///
/// [`ResolveError::RequiredColumnMissing`] naming the first required field
/// without a column, together with the labels that were found.
pub fn map_columns(sheet: &RawSheet, header_row: usize) -> Result<ColumnMap> {
    let cells: Vec<HeaderCell> = sheet
        .row(header_row)
        .iter()
        .enumerate()
        .filter_map(|(idx, cell)| {
            let text = cell.display_text();
            if text.is_empty() {
                return None;
            }
            Some(HeaderCell {
                column: idx + 1,
                normalized: normalize_header(&text),
                compact: compact_header(&text),
            })
        })
        .collect();

    let mut columns = ColumnMap::new();

    for field in Field::ALL {
        let found = synonyms(field).iter().find_map(|synonym| {
            cells
                .iter()
                .find(|cell| !columns.is_claimed(cell.column) && cell.normalized == *synonym)
                .map(|cell| cell.column)
        });
        if let Some(column) = found {
            debug!(field = %field, column, "column matched exactly");
            columns.insert(field, column);
        }
    }

    for field in Field::ALL {
        if columns.contains(field) {
            continue;
        }
        let found = synonyms(field).iter().find_map(|synonym| {
            let synonym = compact_header(synonym);
            cells
                .iter()
                .find(|cell| {
                    !columns.is_claimed(cell.column)
                        && cell.compact.chars().count() >= MIN_CONTAINMENT_LEN
                        && (cell.compact.contains(&synonym) || synonym.contains(&cell.compact))
                })
                .map(|cell| cell.column)
        });
        if let Some(column) = found {
            debug!(field = %field, column, "column matched by containment");
            columns.insert(field, column);
        }
    }

    if let Some(field) = columns.missing_required() {
        let headers = header_texts(sheet, header_row);
        warn!(field = %field, header_row, ?headers, "required column missing");
        return Err(ResolveError::RequiredColumnMissing {
            field,
            header_row,
            headers,
        });
    }

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_sheet(labels: &[&str]) -> RawSheet {
        RawSheet::from_rows(vec![labels.iter().map(|l| CellValue::text(*l)).collect()])
    }

    #[test]
    fn exact_matches_take_priority_over_containment() {
        // "상품명/옵션" contains "상품명", but the exact "상품명" column wins.
        let sheet = header_sheet(&["상품명/옵션", "상품명", "수량"]);
        let map = map_columns(&sheet, 1).unwrap();
        assert_eq!(map.get(Field::Name), Some(2));
        assert_eq!(map.get(Field::Quantity), Some(3));
    }

    #[test]
    fn containment_handles_vendor_suffixes() {
        let sheet = header_sheet(&["상품명(옵션포함)", "주문 수량", "결제금액(원)"]);
        let map = map_columns(&sheet, 1).unwrap();
        assert_eq!(map.get(Field::Name), Some(1));
        assert_eq!(map.get(Field::Quantity), Some(2));
        assert_eq!(map.get(Field::Total), Some(3));
    }

    #[test]
    fn claimed_columns_are_not_reused() {
        let sheet = header_sheet(&["상품명", "수량", "할인적용금액"]);
        let map = map_columns(&sheet, 1).unwrap();
        assert_eq!(map.get(Field::UnitPriceSale), Some(3));
        assert_eq!(map.get(Field::Total), None);
    }

    #[test]
    fn leftmost_column_wins_for_same_synonym() {
        let sheet = header_sheet(&["상품명", "수량", "금액", "금액"]);
        let map = map_columns(&sheet, 1).unwrap();
        assert_eq!(map.get(Field::Total), Some(3));
    }

    #[test]
    fn english_headers_map() {
        let sheet = header_sheet(&[
            "No",
            "Product Name",
            "Qty / Quantity",
            "List Price",
            "Sale Price",
            "Total",
        ]);
        let map = map_columns(&sheet, 1).unwrap();
        assert_eq!(map.get(Field::Name), Some(2));
        assert_eq!(map.get(Field::Quantity), Some(3));
        assert_eq!(map.get(Field::UnitPriceList), Some(4));
        assert_eq!(map.get(Field::UnitPriceSale), Some(5));
        assert_eq!(map.get(Field::Total), Some(6));
    }

    #[test]
    fn missing_quantity_carries_headers() {
        let sheet = header_sheet(&["상품명", "", "금액"]);
        let err = map_columns(&sheet, 1).unwrap_err();
        assert_eq!(
            err,
            ResolveError::RequiredColumnMissing {
                field: Field::Quantity,
                header_row: 1,
                headers: vec!["상품명".to_string(), "금액".to_string()],
            }
        );
    }

    #[test]
    fn single_letter_headers_do_not_match_by_containment() {
        let sheet = header_sheet(&["상품명", "수량", "가"]);
        let map = map_columns(&sheet, 1).unwrap();
        assert_eq!(map.len(), 2);
    }
}
