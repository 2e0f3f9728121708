//! Header row detection.
//!
//! Vendor exports put banners, order metadata and blank spacer rows above the
//! item table, so the header sits at a variable offset. Only the first
//! `scan_rows` rows are scanned.

use cart_model::{DEFAULT_SCAN_ROWS, HeaderStrategy, RawSheet};

use crate::synonyms::{HEADER_KEYWORDS, PRIMARY_NAME_KEYWORDS};
use crate::utils::{compact_header, normalize_header};

/// Minimum number of exact keyword cells for a row to count as a header.
const MIN_KEYWORD_HITS: usize = 2;

/// How a row scored against the header vocabulary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RowScore {
    /// Cells exactly equal to a header keyword.
    pub keyword_hits: usize,
    /// Whether any cell contains a primary name keyword.
    pub has_name_keyword: bool,
}

impl RowScore {
    pub fn is_header(self) -> bool {
        self.keyword_hits >= MIN_KEYWORD_HITS || self.has_name_keyword
    }
}

/// Scores the text cells of a row against the header keywords.
pub fn score_row(sheet: &RawSheet, row: usize) -> RowScore {
    let mut score = RowScore::default();
    for (_, text) in sheet.text_cells(row) {
        let normalized = normalize_header(text);
        if HEADER_KEYWORDS.contains(&normalized.as_str()) {
            score.keyword_hits += 1;
        }
        let compact = compact_header(text);
        if PRIMARY_NAME_KEYWORDS
            .iter()
            .any(|keyword| compact.contains(&compact_header(keyword)))
        {
            score.has_name_keyword = true;
        }
    }
    score
}

/// Number of rows actually scanned for a sheet. A zero window means the
/// default window.
pub fn scan_window(sheet: &RawSheet, scan_rows: usize) -> usize {
    let scan_rows = if scan_rows == 0 {
        DEFAULT_SCAN_ROWS
    } else {
        scan_rows
    };
    sheet.row_count().min(scan_rows)
}

/// Finds the first header row within the scan window.
pub fn detect_header_row(
    sheet: &RawSheet,
    strategy: &HeaderStrategy,
    scan_rows: usize,
) -> Option<usize> {
    let window = scan_window(sheet, scan_rows);
    match strategy {
        HeaderStrategy::Keywords => (1..=window).find(|&row| score_row(sheet, row).is_header()),
        HeaderStrategy::Sentinel { label } => {
            let sentinel = normalize_header(label);
            (1..=window).find(|&row| {
                sheet
                    .text_cells(row)
                    .any(|(_, text)| normalize_header(text) == sentinel)
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use cart_model::CellValue;

    use super::*;

    fn sheet(rows: &[&[&str]]) -> RawSheet {
        RawSheet::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|cell| CellValue::text(*cell)).collect())
                .collect(),
        )
    }

    #[test]
    fn two_exact_keywords_qualify() {
        let sheet = sheet(&[&["견적서"], &["", "수량", "정가"]]);
        assert_eq!(score_row(&sheet, 2).keyword_hits, 2);
        assert_eq!(
            detect_header_row(&sheet, &HeaderStrategy::Keywords, 60),
            Some(2)
        );
    }

    #[test]
    fn single_keyword_is_not_enough() {
        let sheet = sheet(&[&["수량", "비고"]]);
        assert!(!score_row(&sheet, 1).is_header());
        assert_eq!(detect_header_row(&sheet, &HeaderStrategy::Keywords, 60), None);
    }

    #[test]
    fn name_keyword_substring_qualifies() {
        let sheet = sheet(&[&["번호", "상품명/옵션정보"]]);
        let score = score_row(&sheet, 1);
        assert_eq!(score.keyword_hits, 0);
        assert!(score.has_name_keyword);
    }

    #[test]
    fn spaced_name_keyword_qualifies() {
        let sheet = sheet(&[&["Product  Name (option)"]]);
        assert!(score_row(&sheet, 1).is_header());
    }

    #[test]
    fn window_bounds_the_scan() {
        let sheet = sheet(&[&["banner"], &["banner"], &["상품명", "수량"]]);
        assert_eq!(detect_header_row(&sheet, &HeaderStrategy::Keywords, 2), None);
        assert_eq!(
            detect_header_row(&sheet, &HeaderStrategy::Keywords, 3),
            Some(3)
        );
    }

    #[test]
    fn zero_window_uses_default() {
        let sheet = sheet(&[&["banner"], &["상품명", "수량"]]);
        assert_eq!(scan_window(&sheet, 0), 2);
        assert_eq!(
            detect_header_row(&sheet, &HeaderStrategy::Keywords, 0),
            Some(2)
        );
    }

    #[test]
    fn sentinel_requires_exact_label() {
        let sheet = sheet(&[&["순번 안내"], &["순번", "상품", "개수"]]);
        let strategy = HeaderStrategy::Sentinel {
            label: "순번".to_string(),
        };
        assert_eq!(detect_header_row(&sheet, &strategy, 60), Some(2));
    }
}
