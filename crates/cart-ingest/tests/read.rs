//! Integration tests for reading cart files from disk.

use std::fs;

use cart_ingest::{
    IngestError, SheetFormat, check_file_size_with_limit, read_sheet, read_sheet_from_bytes,
};
use cart_model::CellValue;

const CART_CSV: &str = "\
아이스크림몰 장바구니,,,,
,,,,
상품명,수량,정가,할인가,금액
Pencil (HB),10,500,400,\"4,000\"
Notebook,,,,3000
";

#[test]
fn reads_csv_cart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.csv");
    fs::write(&path, CART_CSV).unwrap();

    let sheet = read_sheet(&path).unwrap();
    assert_eq!(sheet.row_count(), 5);
    assert_eq!(sheet.column_count(), 5);
    assert!(sheet.cell(2, 1).is_blank());
    assert_eq!(sheet.cell(3, 1), &CellValue::text("상품명"));
    assert_eq!(sheet.cell(4, 5), &CellValue::text("4,000"));
    assert!(sheet.cell(5, 2).is_blank());
}

#[test]
fn reads_tsv_cart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.tsv");
    fs::write(&path, "상품명\t수량\nPen\t2\n").unwrap();

    let sheet = read_sheet(&path).unwrap();
    assert_eq!(sheet.cell(2, 2), &CellValue::text("2"));
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.pdf");
    fs::write(&path, "x").unwrap();

    let err = read_sheet(&path).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { extension } if extension == "pdf"));
}

#[test]
fn missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.xlsx");

    let err = read_sheet(&path).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn size_limit_is_enforced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.csv");
    fs::write(&path, CART_CSV).unwrap();

    let err = check_file_size_with_limit(&path, 10).unwrap_err();
    assert!(matches!(err, IngestError::FileTooLarge { max_size: 10, .. }));
    assert!(check_file_size_with_limit(&path, 1024).is_ok());
}

#[test]
fn corrupt_workbook_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.xlsx");
    fs::write(&path, CART_CSV).unwrap();

    let err = read_sheet(&path).unwrap_err();
    assert!(matches!(err, IngestError::Workbook { .. }));
}

#[test]
fn bytes_follow_requested_format() {
    let sheet = read_sheet_from_bytes(b"a;b\n", SheetFormat::Csv).unwrap();
    assert_eq!(sheet.cell(1, 1), &CellValue::text("a;b"));
}
