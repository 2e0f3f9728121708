//! Integration tests for the conversion pipeline and export.

use std::fs;

use cart_cli::export::{ExportFormat, ExportRow, export_to_path, write_csv};
use cart_cli::pipeline::{CartTotals, ConvertError, convert_file, convert_sheet};
use cart_map::ResolveError;
use cart_model::{CellValue, ConvertOptions, Field, LineItem, RawSheet};
use cart_transform::NormalizeError;

fn text_row(cells: &[&str]) -> Vec<CellValue> {
    cells.iter().map(|cell| CellValue::text(*cell)).collect()
}

fn cart_sheet() -> RawSheet {
    RawSheet::from_rows(vec![
        text_row(&["아이스크림몰 장바구니"]),
        Vec::new(),
        text_row(&["상품명", "수량", "정가", "할인가", "금액"]),
        vec![
            "Pencil (HB)".into(),
            10_i64.into(),
            500_i64.into(),
            400_i64.into(),
            4000_i64.into(),
        ],
        vec![
            "Notebook".into(),
            CellValue::Empty,
            CellValue::Empty,
            CellValue::Empty,
            3000_i64.into(),
        ],
    ])
}

#[test]
fn test_convert_sheet_end_to_end() {
    let conversion = convert_sheet(&cart_sheet(), &ConvertOptions::default()).unwrap();

    assert_eq!(conversion.header_row, 3);
    assert_eq!(conversion.columns.get(Field::Total), Some(5));
    assert_eq!(conversion.headers, vec!["상품명", "수량", "정가", "할인가", "금액"]);
    assert_eq!(conversion.items().len(), 2);
    assert_eq!(conversion.warnings().len(), 3);
    assert_eq!(
        conversion.totals(),
        CartTotals {
            items: 2,
            quantity: 11,
            list_amount: 8000,
            sale_amount: 7000,
        }
    );
    assert_eq!(conversion.totals().discount(), 1000);
}

#[test]
fn test_out_of_range_prices_do_not_overflow_totals() {
    let sheet = RawSheet::from_rows(vec![
        text_row(&["상품명", "수량", "정가", "할인가"]),
        vec![
            "Pen".into(),
            1_i64.into(),
            "99999999999999999999원".into(),
            900_i64.into(),
        ],
        vec![
            "Ink".into(),
            2_i64.into(),
            CellValue::Number(1e30),
            CellValue::Number(1e30),
        ],
    ]);
    let conversion = convert_sheet(&sheet, &ConvertOptions::default()).unwrap();

    assert_eq!(conversion.items()[0].unit_price_list, 900);
    assert_eq!(conversion.items()[1].unit_price_list, 0);
    assert_eq!(conversion.items()[1].unit_price_sale, 0);
    assert_eq!(conversion.totals().sale_amount, 900);
}

#[test]
fn test_cart_totals_saturate() {
    let item = LineItem {
        name: "Bulk".to_string(),
        spec: String::new(),
        quantity: 1,
        unit_price_list: u64::MAX - 1,
        unit_price_sale: u64::MAX - 1,
        product_code: String::new(),
    };
    let totals = CartTotals::from_items(&[item.clone(), item]);
    assert_eq!(totals.items, 2);
    assert_eq!(totals.quantity, 2);
    assert_eq!(totals.list_amount, u64::MAX);
    assert_eq!(totals.sale_amount, u64::MAX);
    assert_eq!(totals.discount(), 0);
}

#[test]
fn test_csv_export_snapshot() {
    let conversion = convert_sheet(&cart_sheet(), &ConvertOptions::default()).unwrap();
    let mut buffer = Vec::new();
    write_csv(&mut buffer, conversion.items(), "icecream").unwrap();
    let csv = String::from_utf8(buffer).unwrap();

    insta::assert_snapshot!(csv.trim_end(), @r"
    name,spec,quantity,unit_price_list,unit_price_sale,list_amount,sale_amount,product_code,site
    Pencil,HB,10,500,400,5000,4000,,icecream
    Notebook,,1,3000,3000,3000,3000,,icecream
    ");
}

#[test]
fn test_json_export_row_snapshot() {
    let conversion = convert_sheet(&cart_sheet(), &ConvertOptions::default()).unwrap();
    let row = ExportRow::new(&conversion.items()[0], "icecream");

    insta::assert_json_snapshot!(row, @r#"
    {
      "name": "Pencil",
      "spec": "HB",
      "quantity": 10,
      "unit_price_list": 500,
      "unit_price_sale": 400,
      "list_amount": 5000,
      "sale_amount": 4000,
      "product_code": "",
      "site": "icecream"
    }
    "#);
}

#[test]
fn test_header_not_found_is_resolve_error() {
    let sheet = RawSheet::from_rows(vec![text_row(&["메모"]), text_row(&["a", "b"])]);
    let err = convert_sheet(&sheet, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Resolve(ResolveError::HeaderNotFound { scanned_rows: 2 })
    ));
}

#[test]
fn test_header_without_items_is_normalize_error() {
    let sheet = RawSheet::from_rows(vec![text_row(&["상품명", "수량"])]);
    let err = convert_sheet(&sheet, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Normalize(NormalizeError::NoItemsFound { header_row: 1 })
    ));
    assert!(err.to_string().starts_with("no items found"));
}

#[test]
fn test_convert_file_and_export_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cart.csv");
    fs::write(
        &input,
        "견적서\n,\n순번,상품코드,상품명,수량,정가,할인가\n1,11033697,Scissors,2,\"3,000\",\"2,700원\"\n",
    )
    .unwrap();

    let conversion = convert_file(&input, &ConvertOptions::default()).unwrap();
    assert_eq!(conversion.header_row, 3);
    let item = &conversion.items()[0];
    assert_eq!(item.product_code, "11033697");
    assert_eq!(item.unit_price_sale, 2700);

    let output = dir.path().join("items.json");
    export_to_path(&output, conversion.items(), "", ExportFormat::Json).unwrap();
    let rows: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(rows[0]["name"], "Scissors");
    assert_eq!(rows[0]["sale_amount"], 5400);
}

#[test]
fn test_missing_file_is_ingest_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    let err = convert_file(&missing, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::Ingest(_)));
}
