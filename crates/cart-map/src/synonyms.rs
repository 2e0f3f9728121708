//! Column label vocabulary observed in vendor cart exports.
//!
//! Lists are ordered by priority; earlier entries win over later ones when
//! several header cells could match the same field.

use cart_model::Field;

/// Labels that mark a header row when at least two appear as exact cells.
pub const HEADER_KEYWORDS: &[&str] = &[
    "상품명",
    "품명",
    "수량",
    "정가",
    "할인가",
    "판매가",
    "할인적용금액",
    "순번",
    "product name",
    "item name",
    "quantity",
    "list price",
    "sale price",
    "sequence number",
];

/// Labels that alone mark a header row when contained in any cell.
pub const PRIMARY_NAME_KEYWORDS: &[&str] = &["상품명", "품명", "product name"];

const NAME: &[&str] = &[
    "상품명",
    "품명",
    "상품명/옵션",
    "상품정보",
    "제품명",
    "product name",
    "item name",
    "product name/option",
    "product info",
];

const QUANTITY: &[&str] = &[
    "수량",
    "주문수량",
    "구매수량",
    "수량(개)",
    "quantity",
    "order quantity",
    "purchase quantity",
];

const UNIT_PRICE_LIST: &[&str] = &[
    "정가",
    "정상가",
    "소비자가",
    "판매가(정가)",
    "기준가",
    "1개당 금액",
    "list price",
    "regular price",
    "consumer price",
    "base price",
];

const UNIT_PRICE_SALE: &[&str] = &[
    "할인가",
    "판매가",
    "할인적용금액",
    "구매가",
    "공급가",
    "discount price",
    "sale price",
    "discounted amount",
    "supply price",
];

const TOTAL: &[&str] = &[
    "금액",
    "합계",
    "총금액",
    "판매금액",
    "결제금액",
    "합계금액",
    "amount",
    "total",
    "total amount",
    "payment amount",
];

const PRODUCT_CODE: &[&str] = &[
    "상품코드",
    "상품번호",
    "코드",
    "상품 코드",
    "product code",
    "product number",
    "code",
];

/// Synonyms for a field in priority order.
pub fn synonyms(field: Field) -> &'static [&'static str] {
    match field {
        Field::Name => NAME,
        Field::Quantity => QUANTITY,
        Field::UnitPriceList => UNIT_PRICE_LIST,
        Field::UnitPriceSale => UNIT_PRICE_SALE,
        Field::Total => TOTAL,
        Field::ProductCode => PRODUCT_CODE,
    }
}
