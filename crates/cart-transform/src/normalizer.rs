//! Row-by-row conversion of a resolved sheet into line items.

use cart_model::{
    CellValue, ColumnMap, Field, LineItem, MissingQuantityPolicy, NormalizerOptions, RawSheet,
};
use tracing::{debug, info, trace};

use crate::error::{NormalizeError, Result};
use crate::normalization::{
    divide_rounded, extract_embedded_code, parse_amount, parse_option_line, parse_quantity,
    split_name_spec,
};
use crate::types::{ItemWarning, NormalizedItems, WarningKind};

/// Converts the rows below a header into [`LineItem`]s.
#[derive(Debug, Clone, Default)]
pub struct ItemNormalizer {
    options: NormalizerOptions,
}

/// Coerced values of one source row.
struct RowValues {
    name: String,
    quantity: Option<u32>,
    list: u64,
    sale: u64,
    total: u64,
    code: String,
}

impl RowValues {
    fn read(sheet: &RawSheet, row: usize, columns: &ColumnMap) -> Self {
        let cell = |field| field_cell(sheet, row, columns, field);
        Self {
            name: cell(Field::Name).display_text(),
            quantity: parse_quantity(cell(Field::Quantity)),
            list: parse_amount(cell(Field::UnitPriceList)),
            sale: parse_amount(cell(Field::UnitPriceSale)),
            total: parse_amount(cell(Field::Total)),
            code: cell(Field::ProductCode).display_text(),
        }
    }

    /// A row with no quantity, prices or total.
    fn is_number_less(&self) -> bool {
        self.quantity.is_none() && self.list == 0 && self.sale == 0 && self.total == 0
    }
}

fn field_cell<'a>(
    sheet: &'a RawSheet,
    row: usize,
    columns: &ColumnMap,
    field: Field,
) -> &'a CellValue {
    // Column 0 is outside the 1-based grid and reads as empty.
    sheet.cell(row, columns.get(field).unwrap_or(0))
}

impl ItemNormalizer {
    pub fn new(options: NormalizerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizerOptions {
        &self.options
    }

    /// Normalize every row below `header_row` through the sheet's last row.
    ///
    /// # Errors
    ///
    /// [`NormalizeError::NoItemsFound`] when no row yields an item.
    pub fn normalize(
        &self,
        sheet: &RawSheet,
        header_row: usize,
        columns: &ColumnMap,
    ) -> Result<NormalizedItems> {
        let mut out = NormalizedItems::default();
        // Item that option lines attach to; cleared when a named row is skipped.
        let mut pending: Option<usize> = None;
        let mut seen_named_row = false;

        for row in header_row + 1..=sheet.row_count() {
            let values = RowValues::read(sheet, row, columns);
            let option_line = self.options.option_lines && values.is_number_less();

            if values.name.is_empty() {
                if option_line
                    && let Some(index) = pending
                    && let Some((_, value)) = sheet
                        .text_cells(row)
                        .find_map(|(_, text)| parse_option_line(text))
                {
                    apply_option(&mut out, index, row, value);
                    continue;
                }
                trace!(row, "blank name, row skipped");
                continue;
            }

            if option_line && seen_named_row {
                match (pending, parse_option_line(&values.name)) {
                    (Some(index), Some((_, value))) => apply_option(&mut out, index, row, value),
                    _ => {
                        debug!(row, text = %values.name, "number-less line ignored");
                        out.warnings.push(ItemWarning::new(
                            row,
                            WarningKind::OptionIgnored {
                                text: values.name.clone(),
                            },
                        ));
                    }
                }
                continue;
            }

            seen_named_row = true;
            pending = self.build_item(row, values, &mut out.warnings).map(|item| {
                out.items.push(item);
                out.items.len() - 1
            });
        }

        if out.items.is_empty() {
            return Err(NormalizeError::NoItemsFound { header_row });
        }

        info!(
            items = out.items.len(),
            warnings = out.warnings.len(),
            "cart rows normalized"
        );
        Ok(out)
    }

    fn build_item(
        &self,
        row: usize,
        values: RowValues,
        warnings: &mut Vec<ItemWarning>,
    ) -> Option<LineItem> {
        let quantity = match (values.quantity, self.options.missing_quantity) {
            (Some(quantity), _) => quantity,
            (None, MissingQuantityPolicy::DefaultToOne) => {
                warnings.push(ItemWarning::new(row, WarningKind::QuantityDefaulted));
                1
            }
            (None, MissingQuantityPolicy::SkipRow) => {
                debug!(row, "quantity missing, row skipped");
                warnings.push(ItemWarning::new(row, WarningKind::MissingQuantitySkipped));
                return None;
            }
        };

        let mut sale = values.sale;
        if sale == 0 && values.total > 0 {
            sale = divide_rounded(values.total, quantity);
            debug!(row, total = values.total, quantity, sale, "sale price derived");
            warnings.push(ItemWarning::new(
                row,
                WarningKind::SalePriceDerived {
                    total: values.total,
                    quantity,
                },
            ));
        }

        let mut list = values.list;
        if list == 0 && sale > 0 {
            list = sale;
            warnings.push(ItemWarning::new(row, WarningKind::ListPriceDerived));
        }

        let mut name = values.name;
        let mut product_code = values.code;
        if product_code.is_empty()
            && self.options.extract_embedded_codes
            && let Some((stripped, code)) = extract_embedded_code(&name)
        {
            trace!(row, code = %code, "embedded product code extracted");
            name = stripped;
            product_code = code;
        }

        let (name, spec) = split_name_spec(&name, self.options.max_spec_len);

        if sale > list {
            warnings.push(ItemWarning::new(row, WarningKind::SaleAboveList { list, sale }));
        }

        Some(LineItem {
            name,
            spec,
            quantity,
            unit_price_list: list,
            unit_price_sale: sale,
            product_code,
        })
    }
}

fn apply_option(out: &mut NormalizedItems, index: usize, row: usize, value: &str) {
    let Some(item) = out.items.get_mut(index) else {
        return;
    };
    debug!(row, spec = value, item = %item.name, "option line applied");
    item.spec = value.to_string();
    out.warnings.push(ItemWarning::new(
        row,
        WarningKind::OptionApplied {
            spec: value.to_string(),
        },
    ));
}

/// Normalize with default options, returning only the items.
pub fn normalize_items(
    sheet: &RawSheet,
    header_row: usize,
    columns: &ColumnMap,
) -> Result<Vec<LineItem>> {
    ItemNormalizer::default()
        .normalize(sheet, header_row, columns)
        .map(|normalized| normalized.items)
}
