use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cart_model::Field;

use crate::commands::{ConvertOutcome, Inspection};

pub fn print_conversion(outcome: &ConvertOutcome, preview_rows: usize) {
    let conversion = &outcome.conversion;
    let totals = conversion.totals();
    println!(
        "Header row: {} ({} columns mapped)",
        conversion.header_row,
        conversion.columns.len()
    );
    if !outcome.site.is_empty() {
        println!("Site: {}", outcome.site);
    }
    if let Some(path) = &outcome.output {
        println!("Output: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Name"),
        header_cell("Spec"),
        header_cell("Qty"),
        header_cell("List"),
        header_cell("Sale"),
        header_cell("Amount"),
        header_cell("Code"),
    ]);
    apply_summary_table_style(&mut table);
    for index in [0, 3, 4, 5, 6] {
        align_column(&mut table, index, CellAlignment::Right);
    }

    for (index, item) in conversion.items().iter().take(preview_rows).enumerate() {
        let sale_cell = if item.unit_price_sale > item.unit_price_list {
            Cell::new(format_won(item.unit_price_sale)).fg(Color::Yellow)
        } else {
            Cell::new(format_won(item.unit_price_sale))
        };
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&item.name),
            optional_cell(&item.spec),
            Cell::new(item.quantity),
            Cell::new(format_won(item.unit_price_list)),
            sale_cell,
            Cell::new(format_won(item.sale_amount())),
            optional_cell(&item.product_code),
        ]);
    }
    let hidden = conversion.items().len().saturating_sub(preview_rows);
    if hidden > 0 {
        table.add_row(vec![
            dim_cell("…"),
            dim_cell(format!("{hidden} more items")),
            dim_cell(""),
            dim_cell(""),
            dim_cell(""),
            dim_cell(""),
            dim_cell(""),
            dim_cell(""),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} items", totals.items))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(totals.quantity).add_attribute(Attribute::Bold),
        Cell::new(format_won(totals.list_amount)).add_attribute(Attribute::Bold),
        discount_cell(totals.discount()),
        Cell::new(format_won(totals.sale_amount)).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    if !conversion.warnings().is_empty() {
        let mut warnings = Table::new();
        warnings.set_header(vec![header_cell("Row"), header_cell("Warning")]);
        apply_table_style(&mut warnings);
        align_column(&mut warnings, 0, CellAlignment::Right);
        for warning in conversion.warnings() {
            warnings.add_row(vec![
                Cell::new(warning.row),
                Cell::new(warning.kind.to_string()).fg(Color::Yellow),
            ]);
        }
        println!("{warnings}");
    }
}

pub fn print_inspection(inspection: &Inspection) {
    println!("Header row: {}", inspection.header_row);
    let labels: Vec<&str> = inspection
        .labels
        .iter()
        .map(|(_, label)| label.as_str())
        .collect();
    println!("Headers: {}", labels.join(" | "));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Column"),
        header_cell("Label"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let columns = inspection.columns.as_ref().ok();
    for field in Field::ALL {
        let column = columns.and_then(|map| map.get(field));
        let field_cell = if field.is_required() {
            Cell::new(field.key()).add_attribute(Attribute::Bold)
        } else {
            Cell::new(field.key())
        };
        match column {
            Some(column) => table.add_row(vec![
                field_cell,
                Cell::new(column),
                Cell::new(column_label(inspection, column)),
            ]),
            None => table.add_row(vec![field_cell, dim_cell("-"), dim_cell("-")]),
        };
    }
    println!("{table}");

    if let Err(error) = &inspection.columns {
        eprintln!("error: {error}");
    }
}

fn column_label(inspection: &Inspection, column: usize) -> &str {
    inspection
        .labels
        .iter()
        .find(|(col, _)| *col == column)
        .map_or("", |(_, label)| label.as_str())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn discount_cell(discount: u64) -> Cell {
    if discount > 0 {
        Cell::new(format!("-{}", format_won(discount)))
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn optional_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

/// Thousands-separated amount, e.g. `12,300`.
fn format_won(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_won() {
        assert_eq!(format_won(0), "0");
        assert_eq!(format_won(999), "999");
        assert_eq!(format_won(12300), "12,300");
        assert_eq!(format_won(1234567), "1,234,567");
    }
}
