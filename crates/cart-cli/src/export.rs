//! CSV and JSON export of converted items.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use cart_model::LineItem;
use serde::Serialize;

/// Export file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

/// One exported line: the item, its amounts and the source site label.
#[derive(Debug, Serialize)]
pub struct ExportRow<'a> {
    pub name: &'a str,
    pub spec: &'a str,
    pub quantity: u32,
    pub unit_price_list: u64,
    pub unit_price_sale: u64,
    pub list_amount: u64,
    pub sale_amount: u64,
    pub product_code: &'a str,
    pub site: &'a str,
}

impl<'a> ExportRow<'a> {
    pub fn new(item: &'a LineItem, site: &'a str) -> Self {
        Self {
            name: &item.name,
            spec: &item.spec,
            quantity: item.quantity,
            unit_price_list: item.unit_price_list,
            unit_price_sale: item.unit_price_sale,
            list_amount: item.list_amount(),
            sale_amount: item.sale_amount(),
            product_code: &item.product_code,
            site,
        }
    }
}

pub fn export_rows<'a>(items: &'a [LineItem], site: &'a str) -> Vec<ExportRow<'a>> {
    items.iter().map(|item| ExportRow::new(item, site)).collect()
}

/// Write items as CSV with a header line.
pub fn write_csv<W: Write>(writer: W, items: &[LineItem], site: &str) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in export_rows(items, site) {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write items as a pretty-printed JSON array.
pub fn write_json<W: Write>(writer: W, items: &[LineItem], site: &str) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, &export_rows(items, site))
}

/// Write items to `path` in the given format.
pub fn export_to_path(
    path: &Path,
    items: &[LineItem],
    site: &str,
    format: ExportFormat,
) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    match format {
        ExportFormat::Csv => write_csv(&mut writer, items, site)
            .with_context(|| format!("write CSV {}", path.display()))?,
        ExportFormat::Json => write_json(&mut writer, items, site)
            .with_context(|| format!("write JSON {}", path.display()))?,
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
