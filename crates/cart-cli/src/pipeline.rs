//! Conversion pipeline: read, resolve, normalize.

use std::path::Path;

use cart_ingest::{IngestError, read_sheet};
use cart_map::{HeaderResolver, ResolveError, header_texts};
use cart_model::{ColumnMap, ConvertOptions, LineItem, RawSheet};
use cart_transform::{ItemNormalizer, ItemWarning, NormalizeError, NormalizedItems};
use thiserror::Error;
use tracing::{info, info_span};

/// Any failure along the conversion pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Outcome of converting one sheet.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// 1-based header row.
    pub header_row: usize,
    pub columns: ColumnMap,
    /// Non-empty header labels in column order.
    pub headers: Vec<String>,
    pub normalized: NormalizedItems,
}

/// Cart-level sums over all items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartTotals {
    pub items: usize,
    pub quantity: u64,
    pub list_amount: u64,
    pub sale_amount: u64,
}

impl CartTotals {
    pub fn from_items(items: &[LineItem]) -> Self {
        items.iter().fold(Self::default(), |totals, item| Self {
            items: totals.items + 1,
            quantity: totals.quantity.saturating_add(u64::from(item.quantity)),
            list_amount: totals.list_amount.saturating_add(item.list_amount()),
            sale_amount: totals.sale_amount.saturating_add(item.sale_amount()),
        })
    }

    /// Savings of the sale total against the list total.
    pub fn discount(&self) -> u64 {
        self.list_amount.saturating_sub(self.sale_amount)
    }
}

impl Conversion {
    pub fn items(&self) -> &[LineItem] {
        &self.normalized.items
    }

    pub fn warnings(&self) -> &[ItemWarning] {
        &self.normalized.warnings
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from_items(self.items())
    }
}

/// Convert an already decoded sheet.
pub fn convert_sheet(sheet: &RawSheet, options: &ConvertOptions) -> Result<Conversion> {
    let resolver = HeaderResolver::new(options.resolver.clone());
    let (header_row, columns) = resolver.resolve(sheet)?;

    let normalizer = ItemNormalizer::new(options.normalizer.clone());
    let normalized = normalizer.normalize(sheet, header_row, &columns)?;

    Ok(Conversion {
        header_row,
        headers: header_texts(sheet, header_row),
        columns,
        normalized,
    })
}

/// Read and convert a cart file.
pub fn convert_file(path: &Path, options: &ConvertOptions) -> Result<Conversion> {
    let span = info_span!("convert", path = %path.display());
    let _guard = span.enter();

    let sheet = read_sheet(path)?;
    let conversion = convert_sheet(&sheet, options)?;
    let totals = conversion.totals();
    info!(
        header_row = conversion.header_row,
        items = totals.items,
        warnings = conversion.warnings().len(),
        sale_amount = totals.sale_amount,
        "conversion complete"
    );
    Ok(conversion)
}
