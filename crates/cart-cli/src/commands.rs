use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use cart_cli::export::{ExportFormat, export_to_path};
use cart_cli::pipeline::{Conversion, convert_file};
use cart_ingest::read_sheet;
use cart_map::{HeaderResolver, ResolveError, map_columns};
use cart_model::{ColumnMap, ConvertOptions, MissingQuantityPolicy, ResolverOptions};

use crate::cli::{ConvertArgs, ExportFormatArg, HeaderArgs, InspectArgs, MissingQuantityArg};

pub struct ConvertOutcome {
    pub conversion: Conversion,
    pub site: String,
    pub output: Option<PathBuf>,
}

pub struct Inspection {
    pub header_row: usize,
    /// Non-empty header cells as `(column, label)`.
    pub labels: Vec<(usize, String)>,
    pub columns: std::result::Result<ColumnMap, ResolveError>,
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertOutcome> {
    let options = convert_options(args)?;
    let conversion = convert_file(&args.input, &options)?;

    if let Some(path) = &args.output {
        let format = match args.format {
            ExportFormatArg::Csv => ExportFormat::Csv,
            ExportFormatArg::Json => ExportFormat::Json,
        };
        export_to_path(path, conversion.items(), &args.site, format)?;
        info!(path = %path.display(), items = conversion.items().len(), "export written");
    }

    Ok(ConvertOutcome {
        conversion,
        site: args.site.clone(),
        output: args.output.clone(),
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<Inspection> {
    let sheet = read_sheet(&args.input)?;
    let mut options = ResolverOptions::default();
    apply_header_args(&mut options, &args.header);

    let header_row = HeaderResolver::new(options).detect(&sheet)?;
    Ok(Inspection {
        header_row,
        labels: sheet
            .text_cells(header_row)
            .map(|(column, label)| (column, label.to_string()))
            .collect(),
        columns: map_columns(&sheet, header_row),
    })
}

/// Options from the config file (if any) with explicit flags applied on top.
fn convert_options(args: &ConvertArgs) -> Result<ConvertOptions> {
    let mut options = match &args.config {
        Some(path) => load_config(path)?,
        None => ConvertOptions::default(),
    };

    apply_header_args(&mut options.resolver, &args.header);
    if let Some(policy) = args.missing_quantity {
        options.normalizer.missing_quantity = match policy {
            MissingQuantityArg::DefaultToOne => MissingQuantityPolicy::DefaultToOne,
            MissingQuantityArg::SkipRow => MissingQuantityPolicy::SkipRow,
        };
    }
    if args.no_option_lines {
        options.normalizer.option_lines = false;
    }
    if args.no_embedded_codes {
        options.normalizer.extract_embedded_codes = false;
    }
    Ok(options)
}

fn apply_header_args(options: &mut ResolverOptions, args: &HeaderArgs) {
    if let Some(rows) = args.scan_rows {
        *options = std::mem::take(options).with_scan_rows(rows);
    }
    if let Some(label) = &args.sentinel {
        *options = std::mem::take(options).with_sentinel(label.as_str());
    }
}

fn load_config(path: &Path) -> Result<ConvertOptions> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))
}
