//! Compare command: star rating deltas between two variants.

use std::path::Path;

use anyhow::Result;
use srcomp_core::export::{format_console, format_json, format_markdown, format_tsv};
use srcomp_core::{CompareOptions, JoinMode, SortKey, SortOrder, compare};
use tracing::info;

use crate::cli::{OutputFormat, VariantArgs};
use crate::cli_utils;

pub struct CompareArgs<'a> {
    pub variants: &'a VariantArgs,
    pub join: JoinMode,
    pub threshold: Option<f64>,
    pub sort: Option<SortKey>,
    pub order: SortOrder,
    pub limit: Option<usize>,
    pub format: OutputFormat,
    pub precision: usize,
    pub output: Option<&'a Path>,
}

pub fn run(args: CompareArgs<'_>) -> Result<()> {
    let loaded = cli_utils::load_variants(args.variants)?;

    let mut options = CompareOptions::new().join(args.join);
    if let Some(threshold) = args.threshold {
        options = options.threshold(threshold);
    }
    if let Some(key) = args.sort {
        options = options.sort(key, args.order);
    }
    if let Some(limit) = args.limit {
        options = options.limit(limit);
    }

    let rows = compare(&loaded.baseline, &loaded.candidate, &options);
    info!("{} rows after filtering", rows.len());

    let one_sided = rows.iter().filter(|row| !row.is_complete()).count();
    if one_sided > 0 {
        eprintln!("{} row(s) present in only one variant", one_sided);
    }

    if rows.is_empty() {
        eprintln!(
            "No rows: '{}' and '{}' have no matching results for these options",
            loaded.baseline.name(),
            loaded.candidate.name()
        );
    }

    let precision = Some(args.precision);
    let content = match args.format {
        OutputFormat::Console => format_console(&rows, &loaded.labels, args.precision),
        OutputFormat::Markdown => format_markdown(&rows, &loaded.labels, precision),
        OutputFormat::Tsv => format_tsv(&rows, &loaded.labels, precision),
        OutputFormat::Json => format_json(&rows)?,
    };

    cli_utils::write_output(&content, args.output)
}
