//! Report command: markdown rankings of the largest increases and decreases.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use srcomp_core::export::format_markdown;
use srcomp_core::{CompareOptions, SortKey, SortOrder, compare};

use crate::cli::VariantArgs;
use crate::cli_utils;

/// Paths of the two ranking files for a candidate label.
pub fn report_paths(out_dir: &Path, candidate: &str) -> (PathBuf, PathBuf) {
    (
        out_dir.join(format!("{}_delta_desc.md", candidate)),
        out_dir.join(format!("{}_delta_asc.md", candidate)),
    )
}

pub fn run(
    variants: &VariantArgs,
    limit: usize,
    out_dir: &Path,
    precision: Option<usize>,
) -> Result<()> {
    let loaded = cli_utils::load_variants(variants)?;
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let (desc_path, asc_path) = report_paths(out_dir, &loaded.labels.candidate);

    for (order, path) in [
        (SortOrder::Descending, &desc_path),
        (SortOrder::Ascending, &asc_path),
    ] {
        let options = CompareOptions::new()
            .sort(SortKey::Delta, order)
            .limit(limit);
        let rows = compare(&loaded.baseline, &loaded.candidate, &options);
        write_report(path, &format_markdown(&rows, &loaded.labels, precision))?;
        eprintln!("Wrote {} rows to {}", rows.len(), path.display());
    }

    Ok(())
}

fn write_report(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
