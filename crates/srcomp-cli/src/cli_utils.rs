//! Common CLI utility functions shared across commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use srcomp_core::result::variant_name;
use srcomp_core::{Labels, Modifier, NormalizedTable, ResultLayout, load_variant};

use crate::cli::VariantArgs;

/// Both variants of a comparison, loaded, with their column labels.
pub struct LoadedVariants {
    pub baseline: NormalizedTable,
    pub candidate: NormalizedTable,
    pub labels: Labels,
}

pub fn load_layout(path: Option<&Path>) -> Result<ResultLayout> {
    match path {
        Some(path) => ResultLayout::load(path)
            .with_context(|| format!("Failed to load layout from {}", path.display())),
        None => Ok(ResultLayout::default()),
    }
}

/// Load the baseline and candidate directories. Any loader error aborts.
pub fn load_variants(args: &VariantArgs) -> Result<LoadedVariants> {
    let layout = load_layout(args.layout.as_deref())?;

    let baseline = load_variant(&args.baseline, &layout).with_context(|| {
        format!("Failed to load baseline from {}", args.baseline.display())
    })?;
    report_duplicates(&baseline);

    let candidate = load_variant(&args.candidate, &layout).with_context(|| {
        format!("Failed to load candidate from {}", args.candidate.display())
    })?;
    report_duplicates(&candidate);

    let labels = Labels::new(
        args.baseline_label
            .clone()
            .unwrap_or_else(|| variant_name(&args.baseline)),
        args.candidate_label
            .clone()
            .unwrap_or_else(|| variant_name(&args.candidate)),
    );

    Ok(LoadedVariants {
        baseline,
        candidate,
        labels,
    })
}

/// Load a single variant, optionally restricted to one modifier's result files.
pub fn load_single(
    dir: &Path,
    layout: Option<&Path>,
    mods: Option<Modifier>,
) -> Result<NormalizedTable> {
    let mut layout = load_layout(layout)?;
    if let Some(modifier) = mods {
        layout = layout.only(modifier);
        if layout.files.is_empty() {
            bail!("Layout has no result file for {}", modifier);
        }
    }

    let table = load_variant(dir, &layout)
        .with_context(|| format!("Failed to load results from {}", dir.display()))?;
    report_duplicates(&table);
    Ok(table)
}

fn report_duplicates(table: &NormalizedTable) {
    let count = table.duplicates().len();
    if count > 0 {
        eprintln!(
            "Warning: {} duplicate result(s) in '{}', later entries were kept",
            count,
            table.name()
        );
    }
}

/// Write to a file, or to stdout when no path is given.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("Exported to: {}", path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}
