//! Summary command: overall statistics and a histogram of star rating changes.

use anyhow::Result;
use serde_json::json;
use srcomp_core::config::defaults;
use srcomp_core::export::{format_histogram, format_summary};
use srcomp_core::{CompareOptions, DeltaHistogram, DeltaSummary, compare};

use crate::cli::VariantArgs;
use crate::cli_utils;

pub fn run(variants: &VariantArgs, min_delta: f64, bins: usize, json: bool) -> Result<()> {
    let loaded = cli_utils::load_variants(variants)?;
    let rows = compare(&loaded.baseline, &loaded.candidate, &CompareOptions::default());

    let summary = DeltaSummary::from_rows(&rows);
    let histogram = DeltaHistogram::build(&rows, min_delta, bins);

    if json {
        let value = json!({
            "baseline": loaded.labels.baseline,
            "candidate": loaded.labels.candidate,
            "summary": summary,
            "histogram": histogram,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!(
        "=== {} vs {} ===",
        loaded.labels.baseline, loaded.labels.candidate
    );
    print!("{}", format_summary(&summary, defaults::DISPLAY_PRECISION));
    println!();
    println!("=== Change in SR (|delta| > {}) ===", min_delta);
    print!(
        "{}",
        format_histogram(&histogram, defaults::DISPLAY_PRECISION)
    );

    Ok(())
}
