//! Strains command: one map's strain sections from both variants.

use std::path::Path;

use anyhow::{Result, bail};
use srcomp_core::export::format_strains_tsv;
use srcomp_core::{BeatmapId, Modifier, ResultKey, StrainSeries, compare_strains};

use crate::cli::VariantArgs;
use crate::cli_utils;

pub fn run(
    variants: &VariantArgs,
    beatmap: &str,
    mods: Modifier,
    precision: Option<usize>,
    output: Option<&Path>,
) -> Result<()> {
    let loaded = cli_utils::load_variants(variants)?;
    let beatmap_id = loaded
        .baseline
        .find_beatmap(beatmap)
        .or_else(|| loaded.candidate.find_beatmap(beatmap))
        .cloned()
        .unwrap_or_else(|| BeatmapId::parse(beatmap));
    let key = ResultKey::new(beatmap_id, mods);

    let Some(points) = compare_strains(&loaded.baseline, &loaded.candidate, &key) else {
        bail!(
            "No strains for {} in '{}' or '{}'",
            key,
            loaded.baseline.name(),
            loaded.candidate.name()
        );
    };

    for (label, table) in [
        (&loaded.labels.baseline, &loaded.baseline),
        (&loaded.labels.candidate, &loaded.candidate),
    ] {
        match StrainSeries::from_table(table, &key) {
            Some(series) => eprintln!(
                "{}: {} sections, peak {}",
                label,
                series.sections(),
                series
                    .peak()
                    .map_or_else(|| "-".to_string(), |p| format!("{:.2}", p))
            ),
            None => eprintln!("{}: no strains for {}", label, key),
        }
    }

    let content = format_strains_tsv(&points, &loaded.labels, precision);
    cli_utils::write_output(&content, output)
}
