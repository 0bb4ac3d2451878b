//! Series command: strain sections of several maps from a single variant.

use std::path::Path;

use anyhow::{Result, bail};
use srcomp_core::export::format_series_tsv;
use srcomp_core::{Modifier, ResultKey, StrainSeries};

use crate::cli_utils;

pub fn run(
    dir: &Path,
    beatmaps: &[String],
    mods: Modifier,
    layout: Option<&Path>,
    precision: Option<usize>,
    output: Option<&Path>,
) -> Result<()> {
    let table = cli_utils::load_single(dir, layout, Some(mods))?;

    let mut series = Vec::with_capacity(beatmaps.len());
    for query in beatmaps {
        let found = table
            .find_beatmap(query)
            .map(|beatmap| ResultKey::new(beatmap.clone(), mods))
            .and_then(|key| StrainSeries::from_table(&table, &key));

        match found {
            Some(s) => {
                eprintln!(
                    "{}: {} sections, peak {}",
                    s.key,
                    s.sections(),
                    s.peak()
                        .map_or_else(|| "-".to_string(), |p| format!("{:.2}", p))
                );
                series.push(s);
            }
            None => eprintln!(
                "Warning: no strains for {} [{}] in '{}'",
                query,
                mods,
                table.name()
            ),
        }
    }

    if series.is_empty() {
        bail!("None of the requested maps have strains in '{}'", table.name());
    }

    let content = format_series_tsv(&series, precision);
    cli_utils::write_output(&content, output)
}
