//! Maps command: list the beatmaps a variant has results for.

use std::path::Path;

use anyhow::Result;
use srcomp_core::Modifier;

use crate::cli_utils;

pub fn run(dir: &Path, mods: Option<Modifier>, layout: Option<&Path>) -> Result<()> {
    let table = cli_utils::load_single(dir, layout, mods)?;

    let beatmaps = table.beatmaps();
    eprintln!("{} beatmaps in '{}'", beatmaps.len(), table.name());
    for beatmap in beatmaps {
        println!("{}", beatmap);
    }

    Ok(())
}
