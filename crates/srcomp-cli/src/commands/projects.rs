//! Projects command: list the variant directories available for comparison.

use std::path::Path;

use anyhow::{Context, Result};
use srcomp_core::list_variants;

pub fn run(root: &Path) -> Result<()> {
    let variants = list_variants(root)
        .with_context(|| format!("Failed to list variants in {}", root.display()))?;

    if variants.is_empty() {
        eprintln!("No variants found in {}", root.display());
    }
    for name in variants {
        println!("{}", name);
    }

    Ok(())
}
