use std::fs;
use std::path::Path;

use serde_json::Value as JsonValue;
use tracing::{debug, info};

use super::record::{FlatRecord, flatten, tag_modifier};
use super::{Modifier, NormalizedTable, ResultRecord};
use crate::config::ResultLayout;
use crate::error::{Error, Result};

const RESULTS_FIELD: &str = "results";

/// Load one variant directory into a normalized table.
///
/// Every file of `layout` must exist; nothing is parsed until all of them are
/// found. Files are read one at a time in layout order, and a malformed file
/// aborts the whole load.
pub fn load_variant<P: AsRef<Path>>(dir: P, layout: &ResultLayout) -> Result<NormalizedTable> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::VariantNotFound(dir.to_path_buf()));
    }

    let paths = layout
        .files
        .iter()
        .map(|file| {
            let path = dir.join(&file.file);
            if path.is_file() {
                Ok((path, file.modifier))
            } else {
                Err(Error::MissingFile { path })
            }
        })
        .collect::<Result<Vec<_>>>()?;

    let mut table = NormalizedTable::new(variant_name(dir));
    for (path, modifier) in paths {
        let content = fs::read_to_string(&path)?;
        let source = path.display().to_string();
        let records = parse_results(&content, modifier, &source)?;
        debug!("Loaded {} results from {}", records.len(), source);
        for record in records {
            table.insert(record);
        }
    }

    info!(
        "Loaded variant '{}': {} results ({} duplicates)",
        table.name(),
        table.len(),
        table.duplicates().len()
    );
    Ok(table)
}

/// Load a variant from in-memory JSON documents, one per modifier, in order.
pub fn load_documents<'a, I>(name: &str, documents: I) -> Result<NormalizedTable>
where
    I: IntoIterator<Item = (Modifier, &'a str)>,
{
    let mut table = NormalizedTable::new(name);
    for (index, (modifier, content)) in documents.into_iter().enumerate() {
        let source = format!("{}[{}:{}]", name, index, modifier);
        for record in parse_results(content, modifier, &source)? {
            table.insert(record);
        }
    }
    Ok(table)
}

/// Parse one result document into typed records, keeping document order.
pub fn parse_results(
    content: &str,
    modifier: Modifier,
    source: &str,
) -> Result<Vec<ResultRecord>> {
    let root: JsonValue = serde_json::from_str(content)
        .map_err(|e| Error::malformed(source, format!("invalid JSON: {}", e)))?;

    let entries = root
        .get(RESULTS_FIELD)
        .and_then(JsonValue::as_array)
        .ok_or_else(|| Error::malformed(source, "missing top-level 'results' array"))?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let object = entry.as_object().ok_or_else(|| {
                Error::malformed(source, format!("results[{}] is not an object", i))
            })?;
            let mut flat: FlatRecord = flatten(object);
            tag_modifier(&mut flat, modifier);
            ResultRecord::from_flat(flat, modifier, source)
        })
        .collect()
}

/// Names of the variant directories below `root`, sorted.
pub fn list_variants<P: AsRef<Path>>(root: P) -> Result<Vec<String>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(Error::VariantNotFound(root.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Label for a variant directory: its last path component.
pub fn variant_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}
