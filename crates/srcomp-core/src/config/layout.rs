use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::result::Modifier;

/// One result file inside a variant directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultFile {
    pub file: String,
    pub modifier: Modifier,
}

impl ResultFile {
    pub fn new(file: impl Into<String>, modifier: Modifier) -> Self {
        Self {
            file: file.into(),
            modifier,
        }
    }
}

/// Ordered list of result files loaded for every variant.
///
/// Load order matters: when the same key appears in two files, the file listed
/// later wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultLayout {
    pub files: Vec<ResultFile>,
}

impl Default for ResultLayout {
    fn default() -> Self {
        Self {
            files: vec![
                ResultFile::new("nt.results.json", Modifier::NoMod),
                ResultFile::new("dt.results.json", Modifier::DoubleTime),
                ResultFile::new("ht.results.json", Modifier::HalfTime),
            ],
        }
    }
}

impl ResultLayout {
    pub fn new(files: Vec<ResultFile>) -> Self {
        Self { files }
    }

    /// Layout containing a single file.
    pub fn single(file: impl Into<String>, modifier: Modifier) -> Self {
        Self {
            files: vec![ResultFile::new(file, modifier)],
        }
    }

    /// Load a layout from a JSON file of the form
    /// `{"files": [{"file": "nt.results.json", "modifier": "NT"}]}`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let layout: Self = serde_json::from_str(&content)?;
        if layout.files.is_empty() {
            return Err(Error::malformed(
                path.display().to_string(),
                "layout lists no result files",
            ));
        }
        Ok(layout)
    }

    /// Keep only the files tagged with `modifier`.
    pub fn only(&self, modifier: Modifier) -> Self {
        Self {
            files: self
                .files
                .iter()
                .filter(|f| f.modifier == modifier)
                .cloned()
                .collect(),
        }
    }
}
