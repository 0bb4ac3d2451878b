use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Variant directory not found: {}", .0.display())]
    VariantNotFound(PathBuf),

    #[error("Missing result file: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Malformed input in {source_name}: {message}")]
    MalformedInput {
        source_name: String,
        message: String,
    },

    #[error("Unknown modifier: {0}")]
    UnknownModifier(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::MalformedInput {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_message_names_path() {
        let err = Error::MissingFile {
            path: PathBuf::from("master/nt.results.json"),
        };
        assert_eq!(
            err.to_string(),
            "Missing result file: master/nt.results.json"
        );
    }

    #[test]
    fn test_malformed_message() {
        let err = Error::malformed("dt.results.json", "missing 'results' array");
        assert_eq!(
            err.to_string(),
            "Malformed input in dt.results.json: missing 'results' array"
        );
    }
}
