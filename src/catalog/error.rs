use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("options file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("option at index {index}: field `{field}` {reason}")]
    Malformed {
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("options file must be a JSON array, found {0}")]
    NotAnArray(&'static str),

    #[error("options could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Dialog title used by the window shell.
    pub fn title(&self) -> &'static str {
        match self {
            CatalogError::Unreadable { .. }
            | CatalogError::Serialize(_)
            | CatalogError::Write { .. } => "Load Options Failed",
            CatalogError::Parse(_) | CatalogError::Malformed { .. } | CatalogError::NotAnArray(_) => {
                "Invalid Options Format"
            }
        }
    }
}
