use std::path::PathBuf;

use crate::catalog::CatalogError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SampleError>;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("could not create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write sample options: {0}")]
    Catalog(#[from] CatalogError),
}
