use crate::catalog::CatalogError;
use crate::samples::SampleError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("sample data could not be generated: {0}")]
    Samples(#[from] SampleError),
}

impl AppError {
    /// Dialog title used by the window shell.
    pub fn title(&self) -> &'static str {
        match self {
            AppError::Catalog(error) => error.title(),
            AppError::Samples(_) => "Sample Generation Failed",
        }
    }
}
