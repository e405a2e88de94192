use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid thumbnail size {width}x{height}: both sides must be positive")]
    InvalidSize { width: u32, height: u32 },

    #[error("cell index {0} is outside the 3x3 grid")]
    CellIndex(usize),
}
