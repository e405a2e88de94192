mod error;
mod option;
mod position;
mod size;


pub use error::{ModelError, Result};
pub use option::ImageOption;
pub use position::CellPosition;
pub use size::ThumbSize;
