mod context;
mod error;


pub use context::{AppContext, CLEARED_STATUS, READY_STATUS};
pub use error::{AppError, Result};
