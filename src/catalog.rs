mod error;
mod io;
mod parse;
mod store;


pub use error::{CatalogError, Result};
pub use io::{read_options, save_options};
pub use parse::{OptionRecord, parse_options};
pub use store::OptionStore;
