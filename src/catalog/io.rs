use std::fs;
use std::path::Path;

use crate::model::ImageOption;

use super::{CatalogError, OptionRecord, Result, parse_options};

pub fn read_options(path: impl AsRef<Path>) -> Result<Vec<ImageOption>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_options(&raw)
}

pub fn save_options(path: impl AsRef<Path>, options: &[ImageOption]) -> Result<()> {
    let path = path.as_ref();
    let records = options.iter().map(OptionRecord::from).collect::<Vec<_>>();
    let serialized = serde_json::to_string_pretty(&records).map_err(CatalogError::Serialize)?;
    fs::write(path, serialized).map_err(|source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
