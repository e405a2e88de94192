use std::path::PathBuf;

/// One selectable entry of the option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOption {
    pub id: i64,
    pub name: String,
    pub image_path: PathBuf,
}

impl ImageOption {
    pub fn new(id: i64, name: impl Into<String>, image_path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            name: name.into(),
            image_path: image_path.into(),
        }
    }
}
