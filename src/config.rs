use std::path::PathBuf;

use crate::model::ThumbSize;

pub const OPTIONS_FILE: &str = "options.json";
pub const IMAGES_DIR: &str = "images";
pub const WINDOW_TITLE: &str = "Nine Grid";

/// Fixed application settings. There is no layer above these defaults; the
/// option list itself lives in `options_path`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub options_path: PathBuf,
    pub images_dir: PathBuf,
    pub cell_size: ThumbSize,
    pub sample_count: usize,
    pub sample_image_size: u32,
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            options_path: PathBuf::from(OPTIONS_FILE),
            images_dir: PathBuf::from(IMAGES_DIR),
            cell_size: ThumbSize::CELL,
            sample_count: 9,
            sample_image_size: 256,
            window_title: WINDOW_TITLE.to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults rooted at `dir` instead of the working directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            options_path: dir.join(OPTIONS_FILE),
            images_dir: dir.join(IMAGES_DIR),
            ..Self::default()
        }
    }
}
