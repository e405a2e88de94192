use std::path::Path;

use image::{ImageReader, ImageResult, RgbaImage};

/// Turns a file into a full-resolution RGBA bitmap.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> ImageResult<RgbaImage>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FileDecoder;

/// Sniffs the format from the file content; the extension is only a fallback.
impl ImageDecoder for FileDecoder {
    fn decode(&self, path: &Path) -> ImageResult<RgbaImage> {
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        Ok(reader.decode()?.to_rgba8())
    }
}
