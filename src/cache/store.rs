use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use eframe::egui::ColorImage;
use image::RgbaImage;

use crate::model::ThumbSize;

use super::{FileDecoder, ImageDecoder, contain};

/// Thumbnail cache key. `size == None` stands for the unscaled original.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThumbnailKey {
    pub path: PathBuf,
    pub size: Option<ThumbSize>,
}

impl ThumbnailKey {
    pub fn new(path: impl Into<PathBuf>, size: Option<ThumbSize>) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }
}

#[derive(Clone)]
pub struct Thumbnail {
    pub key: ThumbnailKey,
    pub image: Arc<ColorImage>,
}

impl Thumbnail {
    pub fn width(&self) -> usize {
        self.image.size[0]
    }

    pub fn height(&self) -> usize {
        self.image.size[1]
    }
}

/// Decoded originals and scaled thumbnails, each kept for the life of the cache.
///
/// Decode failures are not remembered, so a broken path is retried on every
/// request and picks up a file that appears later.
pub struct ImageCache {
    decoder: Box<dyn ImageDecoder>,
    originals: HashMap<PathBuf, Arc<RgbaImage>>,
    thumbnails: HashMap<ThumbnailKey, Thumbnail>,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCache {
    pub fn new() -> Self {
        Self::with_decoder(FileDecoder)
    }

    pub fn with_decoder(decoder: impl ImageDecoder + 'static) -> Self {
        Self {
            decoder: Box::new(decoder),
            originals: HashMap::new(),
            thumbnails: HashMap::new(),
        }
    }

    pub fn original(&mut self, path: &Path) -> Option<Arc<RgbaImage>> {
        if path.as_os_str().is_empty() || !path.is_file() {
            return None;
        }
        if let Some(image) = self.originals.get(path) {
            return Some(Arc::clone(image));
        }
        match self.decoder.decode(path) {
            Ok(image) => {
                log::debug!(
                    "decoded {} ({}x{})",
                    path.display(),
                    image.width(),
                    image.height()
                );
                let image = Arc::new(image);
                self.originals.insert(path.to_path_buf(), Arc::clone(&image));
                Some(image)
            }
            Err(error) => {
                log::debug!("could not decode {}: {error}", path.display());
                None
            }
        }
    }

    pub fn displayable(&mut self, path: &Path, size: Option<ThumbSize>) -> Option<Thumbnail> {
        let original = self.original(path)?;
        let key = ThumbnailKey::new(path, size);
        if let Some(thumbnail) = self.thumbnails.get(&key) {
            return Some(thumbnail.clone());
        }

        let scaled = contain(&original, size);
        let (width, height) = scaled.dimensions();
        let image = ColorImage::from_rgba_unmultiplied(
            [width as usize, height as usize],
            scaled.as_raw(),
        );
        let thumbnail = Thumbnail {
            key: key.clone(),
            image: Arc::new(image),
        };
        self.thumbnails.insert(key, thumbnail.clone());
        Some(thumbnail)
    }

    pub fn original_count(&self) -> usize {
        self.originals.len()
    }

    pub fn thumbnail_count(&self) -> usize {
        self.thumbnails.len()
    }

    pub fn contains_original(&self, path: &Path) -> bool {
        self.originals.contains_key(path)
    }

    pub fn contains_thumbnail(&self, key: &ThumbnailKey) -> bool {
        self.thumbnails.contains_key(key)
    }
}

impl std::fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Thumbnail")
            .field("key", &self.key)
            .field("size", &self.image.size)
            .finish()
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("originals", &self.originals.len())
            .field("thumbnails", &self.thumbnails.len())
            .finish()
    }
}
