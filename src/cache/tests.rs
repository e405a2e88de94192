use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

use image::{ImageResult, Rgba, RgbaImage};
use tempfile::{TempDir, tempdir};

use super::{FileDecoder, ImageCache, ImageDecoder, ThumbnailKey, contain, contain_size};
use crate::model::ThumbSize;

#[derive(Clone, Default)]
struct CountingDecoder {
    calls: Rc<Cell<usize>>,
}

impl ImageDecoder for CountingDecoder {
    fn decode(&self, path: &Path) -> ImageResult<RgbaImage> {
        self.calls.set(self.calls.get() + 1);
        FileDecoder.decode(path)
    }
}

fn write_png(dir: &TempDir, name: &str, width: u32, height: u32, color: [u8; 4]) -> PathBuf {
    let path = dir.path().join(name);
    RgbaImage::from_pixel(width, height, Rgba(color))
        .save(&path)
        .expect("save png");
    path
}

fn cell_box() -> ThumbSize {
    ThumbSize::square(220).expect("size")
}

#[test]
fn repeated_requests_decode_once() {
    let dir = tempdir().expect("tempdir");
    let path = write_png(&dir, "wide.png", 440, 220, [255, 0, 0, 255]);
    let decoder = CountingDecoder::default();
    let calls = Rc::clone(&decoder.calls);
    let mut cache = ImageCache::with_decoder(decoder);

    let first = cache.displayable(&path, Some(cell_box())).expect("thumbnail");
    let second = cache.displayable(&path, Some(cell_box())).expect("thumbnail");

    assert_eq!(calls.get(), 1);
    assert!(Arc::ptr_eq(&first.image, &second.image));
    assert_eq!(cache.original_count(), 1);
    assert_eq!(cache.thumbnail_count(), 1);
}

#[test]
fn cached_result_ignores_later_file_changes() {
    let dir = tempdir().expect("tempdir");
    let path = write_png(&dir, "swap.png", 440, 220, [255, 0, 0, 255]);
    let mut cache = ImageCache::new();
    let before = cache.displayable(&path, Some(cell_box())).expect("thumbnail");

    write_png(&dir, "swap.png", 50, 50, [0, 0, 255, 255]);
    let after = cache.displayable(&path, Some(cell_box())).expect("thumbnail");

    assert_eq!((after.width(), after.height()), (220, 110));
    assert_eq!(before.image.pixels[0], after.image.pixels[0]);
    let original = cache.original(&path).expect("original");
    assert_eq!(original.dimensions(), (440, 220));
}

#[test]
fn sizes_share_one_decoded_original() {
    let dir = tempdir().expect("tempdir");
    let path = write_png(&dir, "shared.png", 300, 600, [0, 255, 0, 255]);
    let decoder = CountingDecoder::default();
    let calls = Rc::clone(&decoder.calls);
    let mut cache = ImageCache::with_decoder(decoder);

    let small = cache
        .displayable(&path, Some(ThumbSize::square(100).expect("size")))
        .expect("small");
    let large = cache.displayable(&path, Some(cell_box())).expect("large");
    let full = cache.displayable(&path, None).expect("original");

    assert_eq!(calls.get(), 1);
    assert_eq!(cache.thumbnail_count(), 3);
    assert_eq!((small.width(), small.height()), (50, 100));
    assert_eq!((large.width(), large.height()), (110, 220));
    assert_eq!((full.width(), full.height()), (300, 600));
    assert!(cache.contains_thumbnail(&ThumbnailKey::new(&path, None)));
}

#[test]
fn missing_paths_yield_nothing() {
    let dir = tempdir().expect("tempdir");
    let decoder = CountingDecoder::default();
    let calls = Rc::clone(&decoder.calls);
    let mut cache = ImageCache::with_decoder(decoder);

    assert!(cache.displayable(Path::new(""), Some(cell_box())).is_none());
    assert!(
        cache
            .displayable(&dir.path().join("absent.png"), Some(cell_box()))
            .is_none()
    );
    assert!(cache.displayable(dir.path(), None).is_none());
    assert_eq!(calls.get(), 0);
    assert_eq!(cache.original_count(), 0);
    assert_eq!(cache.thumbnail_count(), 0);
}

#[test]
fn decode_failures_are_retried_and_recover() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not an image").expect("write");
    let decoder = CountingDecoder::default();
    let calls = Rc::clone(&decoder.calls);
    let mut cache = ImageCache::with_decoder(decoder);

    assert!(cache.displayable(&path, Some(cell_box())).is_none());
    assert!(cache.displayable(&path, Some(cell_box())).is_none());
    assert_eq!(calls.get(), 2);
    assert!(!cache.contains_original(&path));
    assert_eq!(cache.thumbnail_count(), 0);

    write_png(&dir, "broken.png", 10, 10, [1, 2, 3, 255]);
    let thumbnail = cache.displayable(&path, Some(cell_box())).expect("recovered");
    assert_eq!((thumbnail.width(), thumbnail.height()), (10, 10));
    assert_eq!(calls.get(), 3);
}

#[test]
fn transparency_survives_scaling() {
    let dir = tempdir().expect("tempdir");
    let path = write_png(&dir, "clear.png", 440, 440, [0, 0, 0, 0]);
    let mut cache = ImageCache::new();
    let thumbnail = cache.displayable(&path, Some(cell_box())).expect("thumbnail");
    assert_eq!((thumbnail.width(), thumbnail.height()), (220, 220));
    assert!(thumbnail.image.pixels.iter().all(|pixel| pixel.a() == 0));
}

#[test]
fn containment_matches_the_limiting_side() {
    let size = cell_box();
    assert_eq!(contain_size(440, 220, size), (220, 110));
    assert_eq!(contain_size(100, 440, size), (50, 220));
    assert_eq!(contain_size(1000, 3, size), (220, 1));
    assert_eq!(contain_size(221, 221, size), (220, 220));
    assert_eq!(contain_size(640, 480, size), (220, 165));

    let wide = ThumbSize::new(300, 100).expect("size");
    assert_eq!(contain_size(600, 600, wide), (100, 100));
    assert_eq!(contain_size(900, 150, wide), (300, 50));
}

#[test]
fn containment_keeps_aspect_ratio() {
    let size = cell_box();
    for (width, height) in [(1024, 768), (333, 999), (4000, 2250), (500, 499)] {
        let (scaled_w, scaled_h) = contain_size(width, height, size);
        assert!(scaled_w <= 220 && scaled_h <= 220);
        assert!(scaled_w == 220 || scaled_h == 220);
        let original = f64::from(width) / f64::from(height);
        let scaled = f64::from(scaled_w) / f64::from(scaled_h);
        let tolerance = original / f64::from(scaled_w.min(scaled_h));
        assert!((original - scaled).abs() <= tolerance);
    }
}

#[test]
fn small_images_are_not_enlarged() {
    let size = cell_box();
    assert_eq!(contain_size(100, 50, size), (100, 50));
    assert_eq!(contain_size(220, 220, size), (220, 220));

    let image = RgbaImage::from_pixel(30, 40, Rgba([9, 9, 9, 255]));
    let copy = contain(&image, Some(size));
    assert_eq!(copy.dimensions(), (30, 40));
    assert_eq!(contain(&image, None), image);
}

#[test]
fn format_is_detected_from_content() {
    let dir = tempdir().expect("tempdir");
    let source = write_png(&dir, "source.png", 40, 20, [200, 100, 50, 255]);
    let no_extension = dir.path().join("noext");
    let mislabeled = dir.path().join("mislabeled.jpg");
    std::fs::copy(&source, &no_extension).expect("copy");
    std::fs::copy(&source, &mislabeled).expect("copy");
    let mut cache = ImageCache::new();

    for path in [&no_extension, &mislabeled] {
        let thumbnail = cache
            .displayable(path, Some(cell_box()))
            .expect("decoded from content");
        assert_eq!((thumbnail.width(), thumbnail.height()), (40, 20));
        assert_eq!(
            thumbnail.image.pixels[0],
            eframe::egui::Color32::from_rgba_unmultiplied(200, 100, 50, 255)
        );
    }
    assert_eq!(cache.original_count(), 2);
}
