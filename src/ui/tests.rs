use std::sync::Arc;

use eframe::egui;

use super::TextureCache;
use super::layout::{box_size, window_size};
use crate::cache::{Thumbnail, ThumbnailKey};
use crate::model::ThumbSize;

fn thumbnail(path: &str, side: usize) -> Thumbnail {
    Thumbnail {
        key: ThumbnailKey::new(path, Some(ThumbSize::CELL)),
        image: Arc::new(egui::ColorImage::new([side, side], egui::Color32::RED)),
    }
}

#[test]
fn window_fits_the_whole_grid() {
    let window = window_size(ThumbSize::CELL);
    let cell = box_size(ThumbSize::CELL);
    assert_eq!(cell, egui::vec2(220.0, 220.0));
    assert!(window.x > 3.0 * cell.x);
    assert!(window.y > 3.0 * cell.y);
}

#[test]
fn textures_upload_once_per_key() {
    let ctx = egui::Context::default();
    let mut textures = TextureCache::new();
    let first = thumbnail("a.png", 4);
    let again = thumbnail("a.png", 4);
    let other = thumbnail("b.png", 4);

    let first_id = textures.get_or_upload(&ctx, &first).id();
    let again_id = textures.get_or_upload(&ctx, &again).id();
    let other_id = textures.get_or_upload(&ctx, &other).id();

    assert_eq!(first_id, again_id);
    assert_ne!(first_id, other_id);
    assert_eq!(textures.len(), 2);
    assert!(!textures.is_empty());
}
