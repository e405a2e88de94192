use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::model::ThumbSize;

/// Dimensions of an image shrunk to fit inside `size` with its aspect ratio kept.
///
/// Images that already fit are left alone. Otherwise the limiting side lands
/// exactly on the box and the other side is rounded, never exceeding the box.
pub fn contain_size(width: u32, height: u32, size: ThumbSize) -> (u32, u32) {
    if width == 0 || height == 0 || size.contains(width, height) {
        return (width, height);
    }
    let scale_w = f64::from(size.width()) / f64::from(width);
    let scale_h = f64::from(size.height()) / f64::from(height);
    if scale_w <= scale_h {
        let scaled = (f64::from(height) * scale_w).round() as u32;
        (size.width(), scaled.clamp(1, size.height()))
    } else {
        let scaled = (f64::from(width) * scale_h).round() as u32;
        (scaled.clamp(1, size.width()), size.height())
    }
}

/// Working copy of `image`, shrunk with Lanczos3 when a box is given.
pub fn contain(image: &RgbaImage, size: Option<ThumbSize>) -> RgbaImage {
    let Some(size) = size else {
        return image.clone();
    };
    let (width, height) = image.dimensions();
    let (target_w, target_h) = contain_size(width, height, size);
    if (target_w, target_h) == (width, height) {
        return image.clone();
    }
    imageops::resize(image, target_w, target_h, FilterType::Lanczos3)
}
