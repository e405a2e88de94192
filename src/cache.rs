mod decoder;
mod scale;
mod store;

#[cfg(test)]
mod tests;

pub use decoder::{FileDecoder, ImageDecoder};
pub use scale::{contain, contain_size};
pub use store::{ImageCache, Thumbnail, ThumbnailKey};
