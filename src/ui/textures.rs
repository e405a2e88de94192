use std::collections::HashMap;

use eframe::egui::{self, TextureHandle, TextureOptions};

use crate::cache::{Thumbnail, ThumbnailKey};

/// GPU textures for thumbnails, uploaded once per thumbnail key.
#[derive(Default)]
pub struct TextureCache {
    handles: HashMap<ThumbnailKey, TextureHandle>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_upload(&mut self, ctx: &egui::Context, thumbnail: &Thumbnail) -> &TextureHandle {
        self.handles
            .entry(thumbnail.key.clone())
            .or_insert_with(|| {
                let name = match thumbnail.key.size {
                    Some(size) => format!("{}@{size}", thumbnail.key.path.display()),
                    None => format!("{}@original", thumbnail.key.path.display()),
                };
                ctx.load_texture(name, (*thumbnail.image).clone(), TextureOptions::LINEAR)
            })
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
