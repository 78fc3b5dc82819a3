// src/gui/images.rs
//
// Texture cache for local card images. A failed decode is remembered so
// the file isn't re-read every frame.

use std::collections::HashMap;
use std::path::Path;

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

#[derive(Default)]
pub struct ImageCache {
    textures: HashMap<String, Option<TextureHandle>>,
}

impl ImageCache {
    pub fn clear(&mut self) {
        self.textures.clear();
    }

    pub fn get_or_load(&mut self, ctx: &egui::Context, id: &str, path: &Path) -> Option<&TextureHandle> {
        self.textures
            .entry(s!(id))
            .or_insert_with(|| match load_png(path) {
                Ok(img) => Some(ctx.load_texture(id, img, TextureOptions::LINEAR)),
                Err(e) => {
                    loge!("Image: {}: {e}", path.display());
                    None
                }
            })
            .as_ref()
    }
}

fn load_png(path: &Path) -> Result<ColorImage, image::ImageError> {
    let rgba = image::open(path)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
