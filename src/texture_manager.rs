use std::collections::HashMap;
use egui::{Context, TextureHandle, TextureId, ColorImage, TextureOptions};

use crate::element::ImageId;

/// Uploads background images to the GPU once and hands out their texture ids,
/// dropping the least recently drawn ones when the cache is full.
pub struct TextureManager {
    /// Cache of textures by image id
    texture_cache: HashMap<ImageId, TextureHandle>,
    /// Tracks when each texture was last used
    last_used: HashMap<ImageId, u64>,
    /// Current frame counter for LRU tracking
    current_frame: u64,
    /// Maximum number of textures to cache
    max_cache_size: usize,
}

impl std::fmt::Debug for TextureManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureManager")
            .field("cached", &self.texture_cache.len())
            .field("current_frame", &self.current_frame)
            .field("max_cache_size", &self.max_cache_size)
            .finish()
    }
}

impl TextureManager {
    /// Creates a new texture manager with the specified cache size
    pub fn new(max_cache_size: usize) -> Self {
        Self {
            texture_cache: HashMap::new(),
            last_used: HashMap::new(),
            current_frame: 0,
            max_cache_size: max_cache_size.max(1),
        }
    }

    /// Increments the frame counter, called once per repaint
    pub fn begin_frame(&mut self) {
        self.current_frame += 1;
    }

    /// Gets or uploads the texture for the given image
    pub fn get_or_create_texture(
        &mut self,
        image_id: ImageId,
        pixels: &ColorImage,
        ctx: &Context,
    ) -> TextureId {
        if let Some(handle) = self.texture_cache.get(&image_id) {
            self.last_used.insert(image_id, self.current_frame);
            return handle.id();
        }

        let name = format!("background_{}", image_id);
        log::debug!("Uploading texture {} ({}x{})", name, pixels.size[0], pixels.size[1]);
        let handle = ctx.load_texture(&name, pixels.clone(), TextureOptions::LINEAR);
        let id = handle.id();

        self.texture_cache.insert(image_id, handle);
        self.last_used.insert(image_id, self.current_frame);
        self.prune_cache_if_needed();

        id
    }

    /// Prunes the cache if it exceeds the maximum size
    fn prune_cache_if_needed(&mut self) {
        if self.texture_cache.len() <= self.max_cache_size {
            return;
        }

        let mut entries: Vec<(ImageId, u64)> = self.last_used
            .iter()
            .map(|(k, v)| (*k, *v))
            .collect();

        // Oldest first
        entries.sort_by_key(|(_, frame)| *frame);

        let to_remove = entries.len() - self.max_cache_size;
        for (id, _) in entries.iter().take(to_remove) {
            self.texture_cache.remove(id);
            self.last_used.remove(id);
        }
    }

    /// Returns the number of textures currently in the cache
    pub fn cache_size(&self) -> usize {
        self.texture_cache.len()
    }

    #[cfg(test)]
    pub fn get_texture(&self, image_id: ImageId) -> Option<&TextureHandle> {
        self.texture_cache.get(&image_id)
    }
}
