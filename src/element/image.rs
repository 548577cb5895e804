use egui::ColorImage;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

use super::Element;
use crate::surface::Surface;

/// Stable identity of a background image, used to match load completions
/// and to key texture caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(Uuid);

impl ImageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the pixels of a background come from
#[derive(Clone, PartialEq)]
pub enum ImageSource {
    Path(PathBuf),
    Bytes { name: String, bytes: Arc<[u8]> },
}

impl ImageSource {
    pub fn name(&self) -> String {
        match self {
            ImageSource::Path(path) => path.display().to_string(),
            ImageSource::Bytes { name, .. } => name.clone(),
        }
    }
}

impl std::fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
            ImageSource::Bytes { name, bytes } => f
                .debug_struct("Bytes")
                .field("name", name)
                .field("len", &bytes.len())
                .finish(),
        }
    }
}

/// Raster image stretched over the whole surface.
///
/// It is pushed before its pixels exist; until [`BackgroundImage::set_pixels`]
/// is called it draws nothing.
#[derive(Clone)]
pub struct BackgroundImage {
    id: ImageId,
    source: ImageSource,
    pixels: Option<Arc<ColorImage>>,
}

impl std::fmt::Debug for BackgroundImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundImage")
            .field("id", &self.id)
            .field("source", &self.source)
            .field("size", &self.pixels.as_ref().map(|p| p.size))
            .finish()
    }
}

impl BackgroundImage {
    pub fn new(id: ImageId, source: ImageSource) -> Self {
        Self {
            id,
            source,
            pixels: None,
        }
    }

    pub fn id(&self) -> ImageId {
        self.id
    }

    pub fn is_ready(&self) -> bool {
        self.pixels.is_some()
    }

    pub(crate) fn set_pixels(&mut self, pixels: Arc<ColorImage>) {
        self.pixels = Some(pixels);
    }
}

impl Element for BackgroundImage {
    fn draw(&self, surface: &mut dyn Surface) {
        match &self.pixels {
            Some(pixels) => {
                let dest = surface.bounds();
                surface.draw_image(self.id, pixels, dest);
            }
            None => log::trace!("Background {} not loaded yet, skipping", self.id),
        }
    }
}
