use egui::{Color32, ColorImage, Pos2};
use std::sync::Arc;

use crate::element::{BackgroundImage, ImageId, ImageSource, Item, ProvisionalRect, Rectangle};
use crate::save::{Decision, SavePipeline};

/// What happened to the provisional box at release
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Finalized {
    Committed(Rectangle),
    Discarded(Rectangle),
}

/// The drawing: an append-only list of committed items and at most one box
/// still being dragged.
#[derive(Debug, Default)]
pub struct Document {
    items: Vec<Item>,
    provisional: Option<ProvisionalRect>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed items in paint order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Committed boxes in paint order
    pub fn rectangles(&self) -> impl Iterator<Item = &Rectangle> + '_ {
        self.items.iter().filter_map(Item::as_rectangle)
    }

    pub fn provisional(&self) -> Option<&ProvisionalRect> {
        self.provisional.as_ref()
    }

    /// Append a background whose pixels are not loaded yet
    pub fn push_background(&mut self, source: ImageSource) -> ImageId {
        let id = ImageId::new();
        log::debug!("Adding background {} from {}", id, source.name());
        self.items.push(Item::Background(BackgroundImage::new(id, source)));
        id
    }

    /// Attach decoded pixels to a background.
    ///
    /// Returns false when no pending background has that id.
    pub fn set_background_pixels(&mut self, id: ImageId, pixels: Arc<ColorImage>) -> bool {
        let background = self.items.iter_mut().find_map(|item| match item {
            Item::Background(image) if image.id() == id => Some(image),
            _ => None,
        });

        match background {
            Some(image) if !image.is_ready() => {
                image.set_pixels(pixels);
                true
            }
            Some(_) => {
                log::warn!("Background {} was already loaded", id);
                false
            }
            None => {
                log::warn!("No background with id {}", id);
                false
            }
        }
    }

    /// Start a new provisional box at `anchor`. No-op while one exists.
    pub fn begin_provisional(&mut self, anchor: Pos2) {
        if self.provisional.is_some() {
            log::debug!("Provisional box already in progress, ignoring begin at {:?}", anchor);
            return;
        }
        self.provisional = Some(ProvisionalRect::new(anchor));
    }

    /// Stretch the provisional box to `pos`. No-op without one.
    pub fn update_provisional(&mut self, pos: Pos2, color_if_unset: impl FnOnce() -> Color32) {
        if let Some(provisional) = &mut self.provisional {
            provisional.update(pos, color_if_unset);
        }
    }

    /// Freeze the provisional box and run it past the pipeline.
    ///
    /// Accepted boxes are appended; rejected ones are dropped. Either way the
    /// provisional slot is empty afterwards. Returns `None` when there was no
    /// provisional box.
    pub fn commit_or_discard_provisional(
        &mut self,
        pipeline: &mut SavePipeline,
        fallback_color: impl FnOnce() -> Color32,
    ) -> Option<Finalized> {
        let rect = self.provisional.take()?.freeze(fallback_color);

        match pipeline.evaluate(&rect) {
            Decision::Accept => {
                log::info!(
                    "Committed box at ({}, {}) size {}x{}",
                    rect.x(),
                    rect.y(),
                    rect.width(),
                    rect.height()
                );
                self.items.push(Item::Rectangle(rect));
                Some(Finalized::Committed(rect))
            }
            Decision::Reject => {
                log::debug!("Discarded box at ({}, {})", rect.x(), rect.y());
                Some(Finalized::Discarded(rect))
            }
        }
    }
}
