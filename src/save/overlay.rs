use egui::{Color32, Rect, Vec2};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use uuid::Uuid;

use super::SaveListener;
use crate::element::Rectangle;
use crate::error::ListenerError;

/// Side length of the annotation square spawned for each saved box
pub const OVERLAY_SIZE: f32 = 100.0;

/// Overlays are tinted with the box color at this opacity
pub const OVERLAY_ALPHA: u8 = 96;

/// Colored annotation placed over an accepted box.
///
/// `rect` is expressed in container coordinates: the space of the element
/// that hosts both the drawing surface and the annotations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub id: Uuid,
    pub rect: Rect,
    pub color: Color32,
}

#[derive(Debug, Default)]
struct OverlayState {
    overlays: RefCell<Vec<Overlay>>,
    surface_offset: Cell<Vec2>,
}

/// Annotations shared between the listener that spawns them and the host that draws them
#[derive(Debug, Clone, Default)]
pub struct OverlayLayer {
    inner: Rc<OverlayState>,
}

impl OverlayLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the drawing surface's top-left corner inside the container
    pub fn set_surface_offset(&self, offset: Vec2) {
        self.inner.surface_offset.set(offset);
    }

    pub fn surface_offset(&self) -> Vec2 {
        self.inner.surface_offset.get()
    }

    pub fn overlays(&self) -> Vec<Overlay> {
        self.inner.overlays.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.overlays.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&self, overlay: Overlay) {
        self.inner.overlays.borrow_mut().push(overlay);
    }
}

/// Listener that accepts every box and annotates it with a square centred on
/// the box midpoint.
#[derive(Debug, Clone)]
pub struct OverlayListener {
    layer: OverlayLayer,
    size: f32,
    alpha: u8,
}

impl OverlayListener {
    pub fn new(layer: OverlayLayer) -> Self {
        Self {
            layer,
            size: OVERLAY_SIZE,
            alpha: OVERLAY_ALPHA,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    /// Where the annotation for `rect` goes, in container coordinates
    pub fn overlay_rect(&self, rect: &Rectangle) -> Rect {
        let center = rect.center() + self.layer.surface_offset();
        Rect::from_center_size(center, Vec2::splat(self.size))
    }
}

impl SaveListener for OverlayListener {
    fn on_save(&mut self, rect: &Rectangle) -> Result<bool, ListenerError> {
        let [r, g, b, _] = rect.color().to_array();
        let overlay = Overlay {
            id: Uuid::new_v4(),
            rect: self.overlay_rect(rect),
            color: Color32::from_rgba_unmultiplied(r, g, b, self.alpha),
        };
        log::debug!("Spawning overlay {} at {:?}", overlay.id, overlay.rect);
        self.layer.push(overlay);
        Ok(true)
    }

    fn name(&self) -> &str {
        "overlay"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_overlay_centred_on_box_midpoint() {
        let layer = OverlayLayer::new();
        layer.set_surface_offset(vec2(20.0, 30.0));
        let mut listener = OverlayListener::new(layer.clone());

        let accepted = listener.on_save(&Rectangle::new(10.0, 10.0, 40.0, 30.0, Color32::RED));

        assert!(matches!(accepted, Ok(true)));
        let overlays = layer.overlays();
        assert_eq!(overlays.len(), 1);
        assert_eq!(overlays[0].rect.center(), pos2(50.0, 55.0));
        assert_eq!(overlays[0].rect.size(), vec2(OVERLAY_SIZE, OVERLAY_SIZE));
    }

    #[test]
    fn test_overlay_keeps_box_color_with_listener_alpha() {
        let layer = OverlayLayer::new();
        let mut listener = OverlayListener::new(layer.clone()).with_alpha(200);

        listener
            .on_save(&Rectangle::new(0.0, 0.0, 10.0, 10.0, Color32::GREEN))
            .unwrap();

        assert_eq!(
            layer.overlays()[0].color,
            Color32::from_rgba_unmultiplied(0, 255, 0, 200)
        );
    }

    #[test]
    fn test_overlay_for_inverted_box() {
        let layer = OverlayLayer::new();
        let mut listener = OverlayListener::new(layer.clone()).with_size(10.0);

        listener
            .on_save(&Rectangle::new(50.0, 40.0, -40.0, -30.0, Color32::BLUE))
            .unwrap();

        assert_eq!(layer.overlays()[0].rect.center(), pos2(30.0, 25.0));
    }
}
