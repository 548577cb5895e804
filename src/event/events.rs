use egui::{ColorImage, Pos2};
use std::sync::Arc;

use crate::element::ImageId;

/// Everything that can change the canvas.
///
/// Pointer positions are surface-local; the host subtracts the surface's
/// on-screen offset before dispatching. Events are handled one at a time.
#[derive(Debug, Clone)]
pub enum CanvasEvent {
    PointerDown { pos: Pos2 },
    PointerMove { pos: Pos2 },
    PointerUp { pos: Pos2 },
    /// A background finished decoding
    ImageLoaded { id: ImageId, pixels: Arc<ColorImage> },
}

impl CanvasEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CanvasEvent::PointerDown { .. } => "pointer_down",
            CanvasEvent::PointerMove { .. } => "pointer_move",
            CanvasEvent::PointerUp { .. } => "pointer_up",
            CanvasEvent::ImageLoaded { .. } => "image_loaded",
        }
    }
}
