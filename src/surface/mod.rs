use egui::{ColorImage, Pos2, Rect, Vec2};
use std::sync::Arc;

use crate::element::{ImageId, StrokeStyle};

mod painter;
mod recording;

pub use painter::PainterSurface;
pub use recording::{DrawCommand, RecordingSurface};

/// Drawable area the canvas paints onto.
///
/// Coordinates are surface-local: `(0, 0)` is the top-left corner of the
/// drawable area, whatever its position on screen.
pub trait Surface {
    /// Pixel dimensions of the drawable area
    fn size(&self) -> Vec2;

    /// The full drawable area in surface-local coordinates
    fn bounds(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size())
    }

    /// Erase everything inside `rect`
    fn clear_rect(&mut self, rect: Rect);

    /// The current pen
    fn stroke_style(&self) -> StrokeStyle;

    /// Replace the current pen
    fn set_stroke_style(&mut self, style: StrokeStyle);

    /// Outline `rect` with the current pen
    fn stroke_rect(&mut self, rect: Rect);

    /// Draw `pixels` stretched to fill `dest`
    fn draw_image(&mut self, id: ImageId, pixels: &Arc<ColorImage>, dest: Rect);
}
