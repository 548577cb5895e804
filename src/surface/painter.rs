use egui::{pos2, Color32, ColorImage, Painter, Pos2, Rect, Shape, Stroke, Vec2};
use std::sync::Arc;

use super::Surface;
use crate::element::{ImageId, LineCap, StrokeStyle};
use crate::texture_manager::TextureManager;

const TEXTURE_CACHE_SIZE: usize = 8;

/// egui-backed surface.
///
/// egui repaints from scratch every frame, so this surface retains the shapes
/// produced by the last render and replays them through a [`Painter`] at the
/// canvas' current screen position.
pub struct PainterSurface {
    ctx: egui::Context,
    size: Vec2,
    style: StrokeStyle,
    shapes: Vec<Shape>,
    textures: TextureManager,
}

impl std::fmt::Debug for PainterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PainterSurface")
            .field("size", &self.size)
            .field("style", &self.style)
            .field("shapes", &self.shapes.len())
            .field("textures", &self.textures)
            .finish()
    }
}

impl PainterSurface {
    pub fn new(ctx: egui::Context, size: Vec2, style: StrokeStyle) -> Self {
        Self {
            ctx,
            size,
            style,
            shapes: Vec::new(),
            textures: TextureManager::new(TEXTURE_CACHE_SIZE),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Replay the retained shapes with the surface origin at `origin`
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        painter.extend(self.shapes.iter().cloned().map(|mut shape| {
            shape.translate(offset);
            shape
        }));
    }

    fn egui_stroke(&self) -> Stroke {
        Stroke::new(self.style.line_width, self.style.color)
    }

    /// Square caps extend the outline by half a line width; round caps
    /// round the corners instead.
    fn outline_shape(&self, rect: Rect) -> Shape {
        let half = self.style.line_width / 2.0;
        match self.style.line_cap {
            LineCap::Butt => Shape::rect_stroke(rect, 0.0, self.egui_stroke()),
            LineCap::Round => Shape::rect_stroke(rect, half, self.egui_stroke()),
            LineCap::Square => Shape::rect_stroke(rect.expand(half), 0.0, self.egui_stroke()),
        }
    }
}

impl Surface for PainterSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear_rect(&mut self, rect: Rect) {
        if rect.contains_rect(self.bounds()) {
            self.shapes.clear();
            self.textures.begin_frame();
        } else {
            self.shapes
                .retain(|shape| !rect.contains_rect(shape.visual_bounding_rect()));
        }
    }

    fn stroke_style(&self) -> StrokeStyle {
        self.style
    }

    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    fn stroke_rect(&mut self, rect: Rect) {
        let shape = self.outline_shape(rect);
        self.shapes.push(shape);
    }

    fn draw_image(&mut self, id: ImageId, pixels: &Arc<ColorImage>, dest: Rect) {
        let texture = self.textures.get_or_create_texture(id, pixels, &self.ctx);
        let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
        self.shapes
            .push(Shape::image(texture, dest, uv, Color32::WHITE));
    }
}
