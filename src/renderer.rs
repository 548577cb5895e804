// src/renderer.rs
use egui::Color32;

use crate::element::{Element, Item, ProvisionalRect};
use crate::surface::Surface;

/// Full-redraw render pass.
///
/// Every frame clears the whole surface and repaints the committed list from
/// scratch, so what is visible never drifts from the list.
#[derive(Debug, Default)]
pub struct Renderer {
    frames: u64,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames rendered so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Repaint `items` in order, then the provisional box on top.
    ///
    /// The provisional box is outlined with the surface's current pen, which
    /// the caller sets to the drag color beforehand.
    pub fn render(
        &mut self,
        surface: &mut dyn Surface,
        items: &[Item],
        provisional: Option<&ProvisionalRect>,
    ) {
        surface.clear_rect(surface.bounds());

        for item in items {
            item.draw(surface);
        }

        if let Some(provisional) = provisional {
            surface.stroke_rect(provisional.to_rect());
        }

        self.frames += 1;
        log::trace!("Rendered frame {} ({} items)", self.frames, items.len());
    }

    /// Point the surface's pen at `color`, keeping width and cap
    pub fn set_ambient_color(surface: &mut dyn Surface, color: Color32) {
        let style = surface.stroke_style();
        surface.set_stroke_style(style.with_color(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{BackgroundImage, ImageId, ImageSource, Rectangle, StrokeStyle};
    use crate::surface::{DrawCommand, RecordingSurface};
    use egui::{pos2, vec2, ColorImage, Rect};
    use std::sync::Arc;

    fn surface() -> RecordingSurface {
        RecordingSurface::new(vec2(200.0, 100.0)).with_style(StrokeStyle::default())
    }

    #[test]
    fn test_render_restores_ambient_color() {
        let mut surface = surface();
        let items = vec![Item::Rectangle(Rectangle::new(1.0, 2.0, 3.0, 4.0, Color32::RED))];

        Renderer::new().render(&mut surface, &items, None);

        assert_eq!(surface.stroke_style(), StrokeStyle::default());
        assert_eq!(surface.stroked_rects()[0].1.color, Color32::RED);
    }

    #[test]
    fn test_unloaded_background_is_skipped() {
        let mut surface = surface();
        let mut background = BackgroundImage::new(ImageId::new(), ImageSource::Path("bg.png".into()));
        let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0, Color32::GREEN);

        let mut renderer = Renderer::new();
        renderer.render(&mut surface, &[background.clone().into(), rect.into()], None);
        assert!(!surface.commands().iter().any(|c| matches!(c, DrawCommand::Image { .. })));

        background.set_pixels(Arc::new(ColorImage::new([2, 2], Color32::WHITE)));
        renderer.render(&mut surface, &[background.clone().into(), rect.into()], None);
        assert_eq!(
            surface.commands()[1],
            DrawCommand::Image { id: background.id(), dest: surface.bounds() }
        );
        assert_eq!(renderer.frame_count(), 2);
    }

    #[test]
    fn test_provisional_drawn_last_in_ambient_color() {
        let mut surface = surface();
        Renderer::set_ambient_color(&mut surface, Color32::YELLOW);
        let items = vec![Item::Rectangle(Rectangle::new(0.0, 0.0, 5.0, 5.0, Color32::RED))];
        let mut provisional = ProvisionalRect::new(pos2(10.0, 10.0));
        provisional.update(pos2(4.0, 2.0), || Color32::YELLOW);

        Renderer::new().render(&mut surface, &items, Some(&provisional));

        let (rect, style) = *surface.stroked_rects().last().unwrap();
        assert_eq!(rect, Rect::from_min_max(pos2(4.0, 2.0), pos2(10.0, 10.0)));
        assert_eq!(style.color, Color32::YELLOW);
    }

    #[test]
    fn test_render_twice_is_identical() {
        let mut surface = surface();
        let items: Vec<Item> = vec![
            Rectangle::new(0.0, 0.0, 5.0, 5.0, Color32::RED).into(),
            Rectangle::new(9.0, 9.0, -5.0, 2.0, Color32::BLUE).into(),
        ];
        let mut renderer = Renderer::new();

        renderer.render(&mut surface, &items, None);
        let first = surface.commands().to_vec();
        renderer.render(&mut surface, &items, None);

        assert_eq!(surface.commands(), first.as_slice());
    }
}
