use egui::{ColorImage, Rect, Vec2};
use std::sync::Arc;

use super::Surface;
use crate::element::{ImageId, StrokeStyle};

/// A single primitive that ended up on a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    StrokeRect { rect: Rect, style: StrokeStyle },
    Image { id: ImageId, dest: Rect },
}

/// Headless surface that keeps what is visible as a list of draw commands.
///
/// Clearing the whole area drops every recorded command, so the list always
/// describes the current picture rather than the drawing history.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    style: StrokeStyle,
    commands: Vec<DrawCommand>,
    full_clears: usize,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            style: StrokeStyle::default(),
            commands: Vec::new(),
            full_clears: 0,
        }
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    /// Commands painted since the last full clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of full repaints seen so far
    pub fn repaint_count(&self) -> usize {
        self.full_clears
    }

    /// Outlines in paint order
    pub fn stroked_rects(&self) -> Vec<(Rect, StrokeStyle)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::StrokeRect { rect, style } => Some((*rect, *style)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear_rect(&mut self, rect: Rect) {
        if rect.contains_rect(self.bounds()) {
            self.commands.clear();
            self.full_clears += 1;
        } else {
            self.commands.retain(|cmd| match cmd {
                DrawCommand::StrokeRect { rect: r, .. } | DrawCommand::Image { dest: r, .. } => {
                    !rect.contains_rect(*r)
                }
                DrawCommand::Clear(_) => true,
            });
        }
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn stroke_style(&self) -> StrokeStyle {
        self.style
    }

    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            style: self.style,
        });
    }

    fn draw_image(&mut self, id: ImageId, _pixels: &Arc<ColorImage>, dest: Rect) {
        self.commands.push(DrawCommand::Image { id, dest });
    }
}
