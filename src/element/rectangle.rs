use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use super::Element;
use crate::surface::Surface;

/// How the ends of a stroked outline are finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// The surface-wide pen used for outlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub line_cap: LineCap,
    pub line_width: f32,
    pub color: Color32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            line_cap: LineCap::Round,
            line_width: 5.0,
            color: Color32::BLACK,
        }
    }
}

impl StrokeStyle {
    pub fn with_color(self, color: Color32) -> Self {
        Self { color, ..self }
    }
}

/// A committed box.
///
/// `width` and `height` are signed: dragging up or to the left yields negative
/// extents, and the box keeps them as drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: Color32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Color32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// The corner the drag started from
    pub fn origin(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }

    /// Signed extent from the origin
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Midpoint of the box, valid for negative extents as well
    pub fn center(&self) -> Pos2 {
        self.origin() + self.extent() / 2.0
    }

    /// Normalized rectangle covering the same area
    pub fn to_rect(&self) -> Rect {
        Rect::from_two_pos(self.origin(), self.origin() + self.extent())
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

impl Element for Rectangle {
    fn draw(&self, surface: &mut dyn Surface) {
        // Each box keeps its own color; the ambient pen is restored afterwards.
        let ambient = surface.stroke_style();
        surface.set_stroke_style(ambient.with_color(self.color));
        surface.stroke_rect(self.to_rect());
        surface.set_stroke_style(ambient);
    }
}

/// The box currently being dragged out. Never part of the committed list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProvisionalRect {
    anchor: Pos2,
    extent: Vec2,
    color: Option<Color32>,
}

impl ProvisionalRect {
    pub fn new(anchor: Pos2) -> Self {
        Self {
            anchor,
            extent: Vec2::ZERO,
            color: None,
        }
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    pub fn color(&self) -> Option<Color32> {
        self.color
    }

    /// Stretch the box so its far corner sits at `pos`.
    ///
    /// The color is taken from `color_if_unset` only the first time a box is
    /// updated; later updates keep it.
    pub fn update(&mut self, pos: Pos2, color_if_unset: impl FnOnce() -> Color32) {
        self.extent = pos - self.anchor;
        if self.color.is_none() {
            self.color = Some(color_if_unset());
        }
    }

    pub fn to_rect(&self) -> Rect {
        Rect::from_two_pos(self.anchor, self.anchor + self.extent)
    }

    /// Freeze into an immutable [`Rectangle`].
    ///
    /// A box released without ever being moved has no color yet and receives
    /// `fallback_color`.
    pub fn freeze(self, fallback_color: impl FnOnce() -> Color32) -> Rectangle {
        let color = self.color.unwrap_or_else(fallback_color);
        Rectangle::new(
            self.anchor.x,
            self.anchor.y,
            self.extent.x,
            self.extent.y,
            color,
        )
    }
}
