use egui::{Context, PointerButton, Pos2, Rect};

use crate::event::CanvasEvent;

/// Turns raw egui pointer input into [`CanvasEvent`]s.
///
/// Positions are corrected by the canvas' on-screen offset, so events carry
/// surface-local coordinates. Only the primary button draws.
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self { canvas_rect }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Screen position to surface-local position
    pub fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Collect this frame's pointer events in the order they happened.
    ///
    /// Presses only start a drag when they land on the canvas and
    /// `canvas_hovered` is set (nothing else is on top of it). Releases are
    /// always forwarded so a drag that leaves the canvas still ends.
    pub fn process_input(&self, ctx: &Context, canvas_hovered: bool) -> Vec<CanvasEvent> {
        ctx.input(|input| {
            input
                .raw
                .events
                .iter()
                .filter_map(|event| self.translate(event, canvas_hovered))
                .collect()
        })
    }

    fn translate(&self, event: &egui::Event, canvas_hovered: bool) -> Option<CanvasEvent> {
        match event {
            egui::Event::PointerMoved(pos) => Some(CanvasEvent::PointerMove {
                pos: self.to_local(*pos),
            }),
            egui::Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                ..
            } if canvas_hovered && self.canvas_rect.contains(*pos) => Some(CanvasEvent::PointerDown {
                pos: self.to_local(*pos),
            }),
            egui::Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: false,
                ..
            } => Some(CanvasEvent::PointerUp {
                pos: self.to_local(*pos),
            }),
            _ => None,
        }
    }
}
