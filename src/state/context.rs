//! Owner of all mutable canvas state, driving the interaction state machine.
//!
//! `CanvasContext` holds the document, the color cycle, the save pipeline and
//! the renderer. Hosts feed it [`CanvasEvent`]s one at a time together with the
//! surface to paint on; nothing else mutates the drawing.
//!
//! # Example
//!
//! ```rust
//! use box_canvas::{CanvasContext, CanvasEvent, RecordingSurface};
//! use egui::{pos2, vec2};
//!
//! let mut canvas = CanvasContext::default();
//! let mut surface = RecordingSurface::new(vec2(640.0, 480.0));
//!
//! canvas.handle_event(CanvasEvent::PointerDown { pos: pos2(10.0, 10.0) }, &mut surface);
//! canvas.handle_event(CanvasEvent::PointerMove { pos: pos2(50.0, 40.0) }, &mut surface);
//! canvas.handle_event(CanvasEvent::PointerUp { pos: pos2(50.0, 40.0) }, &mut surface);
//!
//! assert_eq!(canvas.document().rectangles().count(), 1);
//! ```
use egui::{Color32, ColorImage, Pos2};
use std::sync::Arc;

use super::InteractionState;
use crate::color_cycle::ColorCycle;
use crate::document::{Document, Finalized};
use crate::element::{ImageId, ImageSource};
use crate::event::CanvasEvent;
use crate::renderer::Renderer;
use crate::save::{SaveListener, SavePipeline};
use crate::surface::Surface;

#[derive(Debug, Default)]
pub struct CanvasContext {
    state: InteractionState,
    document: Document,
    colors: ColorCycle,
    /// Color of the drag in progress, cleared on release
    current_color: Option<Color32>,
    pipeline: SavePipeline,
    renderer: Renderer,
}

impl CanvasContext {
    pub fn new(colors: ColorCycle) -> Self {
        Self {
            colors,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn current_color(&self) -> Option<Color32> {
        self.current_color
    }

    pub fn colors(&self) -> &ColorCycle {
        &self.colors
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn pipeline(&self) -> &SavePipeline {
        &self.pipeline
    }

    /// Register a listener that can veto finished boxes
    pub fn add_save_listener(&mut self, listener: impl SaveListener + 'static) {
        self.pipeline.register(listener);
    }

    /// Append a background image; it is drawn once its pixels arrive
    /// through [`CanvasEvent::ImageLoaded`].
    pub fn push_background(&mut self, source: ImageSource) -> ImageId {
        self.document.push_background(source)
    }

    /// Dispatch a single event.
    ///
    /// Returns what happened to the provisional box when the event ended a drag.
    pub fn handle_event(&mut self, event: CanvasEvent, surface: &mut dyn Surface) -> Option<Finalized> {
        log::trace!("{} in state {}", event.name(), self.state.name());

        match event {
            CanvasEvent::PointerDown { pos } => {
                self.pointer_down(pos);
                None
            }
            CanvasEvent::PointerMove { pos } => {
                self.pointer_move(pos, surface);
                None
            }
            CanvasEvent::PointerUp { .. } => self.pointer_up(surface),
            CanvasEvent::ImageLoaded { id, pixels } => {
                self.image_loaded(id, pixels, surface);
                None
            }
        }
    }

    /// Repaint everything, e.g. after the host recreated its surface
    pub fn redraw(&mut self, surface: &mut dyn Surface) {
        self.renderer
            .render(surface, self.document.items(), self.document.provisional());
    }

    fn pointer_down(&mut self, pos: Pos2) {
        if self.state.is_dragging() {
            log::debug!("Pointer down at {:?} while dragging, ignored", pos);
            return;
        }

        self.state = InteractionState::Dragging { anchor: pos };
        self.document.begin_provisional(pos);
        log::debug!("Drag started at {:?}", pos);
    }

    fn pointer_move(&mut self, pos: Pos2, surface: &mut dyn Surface) {
        if !self.state.is_dragging() {
            return;
        }

        let color = *self
            .current_color
            .get_or_insert_with(|| self.colors.next_color());
        Renderer::set_ambient_color(surface, color);
        self.document.update_provisional(pos, || color);
        self.redraw(surface);
    }

    fn pointer_up(&mut self, surface: &mut dyn Surface) -> Option<Finalized> {
        self.state = InteractionState::Idle;

        let colors = &mut self.colors;
        let result = self
            .document
            .commit_or_discard_provisional(&mut self.pipeline, || colors.next_color());
        self.current_color = None;

        if result.is_some() {
            self.redraw(surface);
        }
        result
    }

    fn image_loaded(&mut self, id: ImageId, pixels: Arc<ColorImage>, surface: &mut dyn Surface) {
        if self.document.set_background_pixels(id, pixels) {
            log::info!("Background {} ready", id);
            self.redraw(surface);
        }
    }
}
