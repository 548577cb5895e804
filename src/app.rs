use std::path::PathBuf;

use crate::config::CanvasConfig;
use crate::element::ImageSource;
use crate::image_loader::ImageLoader;
use crate::input::InputHandler;
use crate::save::{OverlayLayer, OverlayListener};
use crate::state::CanvasContext;
use crate::surface::{PainterSurface, Surface};

/// eframe host: owns the canvas and feeds it pointer input and image loads.
pub struct BoxCanvasApp {
    config: CanvasConfig,
    canvas: CanvasContext,
    surface: PainterSurface,
    loader: ImageLoader,
    input: InputHandler,
    overlays: OverlayLayer,
    show_debug: bool,
}

impl BoxCanvasApp {
    /// Called once before the first frame.
    ///
    /// `background` overrides the persisted background path.
    pub fn new(cc: &eframe::CreationContext<'_>, background: Option<PathBuf>) -> Self {
        let mut config: CanvasConfig = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        if background.is_some() {
            config.background = background;
        }

        let overlays = OverlayLayer::new();
        let mut canvas = CanvasContext::new(config.color_cycle());
        canvas.add_save_listener(
            OverlayListener::new(overlays.clone())
                .with_size(config.overlay_size)
                .with_alpha(config.overlay_alpha),
        );

        let mut loader = ImageLoader::new().with_repaint(cc.egui_ctx.clone());
        if let Some(path) = &config.background {
            let source = ImageSource::Path(path.clone());
            let id = canvas.push_background(source.clone());
            loader.load(id, source);
        }

        let mut surface = PainterSurface::new(
            cc.egui_ctx.clone(),
            config.size(),
            config.stroke_style(),
        );
        canvas.redraw(&mut surface);

        Self {
            config,
            canvas,
            surface,
            loader,
            input: InputHandler::new(egui::Rect::NOTHING),
            overlays,
            show_debug: false,
        }
    }

    fn debug_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_debug;
        egui::Window::new("Canvas Debug")
            .open(&mut open)
            .show(ctx, |ui| {
                let document = self.canvas.document();
                ui.label(format!("State: {}", self.canvas.state().name()));
                ui.label(format!("Committed items: {}", document.items().len()));
                ui.label(format!("Frames rendered: {}", self.canvas.renderer().frame_count()));
                ui.label(format!("Save listeners: {}", self.canvas.pipeline().len()));
                ui.label(format!("Overlays: {}", self.overlays.len()));
                ui.label(format!("Pending image loads: {}", self.loader.pending()));

                ui.separator();
                let mut line_width = self.config.line_width;
                ui.horizontal(|ui| {
                    ui.label("Line width:");
                    ui.add(egui::Slider::new(&mut line_width, 1.0..=20.0));
                });
                ui.checkbox(&mut self.config.show_overlays, "Show overlays");

                ui.separator();
                let rects: Vec<_> = document.rectangles().collect();
                let dump = serde_json::to_string_pretty(&rects)
                    .unwrap_or_else(|err| format!("<failed to serialize: {}>", err));
                egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                    ui.monospace(dump);
                });

                if line_width != self.config.line_width {
                    self.config.line_width = line_width;
                    let color = self.surface.stroke_style().color;
                    self.surface
                        .set_stroke_style(self.config.stroke_style().with_color(color));
                    self.canvas.redraw(&mut self.surface);
                }
            });
        self.show_debug = open;
    }
}

impl eframe::App for BoxCanvasApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for event in self.loader.poll() {
            self.canvas.handle_event(event, &mut self.surface);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Box Canvas");
                ui.separator();
                ui.toggle_value(&mut self.show_debug, "Debug");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            // Overlays live in the panel's coordinate space
            let container = ui.max_rect();

            let (response, painter) = ui.allocate_painter(self.surface.size(), egui::Sense::drag());
            let canvas_rect = response.rect;
            painter.rect_filled(canvas_rect, 0.0, ui.visuals().extreme_bg_color);

            self.input.set_canvas_rect(canvas_rect);
            self.overlays.set_surface_offset(canvas_rect.min - container.min);

            for event in self.input.process_input(ctx, response.hovered()) {
                self.canvas.handle_event(event, &mut self.surface);
            }

            self.surface.paint(&painter, canvas_rect.min);

            if self.config.show_overlays {
                let offset = container.min.to_vec2();
                for overlay in self.overlays.overlays() {
                    ui.painter().rect_filled(overlay.rect.translate(offset), 0.0, overlay.color);
                }
            }
        });

        if self.show_debug {
            self.debug_window(ctx);
        }
    }
}
