#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color_cycle;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod image_loader;
pub mod input;
pub mod renderer;
pub mod save;
pub mod state;
pub mod surface;
pub mod texture_manager;

pub use app::BoxCanvasApp;
pub use color_cycle::ColorCycle;
pub use config::CanvasConfig;
pub use document::{Document, Finalized};
pub use element::{BackgroundImage, ImageId, ImageSource, Item, LineCap, Rectangle, StrokeStyle};
pub use error::{ImageLoadError, ListenerError};
pub use event::CanvasEvent;
pub use image_loader::ImageLoader;
pub use input::InputHandler;
pub use renderer::Renderer;
pub use save::{Decision, OverlayLayer, OverlayListener, SaveListener, SavePipeline};
pub use state::{CanvasContext, InteractionState};
pub use surface::{DrawCommand, PainterSurface, RecordingSurface, Surface};
