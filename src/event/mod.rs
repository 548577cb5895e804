mod events;

pub use events::CanvasEvent;
