mod interaction;
pub mod context;

pub use interaction::InteractionState;
pub use context::CanvasContext;
