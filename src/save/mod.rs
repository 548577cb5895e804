mod overlay;
mod pipeline;

pub use overlay::{Overlay, OverlayLayer, OverlayListener, OVERLAY_ALPHA, OVERLAY_SIZE};
pub use pipeline::SavePipeline;

use crate::element::Rectangle;
use crate::error::ListenerError;

/// Outcome of running a finished box through the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

/// Gets a say in whether a finished box is kept.
///
/// Returning `Ok(false)` vetoes the box, and so does returning an error.
/// Any side effects happen inside `on_save`, before the next listener runs.
pub trait SaveListener {
    fn on_save(&mut self, rect: &Rectangle) -> Result<bool, ListenerError>;

    /// Name used in log messages
    fn name(&self) -> &str {
        "listener"
    }
}

impl<F> SaveListener for F
where
    F: FnMut(&Rectangle) -> Result<bool, ListenerError>,
{
    fn on_save(&mut self, rect: &Rectangle) -> Result<bool, ListenerError> {
        self(rect)
    }
}
