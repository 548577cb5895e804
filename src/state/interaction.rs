//! Pointer interaction state of the canvas.
//!
//! ```text
//!              pointer down
//!   ┌──────┐ ──────────────► ┌──────────┐ ◄─┐
//!   │ Idle │                 │ Dragging │   │ pointer move
//!   └──────┘ ◄────────────── └──────────┘ ──┘
//!              pointer up
//! ```
//!
//! Moves while idle are ignored outright. A pointer up while idle is allowed
//! and changes nothing.
use egui::Pos2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// A box is being dragged out from `anchor` (surface-local)
    Dragging { anchor: Pos2 },
}

impl InteractionState {
    /// Whether pointer moves currently draw
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Where the current drag started, `None` while idle
    pub fn anchor(&self) -> Option<Pos2> {
        match self {
            Self::Dragging { anchor } => Some(*anchor),
            Self::Idle => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Dragging { .. } => "Dragging",
        }
    }
}
