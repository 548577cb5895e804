use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::color_cycle::{ColorCycle, DEFAULT_PALETTE};
use crate::element::{LineCap, StrokeStyle};
use crate::save::{OVERLAY_ALPHA, OVERLAY_SIZE};

/// Host settings, persisted between runs. The drawing itself is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct CanvasConfig {
    /// Surface size in points
    pub width: f32,
    pub height: f32,
    pub line_width: f32,
    pub line_cap: LineCap,
    pub palette: Vec<Color32>,
    /// Image stretched behind the boxes
    pub background: Option<PathBuf>,
    pub show_overlays: bool,
    pub overlay_size: f32,
    pub overlay_alpha: u8,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            line_width: 5.0,
            line_cap: LineCap::Round,
            palette: DEFAULT_PALETTE.to_vec(),
            background: None,
            show_overlays: true,
            overlay_size: OVERLAY_SIZE,
            overlay_alpha: OVERLAY_ALPHA,
        }
    }
}

impl CanvasConfig {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width.max(1.0), self.height.max(1.0))
    }

    /// Pen the surface starts with
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            line_cap: self.line_cap,
            line_width: self.line_width,
            ..StrokeStyle::default()
        }
    }

    pub fn color_cycle(&self) -> ColorCycle {
        ColorCycle::new(self.palette.clone())
    }
}
