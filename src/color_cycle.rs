use egui::Color32;

/// Palette used when the host does not configure one.
pub const DEFAULT_PALETTE: [Color32; 4] = [
    Color32::BLUE,
    Color32::RED,
    Color32::YELLOW,
    Color32::GREEN,
];

/// Smallest palette for which skipping index 0 still leaves a color to hand out
pub const MIN_PALETTE_LEN: usize = 2;

/// Endless source of stroke colors.
///
/// The counter is advanced before the palette is indexed, so the first color
/// handed out is `palette[1 % n]`, never `palette[0]`. Boxes drawn by earlier
/// hosts were colored this way and the order is kept.
#[derive(Debug, Clone)]
pub struct ColorCycle {
    palette: Vec<Color32>,
    counter: usize,
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE.to_vec())
    }
}

impl ColorCycle {
    /// Create a cycle over `palette`. Palettes with fewer than two colors
    /// fall back to the default one.
    pub fn new(palette: Vec<Color32>) -> Self {
        let palette = if palette.len() < MIN_PALETTE_LEN {
            log::warn!(
                "Palette needs at least {} colors, got {}; using default colors",
                MIN_PALETTE_LEN,
                palette.len()
            );
            DEFAULT_PALETTE.to_vec()
        } else {
            palette
        };

        Self { palette, counter: 0 }
    }

    pub fn palette(&self) -> &[Color32] {
        &self.palette
    }

    /// How many colors have been handed out so far
    pub fn position(&self) -> usize {
        self.counter
    }
}

impl Iterator for ColorCycle {
    type Item = Color32;

    fn next(&mut self) -> Option<Color32> {
        Some(self.next_color())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl ColorCycle {
    /// Infallible shorthand for [`Iterator::next`].
    pub fn next_color(&mut self) -> Color32 {
        self.counter = self.counter.wrapping_add(1);
        self.palette[self.counter % self.palette.len()]
    }
}
