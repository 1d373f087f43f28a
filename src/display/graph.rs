use crate::display::sink::DisplaySink;
use crate::foundation::core::{HEIGHT, PIXEL_COUNT, Rgb8, WIDTH};
use crate::foundation::error::LayersResult;

/// Default bar colour.
pub const DEFAULT_BAR_COLOUR: Rgb8 = [255, 0, 0];

/// Scrolling bar chart: every new bar enters on the right, older bars move left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarGraph {
    colour: Rgb8,
    pixels: [Rgb8; PIXEL_COUNT],
}

impl Default for BarGraph {
    fn default() -> Self {
        Self::new(DEFAULT_BAR_COLOUR)
    }
}

impl BarGraph {
    /// Empty graph drawing bars in `colour`.
    pub fn new(colour: Rgb8) -> Self {
        Self {
            colour,
            pixels: [[0, 0, 0]; PIXEL_COUNT],
        }
    }

    /// Bar colour.
    pub fn colour(&self) -> Rgb8 {
        self.colour
    }

    /// Current row-major pixel buffer.
    pub fn pixels(&self) -> &[Rgb8; PIXEL_COUNT] {
        &self.pixels
    }

    /// Blank the graph.
    pub fn clear(&mut self) {
        self.pixels = [[0, 0, 0]; PIXEL_COUNT];
    }

    /// Shift every bar one column left and draw a bar of height `value` (a
    /// fraction in `[0, 1]`) in the right-most column.
    ///
    /// The bar grows from the bottom; a fractional top pixel is dimmed in
    /// proportion to the remainder.
    pub fn add_bar(&mut self, value: f64) {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };

        for row in self.pixels.chunks_exact_mut(WIDTH) {
            row.rotate_left(1);
        }

        let mut remaining = value * HEIGHT as f64;
        for row in (0..HEIGHT).rev() {
            let px = if remaining >= 1.0 {
                remaining -= 1.0;
                self.colour
            } else if remaining > 0.0 {
                let scale = remaining;
                remaining = 0.0;
                self.colour
                    .map(|c| (f64::from(c) * scale).round().clamp(0.0, 255.0) as u8)
            } else {
                [0, 0, 0]
            };
            self.pixels[row * WIDTH + WIDTH - 1] = px;
        }
    }

    /// Send the current buffer to `sink`.
    pub fn push_to(&self, sink: &mut impl DisplaySink) -> LayersResult<()> {
        sink.set_pixels(&self.pixels)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/graph.rs"]
mod tests;
