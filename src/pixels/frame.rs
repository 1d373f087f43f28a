use crate::foundation::core::{AlphaGrid, HEIGHT, PIXEL_COUNT, Rgb8, RgbGrid, WIDTH, mul_div255};
use crate::foundation::error::{LayersError, LayersResult};

/// Immutable 8x8 image snapshot: per-pixel RGB plus 8-bit alpha.
///
/// Alpha `0` is fully transparent, `255` fully opaque. Colour is stored
/// straight (not premultiplied); [`Frame::to_pixels`] premultiplies on export
/// when the display has no alpha channel of its own.
///
/// Frames are never mutated after construction. Compositing
/// ([`Frame::over`], `front + back`) always produces a new frame.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
    rgb: RgbGrid,
    alpha: AlphaGrid,
}

impl Frame {
    /// Build a frame from already-shaped grids.
    pub fn new(rgb: RgbGrid, alpha: AlphaGrid) -> Self {
        Self { rgb, alpha }
    }

    /// Fully transparent black frame.
    pub fn transparent() -> Self {
        Self::filled([0, 0, 0], 0)
    }

    /// Every pixel set to the same colour and alpha.
    pub fn filled(rgb: Rgb8, alpha: u8) -> Self {
        Self {
            rgb: [[rgb; WIDTH]; HEIGHT],
            alpha: [[alpha; WIDTH]; HEIGHT],
        }
    }

    /// Build a frame by sampling `f(row, col) -> (rgb, alpha)` for every pixel.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> (Rgb8, u8)) -> Self {
        let mut out = Self::transparent();
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                let (rgb, a) = f(row, col);
                out.rgb[row][col] = rgb;
                out.alpha[row][col] = a;
            }
        }
        out
    }

    /// Build a frame from 64 row-major RGB triples and 64 alpha values.
    pub fn from_flat(rgb: &[Rgb8], alpha: &[u8]) -> LayersResult<Self> {
        if rgb.len() != PIXEL_COUNT {
            return Err(LayersError::shape(format!(
                "rgb must contain {PIXEL_COUNT} triples to reshape to {HEIGHT}x{WIDTH}x3, got {}",
                rgb.len()
            )));
        }
        check_alpha_len(alpha.len())?;
        Ok(Self::from_fn(|row, col| {
            let i = row * WIDTH + col;
            (rgb[i], alpha[i])
        }))
    }

    /// Build a frame from 192 interleaved channel values and 64 alpha values.
    pub fn from_channels(rgb: &[u8], alpha: &[u8]) -> LayersResult<Self> {
        if rgb.len() != PIXEL_COUNT * 3 {
            return Err(LayersError::shape(format!(
                "rgb must contain {} channel values to reshape to {HEIGHT}x{WIDTH}x3, got {}",
                PIXEL_COUNT * 3,
                rgb.len()
            )));
        }
        check_alpha_len(alpha.len())?;
        Ok(Self::from_fn(|row, col| {
            let i = row * WIDTH + col;
            ([rgb[i * 3], rgb[i * 3 + 1], rgb[i * 3 + 2]], alpha[i])
        }))
    }

    /// Colour grid, indexed `[row][col]`.
    pub fn rgb(&self) -> &RgbGrid {
        &self.rgb
    }

    /// Alpha grid, indexed `[row][col]`.
    pub fn alpha(&self) -> &AlphaGrid {
        &self.alpha
    }

    /// Colour and alpha of one pixel.
    ///
    /// Panics if `row` or `col` is outside the 8x8 grid.
    pub fn pixel(&self, row: usize, col: usize) -> (Rgb8, u8) {
        (self.rgb[row][col], self.alpha[row][col])
    }

    /// `true` when every pixel has alpha 255.
    pub fn is_opaque(&self) -> bool {
        self.alpha.iter().flatten().all(|&a| a == u8::MAX)
    }

    /// `true` when every pixel has alpha 0.
    pub fn is_transparent(&self) -> bool {
        self.alpha.iter().flatten().all(|&a| a == 0)
    }

    /// Same colours, every alpha multiplied by `intensity / 255` (rounded).
    pub fn with_alpha_scaled(&self, intensity: u8) -> Self {
        let mut out = self.clone();
        for a in out.alpha.iter_mut().flatten() {
            *a = mul_div255(*a, intensity);
        }
        out
    }

    /// Row-major list of 64 pixels for a display sink.
    ///
    /// With `use_alpha` each channel is premultiplied by the pixel's alpha, so a
    /// transparent pixel shows as black on a display without its own alpha.
    pub fn to_pixels(&self, use_alpha: bool) -> [Rgb8; PIXEL_COUNT] {
        let mut out = [[0u8; 3]; PIXEL_COUNT];
        for (i, px) in out.iter_mut().enumerate() {
            let (rgb, a) = self.pixel(i / WIDTH, i % WIDTH);
            *px = if use_alpha {
                rgb.map(|c| mul_div255(c, a))
            } else {
                rgb
            };
        }
        out
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::transparent()
    }
}

fn check_alpha_len(len: usize) -> LayersResult<()> {
    if len != PIXEL_COUNT {
        return Err(LayersError::shape(format!(
            "alpha must contain {PIXEL_COUNT} values to reshape to {HEIGHT}x{WIDTH}, got {len}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/pixels/frame.rs"]
mod tests;
