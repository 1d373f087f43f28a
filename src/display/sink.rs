use crate::foundation::core::{PIXEL_COUNT, Rgb8};
use crate::foundation::error::LayersResult;

/// Anything that can show a full 8x8 frame of pixels.
///
/// `pixels` is row-major: index 0 is the top-left pixel, 63 the bottom-right.
pub trait DisplaySink {
    /// Replace everything on the display.
    fn set_pixels(&mut self, pixels: &[Rgb8; PIXEL_COUNT]) -> LayersResult<()>;

    /// Turn every pixel off.
    fn clear(&mut self) -> LayersResult<()> {
        self.set_pixels(&[[0, 0, 0]; PIXEL_COUNT])
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn set_pixels(&mut self, pixels: &[Rgb8; PIXEL_COUNT]) -> LayersResult<()> {
        (**self).set_pixels(pixels)
    }

    fn clear(&mut self) -> LayersResult<()> {
        (**self).clear()
    }
}

/// In-memory sink keeping every buffer it was sent.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    frames: Vec<[Rgb8; PIXEL_COUNT]>,
}

impl RecordingSink {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers in the order they were sent.
    pub fn frames(&self) -> &[[Rgb8; PIXEL_COUNT]] {
        &self.frames
    }

    /// Most recent buffer.
    pub fn last(&self) -> Option<&[Rgb8; PIXEL_COUNT]> {
        self.frames.last()
    }
}

impl DisplaySink for RecordingSink {
    fn set_pixels(&mut self, pixels: &[Rgb8; PIXEL_COUNT]) -> LayersResult<()> {
        self.frames.push(*pixels);
        Ok(())
    }
}
