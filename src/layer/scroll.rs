use crate::foundation::core::{Axis, Direction, FrameIndex, HEIGHT, WIDTH};
use crate::layer::model::Layer;
use crate::pixels::frame::Frame;

/// Scrolls an inner layer along one axis, one pixel per frame index.
///
/// The inner frame is padded with `padding` transparent columns (east/west)
/// or rows (north/south), the padded strip is rotated by `sign * index`, and
/// the leading 8x8 window is kept. With `padding == 0` the image wraps
/// straight round with no gap.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollingLayer {
    inner: Box<Layer>,
    direction: Direction,
    padding: usize,
}

impl ScrollingLayer {
    /// Wrap `inner`.
    pub fn new(inner: Layer, direction: Direction, padding: usize) -> Self {
        Self {
            inner: Box::new(inner),
            direction,
            padding,
        }
    }

    /// Wrapped layer.
    pub fn inner(&self) -> &Layer {
        &self.inner
    }

    /// Scroll direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Blank pixels inserted between repeats.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Indices after which the scroll repeats: the padded strip length.
    pub fn frame_count(&self) -> u64 {
        (self.axis_len() + self.padding) as u64
    }

    pub(crate) fn render(&self, frame: FrameIndex) -> Frame {
        let src = self.inner.render(frame);
        let span = self.frame_count();
        let forward = frame.0 % span;
        let shift = if self.direction.sign() > 0 {
            forward
        } else {
            (span - forward) % span
        };
        // Output position p shows padded position (p - shift) mod span.
        let source_pos = |p: usize| ((p as u64 + span - shift) % span) as usize;

        let axis_len = self.axis_len();
        Frame::from_fn(|row, col| {
            let (row, col) = match self.direction.axis() {
                Axis::Horizontal => (row, source_pos(col)),
                Axis::Vertical => (source_pos(row), col),
            };
            let inside = match self.direction.axis() {
                Axis::Horizontal => col < axis_len,
                Axis::Vertical => row < axis_len,
            };
            if inside {
                src.pixel(row, col)
            } else {
                ([0, 0, 0], 0)
            }
        })
    }

    fn axis_len(&self) -> usize {
        match self.direction.axis() {
            Axis::Horizontal => WIDTH,
            Axis::Vertical => HEIGHT,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/scroll.rs"]
mod tests;
