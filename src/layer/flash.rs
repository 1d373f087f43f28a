use crate::foundation::core::FrameIndex;
use crate::foundation::error::{LayersError, LayersResult};
use crate::layer::model::Layer;
use crate::pixels::frame::Frame;

/// Default flash pattern: fully on, then fully off.
pub const DEFAULT_FLASH_PATTERN: [u8; 2] = [255, 0];

/// Scales an inner layer's alpha by an intensity picked cyclically from a pattern.
///
/// Intensity `255` shows the inner frame unchanged, `0` hides it; values in
/// between fade it. Colour is left as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct FlashingLayer {
    inner: Box<Layer>,
    pattern: Vec<u8>,
}

impl FlashingLayer {
    /// Wrap `inner`. Fails with [`LayersError::Config`] for an empty pattern.
    pub fn new(inner: Layer, pattern: Vec<u8>) -> LayersResult<Self> {
        if pattern.is_empty() {
            return Err(LayersError::config("flash pattern must be non-empty"));
        }
        Ok(Self::from_parts(inner, pattern))
    }

    /// `pattern` must be non-empty.
    pub(crate) fn from_parts(inner: Layer, pattern: Vec<u8>) -> Self {
        debug_assert!(!pattern.is_empty());
        Self {
            inner: Box::new(inner),
            pattern,
        }
    }

    /// Wrapped layer.
    pub fn inner(&self) -> &Layer {
        &self.inner
    }

    /// Intensity pattern, one entry per frame index.
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// Pattern length.
    pub fn frame_count(&self) -> u64 {
        self.pattern.len() as u64
    }

    /// Intensity applied at `frame`.
    pub fn intensity_at(&self, frame: FrameIndex) -> u8 {
        self.pattern[(frame.0 % self.frame_count()) as usize]
    }

    pub(crate) fn render(&self, frame: FrameIndex) -> Frame {
        self.inner
            .render(frame)
            .with_alpha_scaled(self.intensity_at(frame))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/flash.rs"]
mod tests;
