use crate::foundation::core::Rgb8;
use crate::foundation::error::LayersResult;
use crate::pixels::frame::Frame;

/// A fixed image that renders the same frame at every index.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticLayer {
    name: String,
    frame: Frame,
}

impl StaticLayer {
    /// Wrap an existing frame.
    pub fn new(name: impl Into<String>, frame: Frame) -> Self {
        Self {
            name: name.into(),
            frame,
        }
    }

    /// Build from 64 row-major RGB triples and 64 alpha values.
    pub fn from_flat(name: impl Into<String>, rgb: &[Rgb8], alpha: &[u8]) -> LayersResult<Self> {
        Ok(Self::new(name, Frame::from_flat(rgb, alpha)?))
    }

    /// Layer name used for lookup in a stack.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored image.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}
