use crate::foundation::core::{FrameIndex, lcm};
use crate::layer::flash::FlashingLayer;
use crate::layer::scroll::ScrollingLayer;
use crate::layer::static_layer::StaticLayer;
use crate::pixels::frame::Frame;

/// A time-parameterised source of frames.
///
/// Animated variants own the layer they wrap, so effects nest to any depth:
/// a flashing layer may wrap a scrolling layer that wraps another flashing
/// layer. Rendering is a pure function of the layer and the index.
///
/// Rendering, naming, period lookup and drop all recurse once per wrapper, so
/// nesting depth is bounded by the thread's stack: a few thousand wrappers can
/// overflow a 2 MiB thread. Keep chains shallow (tens of effects at most).
#[derive(Clone, Debug, PartialEq)]
pub enum Layer {
    /// Fixed image.
    Static(StaticLayer),
    /// Scroll transform over an inner layer.
    Scrolling(ScrollingLayer),
    /// Flash transform over an inner layer.
    Flashing(FlashingLayer),
}

impl Layer {
    /// Frame shown at `frame`. Any index is valid; animations repeat.
    pub fn render(&self, frame: FrameIndex) -> Frame {
        match self {
            Self::Static(layer) => layer.frame().clone(),
            Self::Scrolling(layer) => layer.render(frame),
            Self::Flashing(layer) => layer.render(frame),
        }
    }

    /// Name of the innermost static layer.
    pub fn name(&self) -> &str {
        match self {
            Self::Static(layer) => layer.name(),
            Self::Scrolling(layer) => layer.inner().name(),
            Self::Flashing(layer) => layer.inner().name(),
        }
    }

    /// Number of distinct frames of this layer's own transform.
    ///
    /// `1` for static layers, `8 + padding` for scrolling layers, the pattern
    /// length for flashing layers. Inner layers are not considered; see
    /// [`Layer::period`] for that.
    pub fn frame_count(&self) -> u64 {
        match self {
            Self::Static(_) => 1,
            Self::Scrolling(layer) => layer.frame_count(),
            Self::Flashing(layer) => layer.frame_count(),
        }
    }

    /// Indices after which the whole layer, inner layers included, repeats.
    pub fn period(&self) -> u64 {
        match self {
            Self::Static(_) => 1,
            Self::Scrolling(layer) => lcm(layer.frame_count(), layer.inner().period()),
            Self::Flashing(layer) => lcm(layer.frame_count(), layer.inner().period()),
        }
    }

    /// Number of transforms stacked on top of the static image.
    pub fn depth(&self) -> usize {
        match self {
            Self::Static(_) => 0,
            Self::Scrolling(layer) => 1 + layer.inner().depth(),
            Self::Flashing(layer) => 1 + layer.inner().depth(),
        }
    }

    /// Empty stand-in used while a layer is moved out to be wrapped.
    pub(crate) fn placeholder() -> Self {
        Self::Static(StaticLayer::new(String::new(), Frame::transparent()))
    }
}

impl From<StaticLayer> for Layer {
    fn from(layer: StaticLayer) -> Self {
        Self::Static(layer)
    }
}

impl From<ScrollingLayer> for Layer {
    fn from(layer: ScrollingLayer) -> Self {
        Self::Scrolling(layer)
    }
}

impl From<FlashingLayer> for Layer {
    fn from(layer: FlashingLayer) -> Self {
        Self::Flashing(layer)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/model.rs"]
mod tests;
