use rayon::prelude::*;

use crate::foundation::core::{Direction, FrameIndex, PIXEL_COUNT, Rgb8, lcm};
use crate::foundation::error::{LayersError, LayersResult};
use crate::layer::effect::Effect;
use crate::layer::model::Layer;
use crate::layer::static_layer::StaticLayer;
use crate::pixels::composite::composite_back_to_front;
use crate::pixels::frame::Frame;
use crate::stack::layer_ref::LayerRef;
use crate::stack::sequence::FrameSequence;

/// Ordered collection of layers composited into a single frame.
///
/// Insertion order is back-to-front: the first layer added is furthest from
/// the viewer and every later layer is painted over it. Layers are never
/// removed; an effect replaces a layer in place with a wrapped version of
/// itself, so effects stack.
///
/// Rendering takes `&self` and is a pure function of the configuration and
/// the index, so frames can be rendered from many threads at once.
/// Configuration calls take `&mut self` and are therefore serialized by the
/// borrow checker.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerStack {
    name: String,
    layers: Vec<Layer>,
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new("New Image")
    }
}

impl LayerStack {
    /// Empty stack.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layers: Vec::new(),
        }
    }

    /// Stack name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// `true` when no layers were added.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layers in back-to-front order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layer names in back-to-front order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(Layer::name)
    }

    /// Index of the first layer named `name`.
    pub fn layer_index(&self, name: &str) -> Option<usize> {
        self.layers.iter().position(|l| l.name() == name)
    }

    /// Resolve a reference to an index.
    pub fn resolve(&self, layer: &LayerRef) -> LayersResult<usize> {
        match layer {
            LayerRef::Name(name) => self
                .layer_index(name)
                .ok_or_else(|| LayersError::not_found(format!("no layer named '{name}'"))),
            LayerRef::Index(idx) if *idx < self.layers.len() => Ok(*idx),
            LayerRef::Index(idx) => Err(LayersError::invalid_argument(format!(
                "layer index {idx} is out of range for {} layers",
                self.layers.len()
            ))),
        }
    }

    /// Look up a layer.
    pub fn get(&self, layer: impl Into<LayerRef>) -> LayersResult<&Layer> {
        let idx = self.resolve(&layer.into())?;
        Ok(&self.layers[idx])
    }

    /// Append a static layer from 64 RGB triples and 64 alpha values.
    ///
    /// Returns the new layer's index. Fails with [`LayersError::Shape`] for
    /// wrongly-sized input and [`LayersError::DuplicateName`] if `name` is taken.
    pub fn add_layer(
        &mut self,
        rgb: &[Rgb8],
        alpha: &[u8],
        name: impl Into<String>,
    ) -> LayersResult<usize> {
        let name = name.into();
        self.ensure_unique(&name)?;
        self.push_layer(StaticLayer::from_flat(name, rgb, alpha)?.into())
    }

    /// Append a static layer showing `frame`.
    pub fn add_frame(&mut self, name: impl Into<String>, frame: Frame) -> LayersResult<usize> {
        self.push_layer(StaticLayer::new(name, frame).into())
    }

    /// Append any layer, already wrapped or not.
    pub fn push_layer(&mut self, layer: Layer) -> LayersResult<usize> {
        self.ensure_unique(layer.name())?;
        tracing::debug!(
            stack = %self.name,
            layer = layer.name(),
            index = self.layers.len(),
            "layer added"
        );
        self.layers.push(layer);
        Ok(self.layers.len() - 1)
    }

    /// Replace the referenced layer with `effect` wrapped around it.
    ///
    /// Fails with [`LayersError::NotFound`] for an unknown name,
    /// [`LayersError::InvalidArgument`] for an out-of-range index and
    /// [`LayersError::Config`] for invalid effect parameters. The stack is left
    /// unchanged on error.
    pub fn wrap_layer(&mut self, layer: impl Into<LayerRef>, effect: &Effect) -> LayersResult<()> {
        let layer = layer.into();
        let idx = self.resolve(&layer)?;
        effect.validate()?;
        let inner = std::mem::replace(&mut self.layers[idx], Layer::placeholder());
        let wrapped = effect.wrap(inner);
        tracing::debug!(
            stack = %self.name,
            layer = %layer,
            index = idx,
            effect = effect.label(),
            "layer wrapped"
        );
        self.layers[idx] = wrapped;
        Ok(())
    }

    /// Make the referenced layer scroll. See [`crate::ScrollingLayer`].
    pub fn add_effect_scrolling(
        &mut self,
        layer: impl Into<LayerRef>,
        direction: Direction,
        padding: usize,
    ) -> LayersResult<()> {
        self.wrap_layer(layer, &Effect::Scroll { direction, padding })
    }

    /// Make the referenced layer flash. See [`crate::FlashingLayer`].
    pub fn add_effect_flashing(
        &mut self,
        layer: impl Into<LayerRef>,
        pattern: Vec<u8>,
    ) -> LayersResult<()> {
        self.wrap_layer(layer, &Effect::Flash { pattern })
    }

    /// Indices after which the composite repeats (lcm of every layer's period).
    pub fn period(&self) -> u64 {
        self.layers.iter().map(Layer::period).fold(1, lcm)
    }

    /// Every layer rendered at `frame`, back-to-front.
    pub fn render_layers(&self, frame: FrameIndex) -> Vec<Frame> {
        self.layers.iter().map(|l| l.render(frame)).collect()
    }

    /// Composite of all layers at `frame`, last-added layer on top.
    ///
    /// An empty stack renders a fully transparent frame. A single layer is
    /// returned as rendered: a flashed-off layer keeps its colour with alpha 0
    /// and only shows as black once exported with [`Frame::to_pixels`] and
    /// `use_alpha` set (as [`LayerStack::pixels_at`] does for the display).
    #[tracing::instrument(level = "trace", skip(self), fields(stack = %self.name))]
    pub fn render_composite(&self, frame: FrameIndex) -> Frame {
        composite_back_to_front(self.layers.iter().map(|l| l.render(frame))).unwrap_or_default()
    }

    /// Row-major display pixels of the composite at `frame`.
    pub fn pixels_at(&self, frame: FrameIndex, use_alpha: bool) -> [Rgb8; PIXEL_COUNT] {
        self.render_composite(frame).to_pixels(use_alpha)
    }

    /// Composites for indices `0..n`, rendered in parallel, in index order.
    #[tracing::instrument(skip(self), fields(stack = %self.name, layers = self.layers.len()))]
    pub fn render_sequence(&self, n: u64) -> Vec<Frame> {
        (0..n)
            .into_par_iter()
            .map(|i| self.render_composite(FrameIndex(i)))
            .collect()
    }

    /// Same output as [`LayerStack::render_sequence`], on the calling thread.
    pub fn render_sequence_serial(&self, n: u64) -> Vec<Frame> {
        self.frames().take_frames(n).collect()
    }

    /// Lazy sequence of composites starting at index 0. Endless until limited.
    pub fn frames(&self) -> FrameSequence<'_> {
        FrameSequence::looping(self)
    }

    fn ensure_unique(&self, name: &str) -> LayersResult<()> {
        if self.layer_index(name).is_some() {
            return Err(LayersError::duplicate_name(format!(
                "a layer named '{name}' already exists"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stack/layer_stack.rs"]
mod tests;
