use std::path::Path;

use anyhow::Context as _;
use serde_json::Value;

use crate::display::animator::AnimationConfig;
use crate::foundation::core::PIXEL_COUNT;
use crate::foundation::error::{LayersError, LayersResult};
use crate::layer::effect::Effect;
use crate::layer::model::Layer;
use crate::layer::static_layer::StaticLayer;
use crate::pixels::frame::Frame;
use crate::pixels::input::PixelData;
use crate::stack::layer_stack::LayerStack;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A complete layered animation description.
///
/// A scene is a pure data model that can be:
/// - written by hand as JSON and loaded with [`Scene::from_path`]
/// - checked with [`Scene::validate`]
/// - turned into a [`LayerStack`] with [`Scene::build`]
pub struct Scene {
    /// Stack name.
    #[serde(default = "default_scene_name")]
    pub name: String,
    /// Layers in back-to-front order.
    pub layers: Vec<SceneLayer>,
    /// Playback options.
    #[serde(default)]
    pub animation: AnimationConfig,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One layer of a [`Scene`].
pub struct SceneLayer {
    /// Unique layer name.
    pub name: String,
    /// Colour data reshapeable to 8x8x3, or a single `[r, g, b]` fill colour.
    pub rgb: Value,
    /// Alpha data reshapeable to 8x8, or a single fill value. Opaque when omitted.
    #[serde(default)]
    pub alpha: Option<Value>,
    /// Effects applied in order; the first one wraps the image directly.
    #[serde(default)]
    pub effects: Vec<Value>,
}

fn default_scene_name() -> String {
    "New Image".to_string()
}

impl Scene {
    /// Parse a scene from JSON text.
    pub fn from_json_str(json: &str) -> LayersResult<Self> {
        let scene = serde_json::from_str(json).context("parse scene JSON")?;
        Ok(scene)
    }

    /// Read and parse a scene file.
    pub fn from_path(path: impl AsRef<Path>) -> LayersResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read scene '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Run every check [`Scene::build`] does, discarding the stack.
    pub fn validate(&self) -> LayersResult<()> {
        self.build().map(|_| ())
    }

    /// Validate and build the layer stack.
    #[tracing::instrument(skip(self), fields(scene = %self.name, layers = self.layers.len()))]
    pub fn build(&self) -> LayersResult<LayerStack> {
        self.animation.validate()?;
        let mut stack = LayerStack::new(self.name.clone());
        for layer in &self.layers {
            stack.push_layer(layer.to_layer()?)?;
        }
        Ok(stack)
    }
}

impl SceneLayer {
    /// Decoded static image.
    pub fn frame(&self) -> LayersResult<Frame> {
        let rgb = PixelData::from_json(&self.rgb, "rgb")?;
        let rgb = if rgb.len() == 3 {
            let v = rgb.values();
            vec![[v[0], v[1], v[2]]; PIXEL_COUNT]
        } else {
            rgb.to_rgb()?
        };

        let alpha = match &self.alpha {
            None => vec![u8::MAX; PIXEL_COUNT],
            Some(value) => {
                let alpha = PixelData::from_json(value, "alpha")?;
                if alpha.len() == 1 {
                    vec![alpha.values()[0]; PIXEL_COUNT]
                } else {
                    alpha.to_alpha()?
                }
            }
        };

        Frame::from_flat(&rgb, &alpha)
            .map_err(|e| LayersError::shape(format!("layer '{}': {e}", self.name)))
    }

    /// Parsed effects, in application order.
    pub fn parsed_effects(&self) -> LayersResult<Vec<Effect>> {
        self.effects
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let effect: Effect = serde_json::from_value(value.clone()).map_err(|e| {
                    LayersError::config(format!("layer '{}' effect #{i}: {e}", self.name))
                })?;
                effect.validate()?;
                Ok(effect)
            })
            .collect()
    }

    /// Static image with every effect applied.
    pub fn to_layer(&self) -> LayersResult<Layer> {
        let mut layer: Layer = StaticLayer::new(self.name.clone(), self.frame()?).into();
        for effect in self.parsed_effects()? {
            layer = effect.apply(layer)?;
        }
        Ok(layer)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
