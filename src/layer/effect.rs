use crate::foundation::core::Direction;
use crate::foundation::error::{LayersError, LayersResult};
use crate::layer::flash::{DEFAULT_FLASH_PATTERN, FlashingLayer};
use crate::layer::model::Layer;
use crate::layer::scroll::ScrollingLayer;

/// An animation transform that can wrap a layer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// See [`ScrollingLayer`].
    Scroll {
        /// Travel direction.
        #[serde(default)]
        direction: Direction,
        /// Blank pixels between repeats.
        #[serde(default)]
        padding: usize,
    },
    /// See [`FlashingLayer`].
    Flash {
        /// Intensities applied cyclically.
        #[serde(default = "default_pattern")]
        pattern: Vec<u8>,
    },
}

fn default_pattern() -> Vec<u8> {
    DEFAULT_FLASH_PATTERN.to_vec()
}

impl Effect {
    /// Scroll east with no padding.
    pub fn scroll() -> Self {
        Self::Scroll {
            direction: Direction::default(),
            padding: 0,
        }
    }

    /// Flash with the default on/off pattern.
    pub fn flash() -> Self {
        Self::Flash {
            pattern: default_pattern(),
        }
    }

    /// Check parameters without building anything.
    pub fn validate(&self) -> LayersResult<()> {
        match self {
            Self::Scroll { .. } => Ok(()),
            Self::Flash { pattern } if pattern.is_empty() => {
                Err(LayersError::config("flash pattern must be non-empty"))
            }
            Self::Flash { .. } => Ok(()),
        }
    }

    /// Wrap `inner` in this transform.
    pub fn apply(&self, inner: Layer) -> LayersResult<Layer> {
        self.validate()?;
        Ok(self.wrap(inner))
    }

    /// [`Effect::apply`] for an effect that already passed [`Effect::validate`].
    pub(crate) fn wrap(&self, inner: Layer) -> Layer {
        match self {
            Self::Scroll { direction, padding } => {
                ScrollingLayer::new(inner, *direction, *padding).into()
            }
            Self::Flash { pattern } => FlashingLayer::from_parts(inner, pattern.clone()).into(),
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Scroll { .. } => "scroll",
            Self::Flash { .. } => "flash",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/effect.rs"]
mod tests;
