use serde_json::Value;

use crate::foundation::error::{LayersError, LayersResult};

/// Addresses a layer in a [`LayerStack`](crate::LayerStack) by name or position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayerRef {
    /// First layer whose name matches.
    Name(String),
    /// Position in insertion order.
    Index(usize),
}

impl LayerRef {
    /// Interpret a dynamic value: a string is a name, an unsigned integer an index.
    ///
    /// Anything else (negative or fractional numbers, arrays, objects, ...) is a
    /// [`LayersError::InvalidArgument`].
    pub fn from_json(value: &Value) -> LayersResult<Self> {
        match value {
            Value::String(s) => Ok(Self::Name(s.clone())),
            Value::Number(n) => n
                .as_u64()
                .and_then(|i| usize::try_from(i).ok())
                .map(Self::Index)
                .ok_or_else(|| {
                    LayersError::invalid_argument(format!(
                        "layer index must be a non-negative integer, got {n}"
                    ))
                }),
            other => Err(LayersError::invalid_argument(format!(
                "layer reference must be a name or an index, got {other}"
            ))),
        }
    }
}

impl From<&str> for LayerRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for LayerRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<usize> for LayerRef {
    fn from(idx: usize) -> Self {
        Self::Index(idx)
    }
}

impl std::fmt::Display for LayerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "'{name}'"),
            Self::Index(idx) => write!(f, "#{idx}"),
        }
    }
}
