//! Ingestion of loosely-shaped pixel data (JSON arrays of any nesting).
//!
//! Colour data is accepted whenever it reshapes to 8x8x3: a flat list of 192
//! numbers, 64 `[r, g, b]` triples, or an 8x8 grid of triples. Alpha data
//! reshapes to 8x8: 64 numbers flat or as 8 rows. Values outside `0..=255` are
//! clamped. Anything that is not an array of integers is a [`LayersError::Type`].

use serde_json::Value;

use crate::foundation::core::{PIXEL_COUNT, Rgb8};
use crate::foundation::error::{LayersError, LayersResult};
use crate::pixels::composite::compose_opt;
use crate::pixels::frame::Frame;

/// Flattened 8-bit values taken from a JSON tree, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelData {
    values: Vec<u8>,
}

impl PixelData {
    /// Flatten `value`, naming `field` in error messages.
    pub fn from_json(value: &Value, field: &str) -> LayersResult<Self> {
        let mut values = Vec::with_capacity(PIXEL_COUNT * 3);
        flatten_into(value, field, &mut values)?;
        Ok(Self { values })
    }

    /// Flattened values.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Number of flattened values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` when no values were found.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reshape into 64 RGB triples.
    pub fn to_rgb(&self) -> LayersResult<Vec<Rgb8>> {
        if self.values.len() != PIXEL_COUNT * 3 {
            return Err(LayersError::shape(format!(
                "rgb data has {} values, cannot reshape to 8x8x3",
                self.values.len()
            )));
        }
        Ok(self
            .values
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect())
    }

    /// Reshape into 64 alpha values.
    pub fn to_alpha(&self) -> LayersResult<Vec<u8>> {
        if self.values.len() != PIXEL_COUNT {
            return Err(LayersError::shape(format!(
                "alpha data has {} values, cannot reshape to 8x8",
                self.values.len()
            )));
        }
        Ok(self.values.clone())
    }
}

impl Frame {
    /// Build a frame from JSON colour and alpha data. See the module docs for accepted shapes.
    pub fn from_json(rgb: &Value, alpha: &Value) -> LayersResult<Self> {
        let rgb = PixelData::from_json(rgb, "rgb")?.to_rgb()?;
        let alpha = PixelData::from_json(alpha, "alpha")?.to_alpha()?;
        Frame::from_flat(&rgb, &alpha)
    }
}

/// Composite two dynamically-typed operands.
///
/// An operand is either a frame object `{"rgb": .., "alpha": ..}` or the zero
/// operand (`null` or the number `0`). Any other value is rejected with
/// [`LayersError::Type`] rather than coerced.
pub fn composite_json(front: &Value, back: &Value) -> LayersResult<Option<Frame>> {
    let front = operand_from_json(front, "front")?;
    let back = operand_from_json(back, "back")?;
    Ok(compose_opt(front, back))
}

fn operand_from_json(value: &Value, side: &str) -> LayersResult<Option<Frame>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) if n.as_u64() == Some(0) => Ok(None),
        Value::Object(map) => {
            let (Some(rgb), Some(alpha)) = (map.get("rgb"), map.get("alpha")) else {
                return Err(LayersError::type_error(format!(
                    "{side} operand object must have 'rgb' and 'alpha' fields"
                )));
            };
            Frame::from_json(rgb, alpha).map(Some)
        }
        other => Err(LayersError::type_error(format!(
            "{side} operand must be a frame object or zero, got {}",
            json_type_name(other)
        ))),
    }
}

fn flatten_into(value: &Value, field: &str, out: &mut Vec<u8>) -> LayersResult<()> {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten_into(item, field, out)?;
            }
            Ok(())
        }
        Value::Number(n) => {
            let v = if let Some(u) = n.as_u64() {
                u.min(255) as u8
            } else if let Some(i) = n.as_i64() {
                i.clamp(0, 255) as u8
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() && f.fract() == 0.0 => f.clamp(0.0, 255.0) as u8,
                    _ => {
                        return Err(LayersError::type_error(format!(
                            "{field} values must be integers, got {n}"
                        )));
                    }
                }
            };
            out.push(v);
            Ok(())
        }
        other => Err(LayersError::type_error(format!(
            "{field} must be an array of integers, found {}",
            json_type_name(other)
        ))),
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pixels/input.rs"]
mod tests;
