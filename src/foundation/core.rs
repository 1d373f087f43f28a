use std::str::FromStr;

use crate::foundation::error::{LayersError, LayersResult};

/// Matrix width in pixels.
pub const WIDTH: usize = 8;
/// Matrix height in pixels.
pub const HEIGHT: usize = 8;
/// Number of pixels in one frame.
pub const PIXEL_COUNT: usize = WIDTH * HEIGHT;

/// One RGB pixel, 8 bits per channel.
pub type Rgb8 = [u8; 3];

/// Colour grid of one frame, indexed `[row][col]`.
pub type RgbGrid = [[Rgb8; WIDTH]; HEIGHT];

/// Alpha grid of one frame, indexed `[row][col]`.
pub type AlphaGrid = [[u8; WIDTH]; HEIGHT];

/// 0-based discrete time index of an animation.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl From<u64> for FrameIndex {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Grid axis a scroll moves along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Rows move (north/south).
    Vertical,
    /// Columns move (east/west).
    Horizontal,
}

/// Compass direction of a scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Direction {
    /// Up.
    N,
    /// Down.
    S,
    /// Content travels towards higher column indices.
    #[default]
    E,
    /// Content travels towards lower column indices.
    W,
}

impl Direction {
    /// Axis the content moves along.
    pub fn axis(self) -> Axis {
        match self {
            Self::N | Self::S => Axis::Vertical,
            Self::E | Self::W => Axis::Horizontal,
        }
    }

    /// `+1` for south/east, `-1` for north/west.
    pub fn sign(self) -> i64 {
        match self {
            Self::S | Self::E => 1,
            Self::N | Self::W => -1,
        }
    }

    /// Single-letter name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::S => "S",
            Self::E => "E",
            Self::W => "W",
        }
    }
}

impl FromStr for Direction {
    type Err = LayersError;

    fn from_str(s: &str) -> LayersResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Self::N),
            "s" | "south" => Ok(Self::S),
            "e" | "east" => Ok(Self::E),
            "w" | "west" => Ok(Self::W),
            other => Err(LayersError::config(format!(
                "unknown scroll direction '{other}' (expected N, S, E or W)"
            ))),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = LayersError;

    fn try_from(s: String) -> LayersResult<Self> {
        s.parse()
    }
}

impl From<Direction> for String {
    fn from(d: Direction) -> Self {
        d.as_str().to_string()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `round(x * y / 255)` for 8-bit operands.
pub fn mul_div255(x: u8, y: u8) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

/// Least common multiple, saturating on overflow.
pub(crate) fn lcm(a: u64, b: u64) -> u64 {
    fn gcd(mut a: u64, mut b: u64) -> u64 {
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }

    if a == 0 || b == 0 {
        return a.max(b);
    }
    (a / gcd(a, b)).saturating_mul(b)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
